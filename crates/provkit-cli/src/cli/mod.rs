//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text, and value enums.  No business logic lives here.

use clap::Parser;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// Environment variable naming the BIQT installation directory.
pub const BIQT_HOME_ENV: &str = "BIQT_HOME";

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "provkit",
    bin_name = "provkit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold a new BIQT provider",
    long_about = "provkit creates the directory layout for a new BIQT quality \
                  provider and instantiates the provider templates shipped \
                  with the BIQT installation ($BIQT_HOME/scripts/templates).",
    after_help = "EXAMPLES:\n\
        \x20 provkit Iris3\n\
        \x20 provkit --dry-run face_quality\n\
        \x20 BIQT_HOME=/opt/biqt provkit finger-nfiq --output-format json",
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Name of the new provider.  Letters, digits, `_` and `-` only.
    ///
    /// Optional at parse time so that a missing `BIQT_HOME` is reported
    /// first; `main` rejects an absent name once configuration has loaded.
    #[arg(value_name = "PNAME", help = "Name of new provider algorithm")]
    pub pname: Option<String>,

    /// BIQT installation directory.
    ///
    /// Kept as a plain string so an empty value reaches configuration
    /// loading and is reported there.
    #[arg(
        long = "biqt-home",
        value_name = "DIR",
        env = BIQT_HOME_ENV,
        help = "BIQT installation directory"
    )]
    pub biqt_home: Option<String>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_positional_name() {
        let cli = Cli::try_parse_from(["provkit", "--biqt-home", "/opt/biqt", "Iris3"]).unwrap();
        assert_eq!(cli.pname.as_deref(), Some("Iris3"));
        assert_eq!(cli.biqt_home.as_deref(), Some("/opt/biqt"));
        assert!(!cli.dry_run);
    }

    #[test]
    fn missing_name_parses_to_none() {
        let cli = Cli::try_parse_from(["provkit", "--biqt-home", "/opt/biqt"]).unwrap();
        assert!(cli.pname.is_none());
    }

    #[test]
    fn extra_positional_is_rejected() {
        assert!(Cli::try_parse_from(["provkit", "--biqt-home", "/x", "A", "B"]).is_err());
    }

    #[test]
    fn name_is_not_validated_by_clap() {
        // Validation happens after configuration is loaded.
        let cli = Cli::try_parse_from(["provkit", "--biqt-home", "/x", "bad name"]).unwrap();
        assert_eq!(cli.pname.as_deref(), Some("bad name"));
    }

    #[test]
    fn dry_run_flag() {
        let cli = Cli::try_parse_from(["provkit", "--biqt-home", "/x", "--dry-run", "Iris3"]).unwrap();
        assert!(cli.dry_run);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["provkit", "--quiet", "--verbose", "Iris3"]);
        assert!(result.is_err());
    }

    #[test]
    fn verbose_counts() {
        let cli = Cli::try_parse_from(["provkit", "-vvv", "--biqt-home", "/x", "Iris3"]).unwrap();
        assert_eq!(cli.global.verbose, 3);
    }

    #[test]
    fn output_format_json() {
        let cli = Cli::try_parse_from([
            "provkit",
            "--output-format",
            "json",
            "--biqt-home",
            "/x",
            "Iris3",
        ])
        .unwrap();
        assert_eq!(cli.global.output_format, OutputFormat::Json);
    }
}
