//! # provkit
//!
//! Scaffolds a new BIQT provider directory from the templates shipped with
//! a BIQT installation.
//!
//! ## Startup sequence
//!
//! 1. Load `./.env` (working directory only), then parse CLI arguments
//!    (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Resolve configuration (`BIQT_HOME`).  Fails before any other work,
//!    including the check that a provider name was given.
//! 4. Build the [`OutputManager`].
//! 5. Run the scaffold.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                        |
//! |------|--------------------------------|
//! |  0   | Success                        |
//! |  1   | Internal / filesystem error    |
//! |  2   | User / input error             |
//! |  3   | Template not found             |
//! |  4   | Configuration error            |

use std::io::IsTerminal as _;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};

use crate::{
    cli::Cli,
    commands::setup::{self, SetupRequest},
    config::AppConfig,
    error::CliError,
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // BIQT_HOME from .env must be visible to clap, so this runs first.
    if let Err(e) = load_dotenv(Path::new(DOTENV_FILE)) {
        let color = std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal();
        return handle_error(e, false, color);
    }

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help / --version land here too, with a success exit code.
            let _ = e.print();
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        dry_run = cli.dry_run,
        "CLI started"
    );

    let verbose = cli.global.verbose > 0;
    let color = !cli.global.no_color && std::io::stderr().is_terminal();

    // ── 3. Resolve configuration ──────────────────────────────────────────
    let config = match AppConfig::load(cli.biqt_home.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => return handle_error(e, verbose, color),
    };

    let Some(pname) = cli.pname else {
        return handle_error(CliError::MissingName, verbose, color);
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global);

    // ── 5. Run + 6. Error handling ────────────────────────────────────────
    let request = SetupRequest {
        pname,
        dry_run: cli.dry_run,
    };
    match setup::execute(request, config, output) {
        Ok(()) => {
            info!("provkit completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, color),
    }
}

/// `.env` is only read from the working directory, never from a parent.
const DOTENV_FILE: &str = ".env";

/// Load `path` into the process environment if it exists.
///
/// Variables already set in the environment are left untouched.
fn load_dotenv(path: &Path) -> Result<(), CliError> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(source) => Err(CliError::EnvFile {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
///
/// This is the single place where structured errors become human-readable
/// output and OS exit codes.
fn handle_error(err: CliError, verbose: bool, color: bool) -> ExitCode {
    err.log();

    // stderr, so the message appears even when stdout is redirected.
    let msg = if color {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
