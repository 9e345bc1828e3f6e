//! Application configuration.
//!
//! [`AppConfig`] is resolved once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. `--biqt-home` flag
//! 2. `BIQT_HOME` environment variable
//! 3. `BIQT_HOME` from a `.env` file in the working directory (loaded by
//!    `main` before argument parsing)
//!
//! There is no built-in default: without an installation there are no
//! templates.

use std::path::{Path, PathBuf};

use provkit_adapters::TemplateDirectory;

use crate::{
    cli::BIQT_HOME_ENV,
    error::{CliError, CliResult},
};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Root of the BIQT installation.
    pub biqt_home: PathBuf,
    /// Where provider templates are read from.
    pub templates: TemplateDirectory,
}

impl AppConfig {
    /// Build configuration from the resolved `BIQT_HOME` value.
    ///
    /// Unset and empty are both configuration errors.
    pub fn load(biqt_home: Option<&str>) -> CliResult<Self> {
        let home = biqt_home
            .filter(|h| !h.is_empty())
            .ok_or(CliError::MissingHome { var: BIQT_HOME_ENV })?;

        Ok(Self::from_home(home))
    }

    pub fn from_home(home: impl AsRef<Path>) -> Self {
        let biqt_home = home.as_ref().to_path_buf();
        let templates = TemplateDirectory::from_biqt_home(&biqt_home);
        Self {
            biqt_home,
            templates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_home_is_an_error() {
        assert!(matches!(
            AppConfig::load(None),
            Err(CliError::MissingHome { .. })
        ));
    }

    #[test]
    fn empty_home_is_an_error() {
        assert!(AppConfig::load(Some("")).is_err());
    }

    #[test]
    fn templates_live_under_scripts() {
        let cfg = AppConfig::load(Some("/opt/biqt")).unwrap();
        assert_eq!(cfg.biqt_home, PathBuf::from("/opt/biqt"));
        assert_eq!(
            cfg.templates.dir(),
            Path::new("/opt/biqt/scripts/templates")
        );
    }
}
