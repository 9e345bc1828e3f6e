//! Application layer errors.
//!
//! These errors represent failures talking to the outside world, not
//! business rule violations. Those are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while carrying out a scaffold.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// A template is not present in the template source.
    #[error("Template '{template}' could not be read from {path}: {reason}")]
    TemplateUnavailable {
        template: &'static str,
        path: PathBuf,
        reason: String,
    },

    /// A template exists but reading it failed (not a file, not UTF-8, ...).
    #[error("Template '{template}' at {path} is unreadable: {reason}")]
    TemplateUnreadable {
        template: &'static str,
        path: PathBuf,
        reason: String,
    },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// An in-memory adapter's lock was poisoned.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateUnavailable { template, path, .. } => vec![
                format!("Expected template '{}' at {}", template, path.display()),
                "Check that BIQT_HOME points at the BIQT installation directory".into(),
                "The installation should contain scripts/templates/".into(),
            ],
            Self::TemplateUnreadable { path, .. } => vec![
                format!("{} should be a regular UTF-8 text file", path.display()),
                "Reinstall the BIQT templates if the file is damaged".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files written before the failure were left in place".into(),
            ],
            Self::LockPoisoned => vec!["This is a bug, please report it".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateUnavailable { .. } => ErrorCategory::NotFound,
            Self::TemplateUnreadable { .. }
            | Self::FilesystemError { .. }
            | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
