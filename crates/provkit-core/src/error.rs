//! Unified error handling for provkit core.
//!
//! Wraps domain and application errors behind one type with a category and
//! user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for provkit core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProvkitError {
    /// Errors from the domain layer (invalid input).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (I/O through ports).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl ProvkitError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type ProvkitResult<T> = Result<T, ProvkitError>;
