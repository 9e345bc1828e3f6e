//! Core domain layer for provkit.
//!
//! Pure logic: name validation, template substitution and path layout.
//! No I/O happens here; the application layer talks to the outside world
//! through ports.

pub mod error;
pub mod layout;
pub mod provider_name;
pub mod template;

pub use error::{DomainError, ErrorCategory};
pub use layout::{ProviderLayout, SUBDIRECTORIES, TemplateBinding};
pub use provider_name::ProviderName;
pub use template::{CLASS_NAME_TOKEN, HEADER_GUARD_TOKEN, ProviderTemplate, instantiate};
