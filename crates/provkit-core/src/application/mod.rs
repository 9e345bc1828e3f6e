//! Application layer for provkit.
//!
//! - **Services**: use case orchestration (`ScaffoldService`)
//! - **Ports**: traits for the filesystem and template source
//! - **Errors**: application-specific error types
//!
//! The rules themselves (valid names, substitution, layout) live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{EntryKind, Outcome, ReportEntry, ScaffoldReport, ScaffoldService};

pub use ports::{Filesystem, TemplateSource};

pub use error::ApplicationError;
