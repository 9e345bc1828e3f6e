//! Application ports (traits) for external dependencies.
//!
//! Driven ports: called by the application, implemented in
//! `provkit-adapters`.
//!
//! - `Filesystem`: directory and file operations
//! - `TemplateSource`: template text retrieval

pub mod output;

pub use output::{Filesystem, TemplateSource};
