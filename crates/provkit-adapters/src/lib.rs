//! Infrastructure adapters for provkit.
//!
//! This crate implements the ports defined in `provkit-core::application::ports`.
//! It contains all I/O.

pub mod filesystem;
pub mod template_source;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use template_source::{MemoryTemplates, TemplateDirectory};
