//! Template source adapters.

mod directory;
mod memory;

pub use directory::{TEMPLATES_SUBDIR, TemplateDirectory};
pub use memory::MemoryTemplates;
