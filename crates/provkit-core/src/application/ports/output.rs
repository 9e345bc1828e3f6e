//! Driven (output) ports - implemented by infrastructure.

use std::path::Path;

use crate::domain::ProviderTemplate;
use crate::error::ProvkitResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `provkit_adapters::filesystem::LocalFilesystem` (production)
/// - `provkit_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create `path` as a directory unless it already is one.
    ///
    /// The parent must already exist.
    fn ensure_dir(&self, path: &Path) -> ProvkitResult<()>;

    /// Write `content` to `path`, creating or truncating it.
    fn write_file(&self, path: &Path, content: &str) -> ProvkitResult<()>;

    /// Whether anything (file or directory) exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Port for template retrieval.
///
/// Implemented by:
/// - `provkit_adapters::template_source::TemplateDirectory` (`$BIQT_HOME/scripts/templates`)
/// - `provkit_adapters::template_source::MemoryTemplates` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateSource: Send + Sync {
    /// Read the full text of a template.
    fn load(&self, template: ProviderTemplate) -> ProvkitResult<String>;
}
