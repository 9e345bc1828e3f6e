//! Where a provider's files go.

use std::path::{Path, PathBuf};

use crate::domain::{ProviderName, ProviderTemplate};

/// Subdirectories created inside every provider directory.
pub const SUBDIRECTORIES: [&str; 2] = ["src", "config"];

/// One template and the path it is instantiated to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateBinding {
    pub template: ProviderTemplate,
    pub target: PathBuf,
}

/// The directory tree and file targets for one provider.
///
/// Pure path arithmetic; nothing here touches the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderLayout {
    root: PathBuf,
    directories: Vec<PathBuf>,
    bindings: Vec<TemplateBinding>,
}

impl ProviderLayout {
    /// Lay out `name` under `output_root` (usually the working directory).
    pub fn new(name: &ProviderName, output_root: impl AsRef<Path>) -> Self {
        let root = output_root.as_ref().join(name.as_str());

        // Parent first: directories are created one level at a time.
        let mut directories = vec![root.clone()];
        directories.extend(SUBDIRECTORIES.iter().map(|d| root.join(d)));

        let bindings = ProviderTemplate::ALL
            .iter()
            .map(|&template| TemplateBinding {
                template,
                target: root.join(template.target_file_name(name)),
            })
            .collect();

        Self {
            root,
            directories,
            bindings,
        }
    }

    /// The provider directory itself.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directories to ensure, parents before children.
    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    pub fn bindings(&self) -> &[TemplateBinding] {
        &self.bindings
    }
}
