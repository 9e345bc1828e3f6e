//! Scaffold Service - main application orchestrator.
//!
//! Coordinates one provider scaffold:
//! 1. Lay out the provider directory
//! 2. Ensure each directory exists
//! 3. Instantiate every template whose target is missing
//!
//! Failures abort the run immediately. Nothing already written is undone.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, TemplateSource},
    domain::{ProviderLayout, ProviderName, instantiate},
    error::ProvkitResult,
};

/// What happened to one path during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    Created,
    /// Left untouched because something was already there.
    AlreadyExists,
    /// Dry run: would have been created.
    WouldCreate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
    pub outcome: Outcome,
}

/// Result of a scaffold or a dry run, in the order paths were visited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub provider: ProviderName,
    pub root: PathBuf,
    pub entries: Vec<ReportEntry>,
}

impl ScaffoldReport {
    fn new(provider: &ProviderName, root: &Path) -> Self {
        Self {
            provider: provider.clone(),
            root: root.to_path_buf(),
            entries: Vec::new(),
        }
    }

    fn push(&mut self, path: &Path, kind: EntryKind, outcome: Outcome) {
        self.entries.push(ReportEntry {
            path: path.to_path_buf(),
            kind,
            outcome,
        });
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        self.entries.iter().filter(|e| e.outcome == outcome).count()
    }

    /// `true` if the run changed nothing on disk.
    pub fn is_noop(&self) -> bool {
        self.count(Outcome::Created) == 0
    }
}

/// Main scaffolding service.
pub struct ScaffoldService {
    templates: Box<dyn TemplateSource>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use provkit_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     templates,  // impl TemplateSource
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(templates: Box<dyn TemplateSource>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            templates,
            filesystem,
        }
    }

    /// Scaffold a provider directory under `output_root`.
    ///
    /// Existing directories are reused and existing files are never
    /// overwritten, so running twice is safe.
    #[instrument(
        skip_all,
        fields(provider = %name, output_root = %output_root.as_ref().display())
    )]
    pub fn scaffold(
        &self,
        name: &ProviderName,
        output_root: impl AsRef<Path>,
    ) -> ProvkitResult<ScaffoldReport> {
        let layout = ProviderLayout::new(name, output_root);
        let mut report = ScaffoldReport::new(name, layout.root());

        for dir in layout.directories() {
            if self.filesystem.is_dir(dir) {
                debug!(path = %dir.display(), "Directory already exists");
                report.push(dir, EntryKind::Directory, Outcome::AlreadyExists);
                continue;
            }
            self.filesystem.ensure_dir(dir)?;
            debug!(path = %dir.display(), "Directory created");
            report.push(dir, EntryKind::Directory, Outcome::Created);
        }

        for binding in layout.bindings() {
            let target = &binding.target;
            if self.filesystem.exists(target) {
                info!(path = %target.display(), "Skipping existing file");
                report.push(target, EntryKind::File, Outcome::AlreadyExists);
                continue;
            }

            let text = self.templates.load(binding.template)?;
            let content = instantiate(&text, name);
            self.filesystem.write_file(target, &content)?;

            info!(
                template = %binding.template,
                path = %target.display(),
                bytes = content.len(),
                "File instantiated"
            );
            report.push(target, EntryKind::File, Outcome::Created);
        }

        info!(
            created = report.count(Outcome::Created),
            skipped = report.count(Outcome::AlreadyExists),
            "Scaffold completed"
        );
        Ok(report)
    }

    /// Report what [`Self::scaffold`] would do without touching anything.
    ///
    /// Templates are not read, so a missing template only shows up on a
    /// real run.
    #[instrument(skip_all, fields(provider = %name))]
    pub fn plan(&self, name: &ProviderName, output_root: impl AsRef<Path>) -> ScaffoldReport {
        let layout = ProviderLayout::new(name, output_root);
        let mut report = ScaffoldReport::new(name, layout.root());

        for dir in layout.directories() {
            let outcome = if self.filesystem.is_dir(dir) {
                Outcome::AlreadyExists
            } else {
                Outcome::WouldCreate
            };
            report.push(dir, EntryKind::Directory, outcome);
        }

        for binding in layout.bindings() {
            let outcome = if self.filesystem.exists(&binding.target) {
                Outcome::AlreadyExists
            } else {
                Outcome::WouldCreate
            };
            report.push(&binding.target, EntryKind::File, outcome);
        }

        report
    }
}
