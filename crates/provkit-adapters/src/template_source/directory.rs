//! Templates read from a directory on disk.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use provkit_core::{
    application::{ApplicationError, ports::TemplateSource},
    domain::ProviderTemplate,
    error::ProvkitResult,
};

/// Location of the templates relative to a BIQT installation.
pub const TEMPLATES_SUBDIR: [&str; 2] = ["scripts", "templates"];

/// A directory holding `Provider.h`, `Provider.cpp`, `descriptor.json` and
/// `CMakeLists.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDirectory {
    dir: PathBuf,
}

impl TemplateDirectory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Templates of the BIQT installation at `biqt_home`.
    pub fn from_biqt_home(biqt_home: impl AsRef<Path>) -> Self {
        let dir = TEMPLATES_SUBDIR
            .iter()
            .fold(biqt_home.as_ref().to_path_buf(), |acc, part| acc.join(part));
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, template: ProviderTemplate) -> PathBuf {
        self.dir.join(template.file_name())
    }
}

impl TemplateSource for TemplateDirectory {
    fn load(&self, template: ProviderTemplate) -> ProvkitResult<String> {
        let path = self.path_for(template);
        debug!(path = %path.display(), "Reading template");

        std::fs::read_to_string(&path).map_err(|e| read_error(template, path, &e).into())
    }
}

/// Only an absent file counts as a missing template.
fn read_error(template: ProviderTemplate, path: PathBuf, err: &io::Error) -> ApplicationError {
    let (template, reason) = (template.file_name(), err.to_string());
    match err.kind() {
        io::ErrorKind::NotFound => ApplicationError::TemplateUnavailable {
            template,
            path,
            reason,
        },
        _ => ApplicationError::TemplateUnreadable {
            template,
            path,
            reason,
        },
    }
}
