//! In-memory template source for testing.

use std::{
    collections::HashMap,
    path::PathBuf,
    sync::{Arc, RwLock},
};

use provkit_core::{
    application::{ApplicationError, ports::TemplateSource},
    domain::ProviderTemplate,
    error::ProvkitResult,
};

/// Thread-safe in-memory template source.
#[derive(Debug, Clone, Default)]
pub struct MemoryTemplates {
    inner: Arc<RwLock<HashMap<ProviderTemplate, String>>>,
}

impl MemoryTemplates {
    /// Create a new empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Self::insert`].
    pub fn with(self, template: ProviderTemplate, text: impl Into<String>) -> Self {
        self.insert(template, text);
        self
    }

    /// Insert or replace a template's text.  Panics on a poisoned lock.
    pub fn insert(&self, template: ProviderTemplate, text: impl Into<String>) {
        self.inner
            .write()
            .expect("lock poisoned")
            .insert(template, text.into());
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.inner.read().expect("lock poisoned").len()
    }

    /// Check if source is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TemplateSource for MemoryTemplates {
    fn load(&self, template: ProviderTemplate) -> ProvkitResult<String> {
        let inner = self.inner.read().map_err(|_| ApplicationError::LockPoisoned)?;

        inner.get(&template).cloned().ok_or_else(|| {
            ApplicationError::TemplateUnavailable {
                template: template.file_name(),
                path: PathBuf::from("<memory>").join(template.file_name()),
                reason: "not registered".into(),
            }
            .into()
        })
    }
}
