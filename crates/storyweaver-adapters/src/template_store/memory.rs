//! In-memory template store with built-in templates.

use std::{
    collections::BTreeMap,
    path::Path,
    sync::{Arc, RwLock},
};

use storyweaver_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{DomainValidator as validator, Genre, StoryTemplate},
    error::{WeaverError, WeaverResult},
};
use tracing::{debug, info, instrument};

use crate::{builtin_templates, template_loader::TemplatePackLoader};

/// Thread-safe in-memory template store.
///
/// Templates keep their registration order within a genre, so a given random
/// index always resolves to the same template.
#[derive(Clone)]
pub struct InMemoryStore {
    inner: Arc<RwLock<BTreeMap<Genre, Vec<StoryTemplate>>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Create a store with built-in templates loaded.
    pub fn with_builtin() -> WeaverResult<Self> {
        let store = Self::new();
        store.load_builtin()?;
        Ok(store)
    }

    /// Built-in templates plus every pack found under `dir`.
    #[instrument(skip_all, fields(dir = %dir.display()))]
    pub fn with_overlay(dir: &Path) -> WeaverResult<Self> {
        let store = Self::with_builtin()?;
        let before = store.len();
        for (genre, template) in TemplatePackLoader::new(dir).load_all()? {
            store.insert(genre, template)?;
        }
        info!(added = store.len() - before, "template packs loaded");
        Ok(store)
    }

    /// Load built-in templates.
    pub fn load_builtin(&self) -> WeaverResult<()> {
        for (genre, template) in builtin_templates::all_templates()? {
            self.insert(genre, template)?;
        }
        Ok(())
    }

    /// Append a template to a genre after validating it.
    pub fn insert(&self, genre: Genre, template: StoryTemplate) -> WeaverResult<()> {
        validator::validate_template(&template).map_err(WeaverError::Domain)?;

        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        debug!(%genre, title = template.title(), "template registered");
        inner.entry(genre).or_default().push(template);
        Ok(())
    }

    /// Total number of templates across genres.
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .map(|inner| inner.values().map(Vec::len).sum())
            .unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore for InMemoryStore {
    fn templates(&self, genre: Genre) -> WeaverResult<Vec<StoryTemplate>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.get(&genre).cloned().unwrap_or_default())
    }

    fn genres(&self) -> WeaverResult<Vec<Genre>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner
            .iter()
            .filter(|(_, templates)| !templates.is_empty())
            .map(|(genre, _)| *genre)
            .collect())
    }
}
