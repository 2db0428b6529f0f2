//! Filesystem-based template pack loader.
//!
//! Discovers `*.toml` template packs under a directory tree and converts
//! them into domain [`StoryTemplate`] objects tagged with their genre.
//!
//! # Pack format
//!
//! ```toml
//! [[templates]]
//! genre = "mystery"                      # any spelling Genre::from_str accepts
//! title = "The Riddle of the {object}"
//! body  = "In {place}, {name} and their {animal} ..."
//! ```
//!
//! Placeholders are the seven field keys (`{name}`, `{animal}`, `{place}`,
//! `{object}`, `{emotion}`, `{superpower}`, `{number}`). Literal braces are
//! written `{{` and `}}`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use storyweaver_core::{
    application::ApplicationError,
    domain::{DomainValidator as validator, Genre, StoryTemplate},
    error::WeaverResult,
};

// ── Manifest types ────────────────────────────────────────────────────────────

/// Deserialised representation of one pack file.
#[derive(Debug, Deserialize, Clone)]
pub struct TemplatePack {
    #[serde(default)]
    pub templates: Vec<PackEntry>,
}

/// One `[[templates]]` entry.
#[derive(Debug, Deserialize, Clone)]
pub struct PackEntry {
    pub genre: String,
    pub title: String,
    pub body: String,
}

impl PackEntry {
    fn into_template(self) -> Result<(Genre, StoryTemplate), String> {
        let genre: Genre = self.genre.parse().map_err(|e| format!("{e}"))?;
        let template = StoryTemplate::new(self.title, self.body);
        validator::validate_template(&template).map_err(|e| e.to_string())?;
        Ok((genre, template))
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Loads template packs from a directory tree.
///
/// Pack files that cannot be read or parsed emit a `WARN` log and are skipped.
/// Within a readable pack, each invalid entry is skipped the same way, so one
/// typo never hides the rest of a collection.
pub struct TemplatePackLoader {
    root: PathBuf,
}

impl TemplatePackLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Load every valid template found under the root, in file-name order.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::TemplatePack`] if the root does not exist
    /// or cannot be walked.
    #[instrument(skip(self), fields(dir = %self.root.display()))]
    pub fn load_all(&self) -> WeaverResult<Vec<(Genre, StoryTemplate)>> {
        if !self.root.is_dir() {
            return Err(self.pack_error(&self.root, "templates directory not found").into());
        }

        let mut templates = Vec::new();
        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry.map_err(|e| self.pack_error(&self.root, e))?;
            let path = entry.path();

            if !entry.file_type().is_file() || !is_toml(path) {
                continue;
            }

            match load_pack(path) {
                Ok(pack) => templates.extend(self.accept_entries(path, pack)),
                Err(reason) => {
                    warn!(file = %path.display(), error = %reason, "skipping template pack");
                }
            }
        }

        debug!(count = templates.len(), "finished loading template packs");
        Ok(templates)
    }

    fn accept_entries(&self, path: &Path, pack: TemplatePack) -> Vec<(Genre, StoryTemplate)> {
        pack.templates
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match entry.into_template() {
                Ok(pair) => Some(pair),
                Err(reason) => {
                    warn!(
                        file = %path.display(),
                        index,
                        error = %reason,
                        "skipping invalid template"
                    );
                    None
                }
            })
            .collect()
    }

    fn pack_error(&self, path: &Path, reason: impl ToString) -> ApplicationError {
        ApplicationError::TemplatePack {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "toml")
}

fn load_pack(path: &Path) -> Result<TemplatePack, String> {
    let raw = fs::read_to_string(path).map_err(|e| format!("failed to read: {e}"))?;
    toml::from_str(&raw).map_err(|e| format!("failed to parse: {e}"))
}
