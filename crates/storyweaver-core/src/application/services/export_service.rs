//! Export Service - downloadable artifacts for the session's story.
//!
//! Exports always encode the plain rendering. The session is only read, so a
//! failed export can never disturb the story it was asked to save.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, StoryExporter},
    },
    domain::{ExportFormat, RenderedStory, StorySession, export_file_name},
    error::WeaverResult,
};

/// A finished export: where it went and how big it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedExport {
    pub format: ExportFormat,
    pub path: PathBuf,
    pub bytes: usize,
}

/// Service for export operations.
pub struct ExportService {
    exporters: Vec<Box<dyn StoryExporter>>,
    filesystem: Box<dyn Filesystem>,
}

impl ExportService {
    /// Create an export service with no exporters registered.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            exporters: Vec::new(),
            filesystem,
        }
    }

    /// Register an exporter, replacing any existing one for the same format.
    pub fn with_exporter(mut self, exporter: Box<dyn StoryExporter>) -> Self {
        self.exporters.retain(|e| e.format() != exporter.format());
        self.exporters.push(exporter);
        self
    }

    /// Formats that can currently be produced.
    pub fn formats(&self) -> Vec<ExportFormat> {
        self.exporters.iter().map(|e| e.format()).collect()
    }

    /// Encode a story without writing it anywhere.
    pub fn export_bytes(&self, story: &RenderedStory, format: ExportFormat) -> WeaverResult<Vec<u8>> {
        let exporter = self
            .exporters
            .iter()
            .find(|e| e.format() == format)
            .ok_or(ApplicationError::ExporterNotConfigured { format })?;
        exporter.export(&story.plain)
    }

    /// Write the session's story to `dir` as `{genre}_story_{YYYYMMDD}.{ext}`.
    #[instrument(skip_all, fields(session = %session.id(), format = %format, dir = %dir.display()))]
    pub fn save(
        &self,
        session: &StorySession,
        format: ExportFormat,
        dir: &Path,
        date: NaiveDate,
    ) -> WeaverResult<SavedExport> {
        let story = session.story().ok_or(ApplicationError::NoStory)?;
        let bytes = self.export_bytes(story, format)?;

        if !self.filesystem.exists(dir) {
            self.filesystem.create_dir_all(dir)?;
        }
        let path = dir.join(export_file_name(story.genre, format, date));
        self.filesystem.write_file(&path, &bytes)?;

        info!(path = %path.display(), bytes = bytes.len(), "Story exported");
        Ok(SavedExport {
            format,
            path,
            bytes: bytes.len(),
        })
    }
}
