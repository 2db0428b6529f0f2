//! Command handlers. One module per subcommand.
//!
//! Handlers translate arguments into core calls and print results. Adapter
//! wiring shared between commands lives here.

use std::path::PathBuf;

use tracing::debug;

use storyweaver_adapters::{
    InMemoryStore, LocalFilesystem, PdfExporter, PlainTextExporter, SeededRandom, ThreadRandom,
};
use storyweaver_core::{
    application::{ExportService, RandomSource, SelectionMode, StoryService},
    domain::{Genre, StorySession},
};

use crate::{config::AppConfig, error::CliResult};

pub mod completions;
pub mod config;
pub mod generate;
pub mod genres;
pub mod init;
#[cfg(feature = "interactive")]
pub mod interactive;
pub mod rate;

/// Build the story service from config, with CLI overrides.
pub fn story_service(
    config: &AppConfig,
    seed: Option<u64>,
    selection: Option<SelectionMode>,
) -> CliResult<StoryService> {
    let store = match &config.export.templates_dir {
        Some(dir) => InMemoryStore::with_overlay(dir)?,
        None => InMemoryStore::with_builtin()?,
    };

    let seed = seed.or(config.generation.seed);
    let random: Box<dyn RandomSource> = match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };

    let selection = selection.unwrap_or(config.generation.selection);
    debug!(templates = store.len(), ?seed, %selection, "Story service ready");

    Ok(StoryService::new(Box::new(store), random).with_selection(selection))
}

/// Export service writing text and PDF files to the local disk.
pub fn export_service() -> ExportService {
    ExportService::new(Box::new(LocalFilesystem::new()))
        .with_exporter(Box::new(PlainTextExporter))
        .with_exporter(Box::new(PdfExporter::new()))
}

/// Directory exports go to: `--out`, else the configured one.
pub fn export_dir(out: Option<PathBuf>, config: &AppConfig) -> PathBuf {
    out.unwrap_or_else(|| config.export.directory.clone())
}

/// A fresh session on the configured default genre.
pub fn new_session(config: &AppConfig) -> CliResult<StorySession> {
    let genre: Genre = config.defaults.genre().map_err(crate::error::CliError::config)?;
    Ok(StorySession::new(genre))
}
