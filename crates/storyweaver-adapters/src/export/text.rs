//! Plain-text exporter.

use storyweaver_core::{
    application::ports::StoryExporter, domain::ExportFormat, error::WeaverResult,
};

/// Writes the story as UTF-8, unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExporter;

impl StoryExporter for PlainTextExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Text
    }

    fn export(&self, text: &str) -> WeaverResult<Vec<u8>> {
        Ok(text.as_bytes().to_vec())
    }
}
