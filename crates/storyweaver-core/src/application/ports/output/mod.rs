//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `storyweaver-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{ExportFormat, Genre, StoryTemplate};
use crate::error::WeaverResult;

/// Port for template lookup.
///
/// Implemented by:
/// - `storyweaver_adapters::template_store::InMemoryStore` (built-in + packs)
///
/// The catalogue is fixed once the store is built; there is no mutation.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Templates available for a genre, in registration order.
    fn templates(&self, genre: Genre) -> WeaverResult<Vec<StoryTemplate>>;

    /// Genres with at least one template.
    fn genres(&self) -> WeaverResult<Vec<Genre>>;
}

/// Port for uniform random choice.
///
/// Implemented by:
/// - `storyweaver_adapters::random::ThreadRandom` (production)
/// - `storyweaver_adapters::random::SeededRandom` (reproducible runs)
/// - `storyweaver_adapters::random::FixedRandom` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource: Send + Sync {
    /// An index in `0..len`. Callers never pass `len == 0`.
    fn pick(&self, len: usize) -> usize;
}

/// Port for turning story text into a downloadable artifact.
///
/// Implemented by:
/// - `storyweaver_adapters::export::PlainTextExporter`
/// - `storyweaver_adapters::export::PdfExporter`
#[cfg_attr(test, mockall::automock)]
pub trait StoryExporter: Send + Sync {
    /// The format this exporter produces.
    fn format(&self) -> ExportFormat;

    /// Encode `text` (the plain rendering) as document bytes.
    ///
    /// Must be deterministic: the same text always yields the same bytes.
    fn export(&self, text: &str) -> WeaverResult<Vec<u8>>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `storyweaver_adapters::filesystem::LocalFilesystem` (production)
/// - `storyweaver_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> WeaverResult<()>;

    /// Write bytes to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &[u8]) -> WeaverResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
