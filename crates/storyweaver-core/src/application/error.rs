//! Application layer errors.
//!
//! These errors represent failures in orchestration, not story rules.
//! Validation errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::{ExportFormat, Genre};
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The store holds no templates for a genre.
    #[error("No templates registered for genre {genre}")]
    NoTemplates { genre: Genre },

    /// Export requested before any story was generated.
    #[error("No story has been generated yet")]
    NoStory,

    /// Every encoder in the export chain rejected the text.
    #[error("Could not encode story for export (tried: {})", .attempts.join(", "))]
    CatastrophicEncoding { attempts: Vec<String> },

    /// No exporter registered for the requested format.
    #[error("No exporter configured for format '{format}'")]
    ExporterNotConfigured { format: ExportFormat },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Template store error")]
    StoreLockError,

    /// A template pack could not be read.
    #[error("Template pack error at {path}: {reason}")]
    TemplatePack { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NoTemplates { genre } => vec![
                format!("Genre '{}' has no templates", genre),
                "Try: storyweaver genres to see what is available".into(),
            ],
            Self::NoStory => vec![
                "Generate a story first".into(),
                "Try: storyweaver generate --genre adventure".into(),
            ],
            Self::CatastrophicEncoding { .. } => vec![
                "The PDF could not be produced for this story".into(),
                "The plain-text export is still available: --export txt".into(),
            ],
            Self::ExporterNotConfigured { format } => vec![
                format!("'{}' export is not available in this build", format),
                "Use --export txt".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Choose another directory with --out".into(),
            ],
            Self::StoreLockError => vec![
                "The template store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::TemplatePack { path, .. } => vec![
                format!("Check the template pack directory: {}", path.display()),
                "Unset export.templates_dir to use only the built-in templates".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NoTemplates { .. } => ErrorCategory::Internal,
            Self::NoStory => ErrorCategory::NotFound,
            Self::CatastrophicEncoding { .. } => ErrorCategory::Internal,
            Self::ExporterNotConfigured { .. } => ErrorCategory::Configuration,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::StoreLockError => ErrorCategory::Internal,
            Self::TemplatePack { .. } => ErrorCategory::Configuration,
        }
    }
}
