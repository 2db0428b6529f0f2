//! Unified error handling for Story Weaver Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Story Weaver Core operations.
///
/// This enum wraps all possible errors that can occur when using
/// storyweaver-core, providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum WeaverError {
    /// Errors from the domain layer (validation and template rules).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl WeaverError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Story Weaver".into(),
                "Please report this issue at: https://github.com/cosecruz/storyweaver/issues"
                    .into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::InvalidTemplate => ErrorCategory::Configuration,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// `true` for the form-level "please fill in all fields" condition.
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::Domain(DomainError::MissingField { .. }))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type WeaverResult<T> = Result<T, WeaverError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> WeaverResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> WeaverResult<T> {
        self.map_err(|e| WeaverError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ExportFormat, Field, Genre};

    #[test]
    fn missing_field_is_validation() {
        let err: WeaverError = DomainError::MissingField { field: Field::Name }.into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.is_missing_field());
        assert!(err.suggestions().iter().any(|s| s.contains("--name")));
    }

    #[test]
    fn invalid_template_is_configuration() {
        let err: WeaverError = DomainError::UnknownPlaceholder {
            template: "T".into(),
            name: "villain".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn application_errors_keep_their_category() {
        let err: WeaverError = ApplicationError::NoStory.into();
        assert_eq!(err.category(), ErrorCategory::NotFound);

        let err: WeaverError = ApplicationError::NoTemplates {
            genre: Genre::Comedy,
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Internal);

        let err: WeaverError = ApplicationError::ExporterNotConfigured {
            format: ExportFormat::Pdf,
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn context_wraps_as_internal() {
        let result: Result<(), std::fmt::Error> = Err(std::fmt::Error);
        let err = result.context("formatting story").unwrap_err();
        assert!(matches!(err, WeaverError::Internal { message } if message.contains("formatting story")));
    }
}
