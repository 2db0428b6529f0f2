// ============================================================================
// domain/error.rs - STORY DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::Field;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside session-scoped results)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingField { field: Field },

    #[error("Magic number {value} is out of range (1-100)")]
    NumberOutOfRange { value: i64 },

    #[error("'{input}' is not a whole number")]
    InvalidNumber { input: String },

    #[error("Rating {value} is out of range (1-5)")]
    RatingOutOfRange { value: i64 },

    #[error("Unknown genre: {0}")]
    UnknownGenre(String),

    // ========================================================================
    // Template Errors (invalid built-in or pack content)
    // ========================================================================
    #[error("Unknown placeholder '{{{name}}}' in template '{template}'")]
    UnknownPlaceholder { template: String, name: String },

    #[error("Unbalanced brace at byte {position} in template '{template}'")]
    UnbalancedBrace { template: String, position: usize },

    #[error("Template '{template}' has no title or body")]
    EmptyTemplate { template: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingField { field } => vec![
                "Please fill in all fields to weave your tale!".into(),
                format!("Missing: {} (--{})", field.label(), field.key()),
            ],
            Self::NumberOutOfRange { .. } | Self::InvalidNumber { .. } => {
                vec!["Choose a magic number between 1 and 100".into()]
            }
            Self::RatingOutOfRange { .. } => vec!["Ratings go from 1 to 5".into()],
            Self::UnknownGenre(_) => vec![
                "Available genres: adventure, mystery, comedy, fantasy, sci-fi".into(),
                "Try: storyweaver genres".into(),
            ],
            Self::UnknownPlaceholder { .. } | Self::UnbalancedBrace { .. } => vec![
                "Placeholders must be one of: {name} {animal} {place} {object} {emotion} {superpower} {number}".into(),
                "Write a literal brace as {{ or }}".into(),
            ],
            Self::EmptyTemplate { template } => vec![format!(
                "Template '{}' needs both a title and a body",
                template
            )],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingField { .. }
            | Self::NumberOutOfRange { .. }
            | Self::InvalidNumber { .. }
            | Self::RatingOutOfRange { .. } => ErrorCategory::Validation,
            Self::UnknownGenre(_) => ErrorCategory::NotFound,
            Self::UnknownPlaceholder { .. }
            | Self::UnbalancedBrace { .. }
            | Self::EmptyTemplate { .. } => ErrorCategory::InvalidTemplate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    InvalidTemplate,
}
