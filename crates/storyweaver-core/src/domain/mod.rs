// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Story Weaver.
//!
//! This module contains pure story logic with no I/O. Template storage,
//! randomness and export encoding are reached through ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable values**: Genres, fields and templates are Clone + PartialEq
//! - **Rich domain model**: Substitution lives on `StoryTemplate`, not in services
//!
pub mod entities;
pub mod error;
pub mod export;
pub mod feedback;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::{
    FieldValues, RenderedStory, StorySession, StoryTemplate, TemplateVariant,
    template::{EMPHASIS_MARKERS, strip_emphasis},
};

pub use error::{DomainError, ErrorCategory};
pub use export::{ExportFormat, export_file_name};
pub use feedback::{Acknowledgement, Rating};
pub use value_objects::{Field, Genre, MagicNumber};

pub use validation::DomainValidator;
