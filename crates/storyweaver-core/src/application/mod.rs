//! Application layer for Story Weaver.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (StoryService, ExportService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! story rules itself. Substitution and validation live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{ExportService, SavedExport, SelectionMode, StoryService};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, RandomSource, StoryExporter, TemplateStore};

pub use error::ApplicationError;
