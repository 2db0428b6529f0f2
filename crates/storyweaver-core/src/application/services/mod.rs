//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "weave a story" or "export the last story".

pub mod export_service;
pub mod story_service;

pub use export_service::{ExportService, SavedExport};
pub use story_service::{SelectionMode, StoryService};
