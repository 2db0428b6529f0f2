//! Story Weaver Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Story
//! Weaver mad-libs generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         storyweaver-cli (CLI)           │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (StoryService, ExportService)       │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Store, Random, Exporter, Filesystem)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   storyweaver-adapters (Infrastructure) │
//! │  (InMemoryStore, PdfExporter, etc)      │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Genre, StoryTemplate, StorySession)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use storyweaver_core::{
//!     application::StoryService,
//!     domain::{FieldValues, Genre, StorySession},
//! };
//!
//! // 1. Collect the form
//! let fields = FieldValues::new()
//!     .name("Alex")
//!     .animal("dragon")
//!     .place("Avalon")
//!     .object("crystal orb")
//!     .emotion("excitement")
//!     .superpower("shapeshifting");
//!
//! // 2. Use application service (with injected adapters)
//! let service = StoryService::new(store, random);
//! let mut session = StorySession::new(Genre::Adventure);
//! service.submit(&mut session, Genre::Adventure, &fields).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ExportService, SavedExport, SelectionMode, StoryService,
        ports::{Filesystem, RandomSource, StoryExporter, TemplateStore},
    };
    pub use crate::domain::{
        Acknowledgement, ExportFormat, Field, FieldValues, Genre, MagicNumber, Rating,
        RenderedStory, StorySession, StoryTemplate, TemplateVariant,
    };
    pub use crate::error::{WeaverError, WeaverResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
