//! Infrastructure adapters for Story Weaver.
//!
//! This crate implements the ports defined in `storyweaver-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod export;
pub mod filesystem;
pub mod random;
pub mod template_loader;
pub mod template_store;

// Re-export commonly used adapters
pub use export::{EncoderChain, PdfExporter, PlainTextExporter};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use random::{FixedRandom, SeededRandom, ThreadRandom};
pub use template_loader::TemplatePackLoader;
pub use template_store::InMemoryStore;
