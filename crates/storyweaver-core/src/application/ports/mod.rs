//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `storyweaver-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `TemplateStore`: Genre → template lookup
//!   - `RandomSource`: Template selection
//!   - `StoryExporter`: Text → downloadable bytes
//!   - `Filesystem`: Writing exports
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Filesystem, RandomSource, StoryExporter, TemplateStore};

#[cfg(test)]
pub use output::{MockFilesystem, MockRandomSource, MockStoryExporter, MockTemplateStore};
