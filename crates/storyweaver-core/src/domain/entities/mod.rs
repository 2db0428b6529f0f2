pub mod fields;
pub mod story;
pub mod template;

pub use fields::FieldValues;
pub use story::{RenderedStory, StorySession};
pub use template::{StoryTemplate, TemplateVariant};
