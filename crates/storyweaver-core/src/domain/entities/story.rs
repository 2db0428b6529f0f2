//! Rendered stories and the per-session context that holds the latest one.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::Genre;

/// The result of one successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedStory {
    pub genre: Genre,
    /// Icon + emphasis markup, for on-screen display.
    pub display: String,
    /// Markup-free, for export.
    pub plain: String,
    /// Index of the template used for `display` within the genre's list.
    pub display_template: usize,
    /// Index of the template used for `plain` within the genre's list.
    pub plain_template: usize,
}

impl RenderedStory {
    /// `true` when both renderings came from the same template.
    pub fn is_coupled(&self) -> bool {
        self.display_template == self.plain_template
    }
}

/// Session-scoped state: the selected genre and the last rendered story.
///
/// Each front-end run owns exactly one session and hands it to the services
/// by `&mut`. A new story replaces the previous one; failures leave it alone.
#[derive(Debug, Clone)]
pub struct StorySession {
    id: Uuid,
    genre: Genre,
    story: Option<RenderedStory>,
}

impl StorySession {
    pub fn new(genre: Genre) -> Self {
        Self {
            id: Uuid::new_v4(),
            genre,
            story: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Genre currently selected in the form.
    pub fn genre(&self) -> Genre {
        self.genre
    }

    pub fn select_genre(&mut self, genre: Genre) {
        self.genre = genre;
    }

    /// The most recent story, if any submission has succeeded.
    pub fn story(&self) -> Option<&RenderedStory> {
        self.story.as_ref()
    }

    pub fn has_story(&self) -> bool {
        self.story.is_some()
    }

    pub(crate) fn replace_story(&mut self, story: RenderedStory) {
        self.genre = story.genre;
        self.story = Some(story);
    }
}

impl Default for StorySession {
    fn default() -> Self {
        Self::new(Genre::default())
    }
}
