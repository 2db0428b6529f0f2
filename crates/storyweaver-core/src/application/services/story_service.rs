//! Story Service - main application orchestrator.
//!
//! This service coordinates one submission:
//! 1. Validate the form fields
//! 2. Select templates for the genre
//! 3. Render the display and plain variants
//! 4. Replace the session's story
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{RandomSource, TemplateStore},
    },
    domain::{
        DomainValidator as validator, FieldValues, Genre, RenderedStory, StorySession,
        StoryTemplate, TemplateVariant,
    },
    error::{WeaverError, WeaverResult},
};

/// How display and plain templates are drawn for one submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// One draw; both variants come from the same template.
    #[default]
    Coupled,
    /// Two draws; the exported story may differ from the displayed one.
    Independent,
}

impl std::fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Coupled => f.write_str("coupled"),
            Self::Independent => f.write_str("independent"),
        }
    }
}

/// Main story service.
///
/// Orchestrates template selection and substitution.
pub struct StoryService {
    store: Box<dyn TemplateStore>,
    random: Box<dyn RandomSource>,
    selection: SelectionMode,
}

impl StoryService {
    /// Create a new story service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use storyweaver_core::application::{StoryService, ports::*};
    ///
    /// let service = StoryService::new(
    ///     store,  // impl TemplateStore
    ///     random, // impl RandomSource
    /// );
    /// ```
    pub fn new(store: Box<dyn TemplateStore>, random: Box<dyn RandomSource>) -> Self {
        Self {
            store,
            random,
            selection: SelectionMode::default(),
        }
    }

    pub fn with_selection(mut self, selection: SelectionMode) -> Self {
        self.selection = selection;
        self
    }

    pub fn selection(&self) -> SelectionMode {
        self.selection
    }

    /// Render a story without touching any session.
    ///
    /// Only the placeholders the chosen templates use are required.
    #[instrument(skip_all, fields(genre = %genre, selection = %self.selection))]
    pub fn render(&self, genre: Genre, fields: &FieldValues) -> WeaverResult<RenderedStory> {
        let templates = self.store.templates(genre)?;
        if templates.is_empty() {
            return Err(ApplicationError::NoTemplates { genre }.into());
        }

        let display_index = self.pick(templates.len())?;
        let plain_index = match self.selection {
            SelectionMode::Coupled => display_index,
            SelectionMode::Independent => self.pick(templates.len())?,
        };
        debug!(
            display_index,
            plain_index,
            available = templates.len(),
            "Templates selected"
        );

        let display = render_variant(
            &templates[display_index],
            genre,
            TemplateVariant::Display,
            fields,
        )?;
        let plain = render_variant(&templates[plain_index], genre, TemplateVariant::Plain, fields)?;

        Ok(RenderedStory {
            genre,
            display,
            plain,
            display_template: display_index,
            plain_template: plain_index,
        })
    }

    /// Handle one form submission.
    ///
    /// All six text fields are required regardless of which placeholders the
    /// templates use. On success the session's story is replaced; on failure
    /// the session is left exactly as it was.
    #[instrument(skip_all, fields(session = %session.id(), genre = %genre))]
    pub fn submit(
        &self,
        session: &mut StorySession,
        genre: Genre,
        fields: &FieldValues,
    ) -> WeaverResult<RenderedStory> {
        validator::validate_fields(fields).map_err(WeaverError::Domain)?;

        let story = self.render(genre, fields)?;
        session.replace_story(story.clone());

        info!(chars = story.plain.chars().count(), "Story woven");
        Ok(story)
    }

    /// Genres the store can serve.
    pub fn genres(&self) -> WeaverResult<Vec<Genre>> {
        self.store.genres()
    }

    /// Number of templates registered for a genre.
    pub fn template_count(&self, genre: Genre) -> WeaverResult<usize> {
        Ok(self.store.templates(genre)?.len())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn pick(&self, len: usize) -> WeaverResult<usize> {
        let index = self.random.pick(len);
        if index < len {
            Ok(index)
        } else {
            Err(WeaverError::Internal {
                message: format!("random source returned {index} for {len} templates"),
            })
        }
    }
}

fn render_variant(
    template: &StoryTemplate,
    genre: Genre,
    variant: TemplateVariant,
    fields: &FieldValues,
) -> WeaverResult<String> {
    template
        .render(genre, variant, fields)
        .map_err(WeaverError::Domain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockRandomSource, MockTemplateStore};
    use crate::domain::{DomainError, Field, MagicNumber};
    use mockall::Sequence;

    fn fields() -> FieldValues {
        FieldValues::new()
            .name("Alex")
            .animal("dragon")
            .place("Avalon")
            .object("crystal orb")
            .emotion("excitement")
            .superpower("shapeshifting")
            .number(MagicNumber::default())
    }

    fn two_templates() -> Vec<StoryTemplate> {
        vec![
            StoryTemplate::new("First {object}", "{name} in {place}."),
            StoryTemplate::new("Second {object}", "{name} with {animal}."),
        ]
    }

    fn store_with(templates: Vec<StoryTemplate>) -> Box<MockTemplateStore> {
        let mut store = MockTemplateStore::new();
        store
            .expect_templates()
            .returning(move |_| Ok(templates.clone()));
        Box::new(store)
    }

    fn random_returning(indices: &[usize]) -> Box<MockRandomSource> {
        let mut random = MockRandomSource::new();
        let mut seq = Sequence::new();
        for &index in indices {
            random
                .expect_pick()
                .times(1)
                .in_sequence(&mut seq)
                .return_const(index);
        }
        Box::new(random)
    }

    #[test]
    fn coupled_selection_draws_once() {
        let service = StoryService::new(store_with(two_templates()), random_returning(&[1]));

        let story = service.render(Genre::Fantasy, &fields()).unwrap();

        assert!(story.is_coupled());
        assert_eq!(story.plain, "Second crystal orb\n\nAlex with dragon.");
        assert_eq!(
            story.display,
            "\u{1f3f0} **Second crystal orb**\n\nAlex with dragon."
        );
    }

    #[test]
    fn independent_selection_draws_twice() {
        let service = StoryService::new(store_with(two_templates()), random_returning(&[0, 1]))
            .with_selection(SelectionMode::Independent);

        let story = service.render(Genre::Fantasy, &fields()).unwrap();

        assert_eq!(story.display_template, 0);
        assert_eq!(story.plain_template, 1);
        assert!(story.display.contains("First"));
        assert!(story.plain.contains("Second"));
    }

    #[test]
    fn render_requires_only_used_placeholders() {
        let service = StoryService::new(
            store_with(vec![StoryTemplate::new("{name}", "{name} laughed.")]),
            random_returning(&[0]),
        );
        let partial = FieldValues::new().name("Robin");

        let story = service.render(Genre::Comedy, &partial).unwrap();
        assert_eq!(story.plain, "Robin\n\nRobin laughed.");
    }

    #[test]
    fn render_reports_missing_placeholder() {
        let service = StoryService::new(store_with(two_templates()), random_returning(&[0]));
        let partial = FieldValues::new().name("Robin");

        let err = service.render(Genre::Mystery, &partial).unwrap_err();
        assert!(matches!(
            err,
            WeaverError::Domain(DomainError::MissingField {
                field: Field::Object
            })
        ));
    }

    #[test]
    fn empty_genre_is_an_internal_error() {
        let service = StoryService::new(store_with(vec![]), Box::new(MockRandomSource::new()));
        let err = service.render(Genre::SciFi, &fields()).unwrap_err();
        assert!(matches!(
            err,
            WeaverError::Application(ApplicationError::NoTemplates {
                genre: Genre::SciFi
            })
        ));
    }

    #[test]
    fn out_of_range_pick_is_rejected() {
        let service = StoryService::new(store_with(two_templates()), random_returning(&[5]));
        assert!(matches!(
            service.render(Genre::Adventure, &fields()),
            Err(WeaverError::Internal { .. })
        ));
    }

    #[test]
    fn submit_replaces_session_story() {
        let service = StoryService::new(store_with(two_templates()), random_returning(&[0, 1]));
        let mut session = StorySession::new(Genre::Adventure);

        service.submit(&mut session, Genre::Mystery, &fields()).unwrap();
        let first = session.story().unwrap().plain.clone();
        service.submit(&mut session, Genre::Mystery, &fields()).unwrap();

        assert_ne!(session.story().unwrap().plain, first);
        assert_eq!(session.genre(), Genre::Mystery);
    }

    #[test]
    fn failed_submit_leaves_session_untouched() {
        let service = StoryService::new(store_with(two_templates()), random_returning(&[0]));
        let mut session = StorySession::new(Genre::Adventure);
        service.submit(&mut session, Genre::Adventure, &fields()).unwrap();
        let before = session.story().cloned();

        // emotion is unused by both templates but the form still requires it
        let incomplete = fields().emotion("");
        let err = service
            .submit(&mut session, Genre::Comedy, &incomplete)
            .unwrap_err();

        assert!(err.is_missing_field());
        assert_eq!(session.story().cloned(), before);
        assert_eq!(session.genre(), Genre::Adventure);
    }
}
