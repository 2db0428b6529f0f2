//! `storyweaver interactive`: the story form as a terminal session.
//!
//! One [`StorySession`] lives for the whole run. Errors from a submission,
//! export or rating are shown and the session carries on. A rejected
//! submission keeps the previous story on screen and in the menu.

use std::path::Path;

use dialoguer::{
    Input, Select,
    theme::{ColorfulTheme, SimpleTheme, Theme},
};
use tracing::{debug, instrument};

use storyweaver_core::{
    application::{ExportService, StoryService},
    domain::{ExportFormat, Field, FieldValues, Genre, MagicNumber, Rating, StorySession},
};

use crate::{
    commands::{export_service, new_session, rate, story_service},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    ShowStory,
    ExportText,
    ExportPdf,
    Rate,
    WeaveAnother,
    ChangeGenre,
    Quit,
}

impl Action {
    const MENU: [Action; 7] = [
        Self::ShowStory,
        Self::ExportText,
        Self::ExportPdf,
        Self::Rate,
        Self::WeaveAnother,
        Self::ChangeGenre,
        Self::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::ShowStory => "\u{1f4d6} Show story again",
            Self::ExportText => "\u{1f4c4} Export TXT",
            Self::ExportPdf => "\u{1f4d5} Export PDF",
            Self::Rate => "\u{2b50} Rate this story",
            Self::WeaveAnother => "\u{2728} Weave another",
            Self::ChangeGenre => "\u{1f3ad} Change genre",
            Self::Quit => "\u{1f44b} Quit",
        }
    }
}

#[instrument(skip_all)]
pub fn execute(config: AppConfig, output: OutputManager) -> CliResult<()> {
    let colorful = ColorfulTheme::default();
    let theme: &dyn Theme = if output.supports_color() {
        &colorful
    } else {
        &SimpleTheme
    };

    let service = story_service(&config, None, None)?;
    let exporter = export_service();
    let desk = Desk {
        service: &service,
        exporter: &exporter,
        dir: &config.export.directory,
        output: &output,
    };

    let mut session = new_session(&config)?;
    let mut fields = config.defaults.fields().map_err(CliError::config)?;
    debug!(session = %session.id(), "Interactive session started");

    output.header("\u{2728} Enchanted Story Weaver")?;
    choose_genre(theme, &mut session)?;

    loop {
        prompt_fields(theme, &mut fields)?;
        if !desk.weave(&mut session, &fields)? && !desk.show_last(&session)? {
            continue;
        }

        match action_menu(theme, &desk, &mut session, &fields)? {
            Action::ChangeGenre => choose_genre(theme, &mut session)?,
            Action::Quit => return Ok(()),
            _ => {}
        }
    }
}

/// The services and output one interactive run works with.
struct Desk<'a> {
    service: &'a StoryService,
    exporter: &'a ExportService,
    dir: &'a Path,
    output: &'a OutputManager,
}

impl Desk<'_> {
    /// Submit the form; `false` when the submission was rejected.
    fn weave(&self, session: &mut StorySession, fields: &FieldValues) -> CliResult<bool> {
        let genre = session.genre();
        let spinner = self.output.spinner(format!("Brewing your {genre} story..."));
        let result = self.service.submit(session, genre, fields);
        spinner.finish_and_clear();

        match result {
            Ok(story) => {
                self.output.print("")?;
                self.output.story(&story.display)?;
                self.output.print("")?;
                Ok(true)
            }
            Err(e) => {
                show_error(self.output, &CliError::from(e))?;
                Ok(false)
            }
        }
    }

    /// Print the session's last story; `false` when there is none yet.
    fn show_last(&self, session: &StorySession) -> CliResult<bool> {
        let Some(story) = session.story() else {
            return Ok(false);
        };
        self.output.print("")?;
        self.output.story(&story.display)?;
        self.output.print("")?;
        Ok(true)
    }

    /// Run one menu action. `Some` means the menu should close with it.
    ///
    /// `rating` is only called for [`Action::Rate`].
    fn perform(
        &self,
        action: Action,
        session: &mut StorySession,
        fields: &FieldValues,
        rating: impl FnOnce() -> CliResult<i64>,
    ) -> CliResult<Option<Action>> {
        match action {
            Action::ShowStory => {
                self.show_last(session)?;
            }
            Action::ExportText => self.export(session, ExportFormat::Text)?,
            Action::ExportPdf => self.export(session, ExportFormat::Pdf)?,
            Action::Rate => match Rating::new(rating()?) {
                Ok(rating) => rate::report(self.output, rating, rating.acknowledgement())?,
                Err(e) => show_error(self.output, &CliError::from(e))?,
            },
            Action::WeaveAnother => {
                // Same form, fresh template draw.
                self.weave(session, fields)?;
            }
            Action::ChangeGenre | Action::Quit => return Ok(Some(action)),
        }
        Ok(None)
    }

    fn export(&self, session: &StorySession, format: ExportFormat) -> CliResult<()> {
        let today = chrono::Local::now().date_naive();
        match self.exporter.save(session, format, self.dir, today) {
            Ok(saved) => self.output.success(&format!(
                "Saved {} ({} bytes)",
                saved.path.display(),
                saved.bytes
            ))?,
            Err(e) => show_error(self.output, &CliError::from(e))?,
        }
        Ok(())
    }
}

/// Loop over post-story actions until the user wants a new story.
fn action_menu(
    theme: &dyn Theme,
    desk: &Desk<'_>,
    session: &mut StorySession,
    fields: &FieldValues,
) -> CliResult<Action> {
    let labels: Vec<&str> = Action::MENU.iter().map(|a| a.label()).collect();
    loop {
        let index = Select::with_theme(theme)
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact()?;

        let ask_rating = || -> CliResult<i64> {
            Ok(Input::with_theme(theme)
                .with_prompt("Rate your story (1-5)")
                .interact_text()?)
        };
        if let Some(done) = desk.perform(Action::MENU[index], session, fields, ask_rating)? {
            return Ok(done);
        }
    }
}

fn choose_genre(theme: &dyn Theme, session: &mut StorySession) -> CliResult<()> {
    let labels: Vec<String> = Genre::ALL
        .iter()
        .map(|g| format!("{} {}", g.icon(), g))
        .collect();
    let current = Genre::ALL
        .iter()
        .position(|&g| g == session.genre())
        .unwrap_or(0);

    let index = Select::with_theme(theme)
        .with_prompt("Choose your genre")
        .items(&labels)
        .default(current)
        .interact()?;
    session.select_genre(Genre::ALL[index]);
    Ok(())
}

/// Ask for every field, pre-filled with the previous answer.
fn prompt_fields(theme: &dyn Theme, fields: &mut FieldValues) -> CliResult<()> {
    for field in Field::TEXT {
        let raw: String = Input::with_theme(theme)
            .with_prompt(field.label())
            .with_initial_text(fields.text(field).unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;
        fields.set(field, &raw)?;
    }

    let current = fields.magic_number();
    let raw: String = Input::with_theme(theme)
        .with_prompt(format!(
            "{} ({}-{})",
            Field::Number.label(),
            MagicNumber::MIN,
            MagicNumber::MAX
        ))
        .default(current.to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            let mut scratch = FieldValues::new();
            scratch.set(Field::Number, input).map_err(|e| e.to_string())
        })
        .interact_text()?;
    fields.set(Field::Number, &raw)?;
    Ok(())
}

fn show_error(output: &OutputManager, err: &CliError) -> std::io::Result<()> {
    err.log();
    output.error(&err.to_string())?;
    for suggestion in err.suggestions() {
        output.info(&suggestion)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::cli::{GlobalArgs, global::OutputFormat};

    fn quiet_output() -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
            log_file: None,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    fn no_rating() -> CliResult<i64> {
        panic!("rating prompt should not be shown");
    }

    struct Fixture {
        dir: TempDir,
        service: StoryService,
        exporter: ExportService,
        output: OutputManager,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                dir: TempDir::new().unwrap(),
                service: story_service(&AppConfig::default(), Some(3), None).unwrap(),
                exporter: export_service(),
                output: quiet_output(),
            }
        }

        fn desk(&self) -> Desk<'_> {
            Desk {
                service: &self.service,
                exporter: &self.exporter,
                dir: self.dir.path(),
                output: &self.output,
            }
        }

        fn saved(&self) -> Vec<String> {
            let mut names: Vec<String> = fs::read_dir(self.dir.path())
                .unwrap()
                .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
                .collect();
            names.sort();
            names
        }
    }

    fn complete_fields() -> FieldValues {
        AppConfig::default().defaults.fields().unwrap()
    }

    #[test]
    fn menu_offers_to_show_the_story_again() {
        assert_eq!(Action::MENU[0], Action::ShowStory);
        assert_eq!(Action::MENU.len(), 7);
    }

    #[test]
    fn rejected_submission_keeps_previous_story_exportable() {
        let fixture = Fixture::new();
        let desk = fixture.desk();
        let mut session = StorySession::new(Genre::Comedy);

        assert!(desk.weave(&mut session, &complete_fields()).unwrap());
        let first = session.story().cloned().unwrap();

        let mut blank = complete_fields();
        blank.set(Field::Animal, "   ").unwrap();
        assert!(!desk.weave(&mut session, &blank).unwrap());
        assert!(desk.show_last(&session).unwrap());
        assert_eq!(session.story(), Some(&first));

        let next = desk
            .perform(Action::ExportText, &mut session, &blank, no_rating)
            .unwrap();
        assert_eq!(next, None);

        let saved = fixture.saved();
        assert_eq!(saved.len(), 1, "{saved:?}");
        assert!(saved[0].starts_with("Comedy_story_") && saved[0].ends_with(".txt"));
        let text = fs::read_to_string(fixture.dir.path().join(&saved[0])).unwrap();
        assert_eq!(text, first.plain);
    }

    #[test]
    fn nothing_to_show_before_the_first_story() {
        let fixture = Fixture::new();
        let session = StorySession::new(Genre::Mystery);
        assert!(!fixture.desk().show_last(&session).unwrap());
    }

    #[test]
    fn export_without_a_story_writes_nothing() {
        let fixture = Fixture::new();
        let mut session = StorySession::new(Genre::Mystery);
        let next = fixture
            .desk()
            .perform(Action::ExportPdf, &mut session, &complete_fields(), no_rating)
            .unwrap();
        assert_eq!(next, None);
        assert!(fixture.saved().is_empty());
    }

    #[test]
    fn rate_reads_the_prompted_value() {
        let fixture = Fixture::new();
        let desk = fixture.desk();
        let mut session = StorySession::new(Genre::Fantasy);
        desk.weave(&mut session, &complete_fields()).unwrap();

        for value in [5, 9] {
            let next = desk
                .perform(Action::Rate, &mut session, &complete_fields(), || Ok(value))
                .unwrap();
            assert_eq!(next, None);
        }
    }

    #[test]
    fn genre_change_and_quit_close_the_menu() {
        let fixture = Fixture::new();
        let desk = fixture.desk();
        let mut session = StorySession::new(Genre::SciFi);
        for action in [Action::ChangeGenre, Action::Quit] {
            let next = desk
                .perform(action, &mut session, &complete_fields(), no_rating)
                .unwrap();
            assert_eq!(next, Some(action));
        }
    }
}
