//! Integration tests for storyweaver-core.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use chrono::NaiveDate;
use storyweaver_core::{application::ApplicationError, prelude::*};

// ── Test doubles ──────────────────────────────────────────────────────────────

struct OneGenreStore(Vec<StoryTemplate>);

impl TemplateStore for OneGenreStore {
    fn templates(&self, genre: Genre) -> WeaverResult<Vec<StoryTemplate>> {
        if genre == Genre::Adventure {
            Ok(self.0.clone())
        } else {
            Ok(Vec::new())
        }
    }

    fn genres(&self) -> WeaverResult<Vec<Genre>> {
        Ok(vec![Genre::Adventure])
    }
}

/// Cycles 0, 1, 2, ... modulo `len`.
#[derive(Default)]
struct Cycling(AtomicUsize);

impl RandomSource for Cycling {
    fn pick(&self, len: usize) -> usize {
        self.0.fetch_add(1, Ordering::SeqCst) % len
    }
}

struct Utf8;

impl StoryExporter for Utf8 {
    fn format(&self) -> ExportFormat {
        ExportFormat::Text
    }

    fn export(&self, text: &str) -> WeaverResult<Vec<u8>> {
        Ok(text.as_bytes().to_vec())
    }
}

#[derive(Default)]
struct RecordingFs(Mutex<HashMap<PathBuf, Vec<u8>>>);

impl Filesystem for &'static RecordingFs {
    fn create_dir_all(&self, _path: &Path) -> WeaverResult<()> {
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> WeaverResult<()> {
        self.0
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn exists(&self, _path: &Path) -> bool {
        true
    }
}

fn quest() -> StoryTemplate {
    StoryTemplate::new(
        "The Quest for the {object}",
        "In the land of {place}, {name} and their loyal {animal} embarked on a daring journey. \
         Feeling {emotion}, they used their {superpower} to overcome {number} treacherous \
         challenges. At last, they found the legendary {object} and became heroes!",
    )
}

fn alex() -> FieldValues {
    FieldValues::new()
        .name("Alex")
        .animal("dragon")
        .place("Avalon")
        .object("crystal orb")
        .emotion("excitement")
        .superpower("shapeshifting")
        .number(MagicNumber::new(7).unwrap())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn test_full_weave_and_export_workflow() {
    let story_service = StoryService::new(
        Box::new(OneGenreStore(vec![quest()])),
        Box::new(Cycling::default()),
    );
    let fs: &'static RecordingFs = Box::leak(Box::new(RecordingFs::default()));
    let export_service = ExportService::new(Box::new(fs)).with_exporter(Box::new(Utf8));

    let mut session = StorySession::new(Genre::Adventure);
    story_service
        .submit(&mut session, Genre::Adventure, &alex())
        .unwrap();

    let story = session.story().unwrap();
    assert!(story.plain.starts_with("The Quest for the crystal orb"));
    assert!(
        story
            .plain
            .contains("Alex and their loyal dragon embarked on a daring journey")
    );
    assert!(story.plain.contains("Feeling excitement"));
    assert!(story.plain.contains("overcome 7 treacherous challenges"));
    assert!(story.plain.contains("found the legendary crystal orb"));
    assert!(story.display.starts_with("\u{1f304} **The Quest for the crystal orb**"));

    let date = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
    let saved = export_service
        .save(&session, ExportFormat::Text, Path::new("stories"), date)
        .unwrap();

    assert_eq!(saved.path, Path::new("stories/Adventure_story_20261014.txt"));
    let written = fs.0.lock().unwrap();
    assert_eq!(written[&saved.path], story.plain.as_bytes());
}

#[test]
fn test_display_and_plain_share_substituted_values() {
    let service = StoryService::new(
        Box::new(OneGenreStore(vec![quest()])),
        Box::new(Cycling::default()),
    );
    let story = service.render(Genre::Adventure, &alex()).unwrap();

    let stripped = story
        .display
        .trim_start_matches(Genre::Adventure.icon())
        .trim_start()
        .replace("**", "");
    assert_eq!(stripped, story.plain);
}

#[test]
fn test_unresolved_placeholders_never_leak() {
    let service = StoryService::new(
        Box::new(OneGenreStore(vec![quest()])),
        Box::new(Cycling::default()),
    );
    let story = service.render(Genre::Adventure, &alex()).unwrap();
    for field in Field::ALL {
        let marker = format!("{{{}}}", field.key());
        assert!(!story.display.contains(&marker));
        assert!(!story.plain.contains(&marker));
    }
}

#[test]
fn test_genre_without_templates_is_reported() {
    let service = StoryService::new(
        Box::new(OneGenreStore(vec![quest()])),
        Box::new(Cycling::default()),
    );
    let mut session = StorySession::default();
    let err = service
        .submit(&mut session, Genre::Comedy, &alex())
        .unwrap_err();
    assert!(matches!(
        err,
        WeaverError::Application(ApplicationError::NoTemplates { .. })
    ));
    assert!(!session.has_story());
}

#[test]
fn test_missing_field_blocks_generation_entirely() {
    let service = StoryService::new(
        Box::new(OneGenreStore(vec![quest()])),
        Box::new(Cycling::default()),
    );
    let mut session = StorySession::default();

    for field in Field::TEXT {
        let mut fields = alex();
        fields.set(field, "").unwrap();
        let err = service
            .submit(&mut session, Genre::Adventure, &fields)
            .unwrap_err();
        assert!(err.is_missing_field(), "{field} accepted while empty");
    }
    assert!(!session.has_story());
}
