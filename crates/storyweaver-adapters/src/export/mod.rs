//! Story exporters.

pub mod encoding;
mod metrics;
mod pdf;
mod text;

pub use encoding::{Charset, CharsetEncoder, EncoderChain, ReplacementPolicy};
pub use pdf::PdfExporter;
pub use text::PlainTextExporter;

#[cfg(test)]
mod tests {
    use std::path::Path;

    use chrono::NaiveDate;
    use storyweaver_core::{
        application::{ExportService, StoryService},
        domain::{ExportFormat, FieldValues, Genre, MagicNumber, StorySession},
    };

    use super::*;
    use crate::{FixedRandom, InMemoryStore, MemoryFilesystem};

    fn woven_session() -> StorySession {
        let service = StoryService::new(
            Box::new(InMemoryStore::with_builtin().unwrap()),
            Box::new(FixedRandom(0)),
        );
        let fields = FieldValues::new()
            .name("Zephyr")
            .animal("llama")
            .place("Paris")
            .object("kazoo")
            .emotion("joy")
            .superpower("flight")
            .number(MagicNumber::new(12).unwrap());

        let mut session = StorySession::new(Genre::Comedy);
        service.submit(&mut session, Genre::Comedy, &fields).unwrap();
        session
    }

    #[test]
    fn saved_exports_can_be_read_back() {
        let fs = MemoryFilesystem::new();
        let exporter = ExportService::new(Box::new(fs.clone()))
            .with_exporter(Box::new(PlainTextExporter))
            .with_exporter(Box::new(PdfExporter::new()));
        let session = woven_session();
        let date = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();

        let txt = exporter
            .save(&session, ExportFormat::Text, Path::new("stories"), date)
            .unwrap();
        let pdf = exporter
            .save(&session, ExportFormat::Pdf, Path::new("stories"), date)
            .unwrap();

        assert_eq!(
            fs.list_files(),
            vec![
                Path::new("stories/Comedy_story_20261014.pdf").to_path_buf(),
                Path::new("stories/Comedy_story_20261014.txt").to_path_buf(),
            ]
        );

        let text = fs.read_file(&txt.path).unwrap();
        assert_eq!(text.len(), txt.bytes);
        assert!(text.starts_with(b"The Great kazoo Fiasco\n\n"));

        let plain = &session.story().unwrap().plain;
        let bytes = fs.read_file(&pdf.path).unwrap();
        assert_eq!(bytes.len(), pdf.bytes);
        assert_eq!(bytes, PdfExporter::new().render(plain).unwrap());
    }
}
