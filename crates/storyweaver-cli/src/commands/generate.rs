//! Implementation of the `storyweaver generate` command.
//!
//! Responsibility: turn CLI arguments into a form submission, call the core
//! story and export services, and display results. No story logic lives here.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, instrument};

use storyweaver_core::{
    application::SavedExport,
    domain::{
        ExportFormat, Field, FieldValues, Genre, MagicNumber, RenderedStory, StorySession,
        export_file_name,
    },
};

use crate::{
    cli::GenerateArgs,
    commands::{export_dir, export_service, story_service},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// One export entry in JSON output.
#[derive(Debug, Serialize)]
struct ExportReport {
    format: ExportFormat,
    path: PathBuf,
    /// `None` on a dry run.
    bytes: Option<usize>,
}

#[derive(Debug, Serialize)]
struct GenerateReport<'a> {
    session: String,
    #[serde(flatten)]
    story: &'a RenderedStory,
    dry_run: bool,
    exports: Vec<ExportReport>,
}

/// Execute the `storyweaver generate` command.
///
/// 1. Resolve genre and fields (CLI flags over config defaults)
/// 2. Submit the form through `StoryService`
/// 3. Print the story
/// 4. Save requested exports, or list them on `--dry-run`
#[instrument(skip_all)]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let genre = match args.genre {
        Some(g) => Genre::from(g),
        None => config.defaults.genre().map_err(CliError::config)?,
    };
    let fields = collect_fields(&args, &config)?;

    let service = story_service(&config, args.seed, args.selection.map(Into::into))?;
    let mut session = StorySession::new(genre);

    let spinner = output.spinner(format!("Brewing your {genre} story..."));
    let result = service.submit(&mut session, genre, &fields);
    spinner.finish_and_clear();
    let story = result?;

    if !output.is_json() {
        output.story(&story.display)?;
    }

    let formats = args.export.formats();
    let dir = export_dir(args.out, &config);
    let today = chrono::Local::now().date_naive();
    let mut exports = Vec::with_capacity(formats.len());

    if !formats.is_empty() && dir.is_file() {
        return Err(CliError::InvalidInput {
            message: format!("export directory '{}' is a file", dir.display()),
            source: None,
        });
    }

    if args.dry_run {
        for format in formats {
            let path = dir.join(export_file_name(genre, format, today));
            if !output.is_json() {
                output.info(&format!("Dry run: would write {}", path.display()))?;
            }
            exports.push(ExportReport {
                format,
                path,
                bytes: None,
            });
        }
    } else if !formats.is_empty() {
        let exporter = export_service();
        for format in formats {
            let SavedExport { format, path, bytes } = exporter.save(&session, format, &dir, today)?;
            if !output.is_json() {
                output.success(&format!(
                    "Saved {} story to {} ({bytes} bytes)",
                    format.extension().to_uppercase(),
                    path.display()
                ))?;
            }
            exports.push(ExportReport {
                format,
                path,
                bytes: Some(bytes),
            });
        }
    }

    info!(genre = %genre, exports = exports.len(), "Generate completed");

    if output.is_json() {
        output.json(&GenerateReport {
            session: session.id().to_string(),
            story: &story,
            dry_run: args.dry_run,
            exports,
        })?;
    }

    Ok(())
}

/// Start from the configured defaults and apply every flag given.
///
/// A flag given as blank text clears the default, so the submission fails
/// with a missing-field error.
pub fn collect_fields(args: &GenerateArgs, config: &AppConfig) -> CliResult<FieldValues> {
    let mut fields = config.defaults.fields().map_err(CliError::config)?;

    let flags = [
        (Field::Name, &args.name),
        (Field::Animal, &args.animal),
        (Field::Place, &args.place),
        (Field::Object, &args.object),
        (Field::Emotion, &args.emotion),
        (Field::Superpower, &args.superpower),
    ];
    for (field, value) in flags {
        if let Some(value) = value {
            fields.set(field, value)?;
        }
    }

    if let Some(n) = args.number {
        fields = fields.number(MagicNumber::new(i64::from(n))?);
    }
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn parse(argv: &[&str]) -> GenerateArgs {
        let mut full = vec!["storyweaver", "generate"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Commands::Generate(args) => args,
            other => panic!("expected generate, got {other:?}"),
        }
    }

    #[test]
    fn defaults_fill_unset_flags() {
        let fields = collect_fields(&parse(&["--name", "Sam"]), &AppConfig::default()).unwrap();
        assert_eq!(fields.text(Field::Name), Some("Sam"));
        assert_eq!(fields.text(Field::Animal), Some("dragon"));
        assert_eq!(fields.magic_number().get(), 7);
    }

    #[test]
    fn flags_are_trimmed() {
        let fields =
            collect_fields(&parse(&["--place", "  Atlantis "]), &AppConfig::default()).unwrap();
        assert_eq!(fields.text(Field::Place), Some("Atlantis"));
    }

    #[test]
    fn blank_flag_clears_default() {
        let fields = collect_fields(&parse(&["--animal", "   "]), &AppConfig::default()).unwrap();
        assert_eq!(fields.missing(), vec![Field::Animal]);
    }

    #[test]
    fn number_flag_overrides_default() {
        let fields = collect_fields(&parse(&["-n", "42"]), &AppConfig::default()).unwrap();
        assert_eq!(fields.magic_number().get(), 42);
    }

    #[test]
    fn blank_config_default_is_missing() {
        let mut config = AppConfig::default();
        config.defaults.superpower = String::new();
        let fields = collect_fields(&parse(&[]), &config).unwrap();
        assert_eq!(fields.missing(), vec![Field::Superpower]);
    }
}
