//! `storyweaver genres`: list the genres and how many templates each has.

use serde::Serialize;

use storyweaver_core::domain::Genre;

use crate::{
    cli::{GenresArgs, ListFormat},
    commands::story_service,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct GenreRow {
    genre: Genre,
    name: &'static str,
    icon: &'static str,
    templates: usize,
}

pub fn execute(args: GenresArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = story_service(&config, None, None)?;

    let rows = service
        .genres()?
        .into_iter()
        .map(|genre| -> CliResult<GenreRow> {
            Ok(GenreRow {
                genre,
                name: genre.as_str(),
                icon: genre.icon(),
                templates: service.template_count(genre)?,
            })
        })
        .collect::<CliResult<Vec<_>>>()?;

    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Json => output.json(&rows)?,
        ListFormat::List => {
            for row in &rows {
                output.print(row.name)?;
            }
        }
        ListFormat::Table => {
            output.header("Available genres:")?;
            output.print("")?;
            output.print(&format!("  {:<4}{:<12}{}", "", "GENRE", "TEMPLATES"))?;
            for row in &rows {
                output.print(&format!("  {:<4}{:<12}{}", row.icon, row.name, row.templates))?;
            }
        }
    }

    Ok(())
}
