//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use storyweaver_core::{
    application::SelectionMode,
    domain::{ExportFormat, Genre},
};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "storyweaver",
    bin_name = "storyweaver",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{2728} Turn your ideas into magical tales",
    long_about = "Story Weaver fills genre story templates with your hero, \
                  companion, place and more, then exports the tale as plain \
                  text or PDF.",
    after_help = "EXAMPLES:\n\
        \x20 storyweaver generate --genre adventure --name Alex --animal dragon\n\
        \x20 storyweaver generate --genre sci-fi --export both --out ./stories\n\
        \x20 storyweaver genres\n\
        \x20 storyweaver completions bash > /usr/share/bash-completion/completions/storyweaver",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Weave a story from the given fields.
    #[command(
        visible_alias = "g",
        about = "Weave a story",
        after_help = "EXAMPLES:\n\
            \x20 storyweaver generate\n\
            \x20 storyweaver generate --genre mystery --name Sam --object lantern\n\
            \x20 storyweaver generate --genre fantasy --seed 42 --export pdf"
    )]
    Generate(GenerateArgs),

    /// List genres and how many templates each has.
    #[command(
        visible_alias = "ls",
        about = "List story genres",
        after_help = "EXAMPLES:\n\
            \x20 storyweaver genres\n\
            \x20 storyweaver genres --format json"
    )]
    Genres(GenresArgs),

    /// Rate a story from 1 to 5.
    #[command(
        about = "Rate a story",
        after_help = "EXAMPLES:\n\
            \x20 storyweaver rate 5"
    )]
    Rate(RateArgs),

    /// Guided session: pick a genre, fill in fields, export and rate.
    #[command(about = "Start an interactive story session")]
    Interactive,

    /// Initialise a Story Weaver configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 storyweaver init           # user config location\n\
            \x20 storyweaver init --local   # .storyweaver.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 storyweaver completions bash > ~/.local/share/bash-completion/completions/storyweaver\n\
            \x20 storyweaver completions zsh  > ~/.zfunc/_storyweaver\n\
            \x20 storyweaver completions fish > ~/.config/fish/completions/storyweaver.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Story Weaver configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 storyweaver config get defaults.genre\n\
            \x20 storyweaver config list\n\
            \x20 storyweaver config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `storyweaver generate`.
///
/// Any field left out falls back to the configured default. Passing an empty
/// value (`--name ""`) leaves the field blank, which the form rejects.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Story genre.
    #[arg(short = 'g', long = "genre", value_enum, help = "Story genre")]
    pub genre: Option<GenreArg>,

    #[arg(long = "name", value_name = "TEXT", help = "Hero's name")]
    pub name: Option<String>,

    #[arg(long = "animal", value_name = "TEXT", help = "Animal companion")]
    pub animal: Option<String>,

    #[arg(long = "place", value_name = "TEXT", help = "Magical place")]
    pub place: Option<String>,

    #[arg(long = "object", value_name = "TEXT", help = "Mystical object")]
    pub object: Option<String>,

    #[arg(long = "emotion", value_name = "TEXT", help = "Powerful emotion")]
    pub emotion: Option<String>,

    #[arg(long = "superpower", value_name = "TEXT", help = "Secret superpower")]
    pub superpower: Option<String>,

    /// Magic number, 1 to 100.
    #[arg(
        short = 'n',
        long = "number",
        value_parser = clap::value_parser!(u8).range(1..=100),
        help = "Magic number (1-100)"
    )]
    pub number: Option<u8>,

    /// Seed for reproducible template selection.
    #[arg(long = "seed", value_name = "SEED", help = "Seed for reproducible stories")]
    pub seed: Option<u64>,

    /// How display and export templates are chosen.
    #[arg(long = "selection", value_enum, help = "Template selection mode")]
    pub selection: Option<SelectionArg>,

    /// Which files to write.
    #[arg(
        short = 'e',
        long = "export",
        value_enum,
        default_value = "none",
        help = "Export the story"
    )]
    pub export: ExportChoice,

    /// Directory for exported files.
    #[arg(
        short = 'o',
        long = "out",
        value_name = "DIR",
        help = "Export directory (default: configured export.directory)"
    )]
    pub out: Option<PathBuf>,

    /// Show what would be exported without writing any files.
    #[arg(long = "dry-run", help = "Show exports without writing them")]
    pub dry_run: bool,
}

/// Genres accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum GenreArg {
    Adventure,
    Mystery,
    Comedy,
    Fantasy,
    /// Also accepted as `scifi`.
    #[value(name = "sci-fi", alias = "scifi")]
    SciFi,
}

impl From<GenreArg> for Genre {
    fn from(arg: GenreArg) -> Self {
        match arg {
            GenreArg::Adventure => Genre::Adventure,
            GenreArg::Mystery => Genre::Mystery,
            GenreArg::Comedy => Genre::Comedy,
            GenreArg::Fantasy => Genre::Fantasy,
            GenreArg::SciFi => Genre::SciFi,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SelectionArg {
    /// One template for both the shown and exported story.
    Coupled,
    /// Shown and exported stories are drawn separately.
    Independent,
}

impl From<SelectionArg> for SelectionMode {
    fn from(arg: SelectionArg) -> Self {
        match arg {
            SelectionArg::Coupled => SelectionMode::Coupled,
            SelectionArg::Independent => SelectionMode::Independent,
        }
    }
}

/// Export targets for `generate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportChoice {
    Txt,
    Pdf,
    Both,
    None,
}

impl ExportChoice {
    pub fn formats(self) -> Vec<ExportFormat> {
        match self {
            Self::Txt => vec![ExportFormat::Text],
            Self::Pdf => vec![ExportFormat::Pdf],
            Self::Both => ExportFormat::ALL.to_vec(),
            Self::None => Vec::new(),
        }
    }
}

// ── genres ────────────────────────────────────────────────────────────────────

/// Arguments for `storyweaver genres`.
#[derive(Debug, Args)]
pub struct GenresArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `genres` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── rate ──────────────────────────────────────────────────────────────────────

/// Arguments for `storyweaver rate`.
#[derive(Debug, Args)]
pub struct RateArgs {
    /// Rating from 1 (not for me) to 5 (loved it).
    #[arg(value_name = "RATING", allow_negative_numbers = true)]
    pub rating: i64,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `storyweaver init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.storyweaver.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `storyweaver completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `storyweaver config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.genre`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_generate_command() {
        let cli = Cli::parse_from([
            "storyweaver",
            "generate",
            "--genre",
            "mystery",
            "--name",
            "Sam",
            "--number",
            "12",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.genre, Some(GenreArg::Mystery));
        assert_eq!(args.name.as_deref(), Some("Sam"));
        assert_eq!(args.number, Some(12));
        assert_eq!(args.export, ExportChoice::None);
    }

    #[test]
    fn scifi_alias() {
        for spelling in ["sci-fi", "scifi"] {
            let cli = Cli::parse_from(["storyweaver", "g", "--genre", spelling]);
            let Commands::Generate(args) = cli.command else {
                panic!("expected Generate command");
            };
            assert_eq!(args.genre.map(Genre::from), Some(Genre::SciFi));
        }
    }

    #[test]
    fn number_outside_range_is_rejected() {
        assert!(Cli::try_parse_from(["storyweaver", "generate", "--number", "0"]).is_err());
        assert!(Cli::try_parse_from(["storyweaver", "generate", "--number", "101"]).is_err());
        assert!(Cli::try_parse_from(["storyweaver", "generate", "--number", "100"]).is_ok());
    }

    #[test]
    fn export_choice_formats() {
        assert!(ExportChoice::None.formats().is_empty());
        assert_eq!(ExportChoice::Txt.formats(), vec![ExportFormat::Text]);
        assert_eq!(
            ExportChoice::Both.formats(),
            vec![ExportFormat::Text, ExportFormat::Pdf]
        );
    }

    #[test]
    fn rate_accepts_out_of_range_for_domain_validation() {
        let cli = Cli::parse_from(["storyweaver", "rate", "-1"]);
        assert!(matches!(cli.command, Commands::Rate(RateArgs { rating: -1 })));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["storyweaver", "--quiet", "--verbose", "genres"]);
        assert!(result.is_err());
    }
}
