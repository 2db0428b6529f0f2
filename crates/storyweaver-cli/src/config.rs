//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `STORYWEAVER__SECTION__KEY` (`.env` is loaded first)
//! 3. `.storyweaver.toml` in the current directory
//! 4. The config file (`--config FILE`, or the per-user config path)
//! 5. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use storyweaver_core::{
    application::SelectionMode,
    domain::{FieldValues, Genre, MagicNumber},
};

/// File name of the per-directory config.
pub const LOCAL_CONFIG: &str = ".storyweaver.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "STORYWEAVER";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Values used when a field is not given on the command line.
    pub defaults: Defaults,
    /// Template selection.
    pub generation: GenerationConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Export and template-pack locations.
    pub export: ExportConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub genre: String,
    pub name: String,
    pub animal: String,
    pub place: String,
    pub object: String,
    pub emotion: String,
    pub superpower: String,
    pub number: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub selection: SelectionMode,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`; used when `--output-format` is `auto`.
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub directory: PathBuf,
    /// Extra `*.toml` template packs.
    pub templates_dir: Option<PathBuf>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            genre: Genre::default().as_str().to_string(),
            name: "Alex".into(),
            animal: "dragon".into(),
            place: "Avalon".into(),
            object: "crystal orb".into(),
            emotion: "excitement".into(),
            superpower: "shapeshifting".into(),
            number: MagicNumber::DEFAULT,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            templates_dir: None,
        }
    }
}

impl Defaults {
    /// The default genre, parsed.
    pub fn genre(&self) -> anyhow::Result<Genre> {
        self.genre
            .parse()
            .with_context(|| format!("defaults.genre = '{}'", self.genre))
    }

    /// The default form, as domain values.
    ///
    /// Blank defaults stay blank, so the form reports them as missing.
    pub fn fields(&self) -> anyhow::Result<FieldValues> {
        let number = MagicNumber::new(i64::from(self.number))
            .with_context(|| format!("defaults.number = {}", self.number))?;
        Ok(FieldValues::new()
            .name(self.name.as_str())
            .animal(self.animal.as_str())
            .place(self.place.as_str())
            .object(self.object.as_str())
            .emotion(self.emotion.as_str())
            .superpower(self.superpower.as_str())
            .number(number))
    }
}

impl AppConfig {
    /// Load configuration from defaults, files and the environment.
    ///
    /// `config_file` is the path passed via `--config`; it must exist when
    /// given. Without it the per-user config path is read if present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let user_file = config_file.cloned().unwrap_or_else(Self::config_path);
        Self::load_from(&user_file, config_file.is_some(), Path::new(LOCAL_CONFIG))
    }

    fn load_from(user_file: &Path, required: bool, local_file: &Path) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to build default configuration")?;

        let config = Config::builder()
            .add_source(defaults)
            .add_source(
                File::from(user_file)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                File::from(local_file)
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", user_file.display()))?;

        config
            .try_deserialize()
            .context("Configuration has invalid values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.storyweaver.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "storyweaver", "storyweaver")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG))
    }
}
