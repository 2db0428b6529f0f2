//! Domain value objects: Genre, Field, MagicNumber.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers.
//!
//! # Adding a New Genre
//!
//! 1. Add the enum variant here and to [`Genre::ALL`]
//! 2. Add the `as_str`, `icon` and `FromStr` arms here
//! 3. Register at least one template in the built-in catalogue

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Genre ─────────────────────────────────────────────────────────────────────

/// A story genre. The set is closed and fixed at compile time.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Genre {
    #[default]
    Adventure,
    Mystery,
    Comedy,
    Fantasy,
    SciFi,
}

impl Genre {
    /// Every genre, in selector order.
    pub const ALL: [Genre; 5] = [
        Self::Adventure,
        Self::Mystery,
        Self::Comedy,
        Self::Fantasy,
        Self::SciFi,
    ];

    /// Human-facing name, also used in export file names.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Adventure => "Adventure",
            Self::Mystery => "Mystery",
            Self::Comedy => "Comedy",
            Self::Fantasy => "Fantasy",
            Self::SciFi => "Sci-Fi",
        }
    }

    /// Decorative icon prefixed to display titles.
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Adventure => "\u{1f304}", // 🌄
            Self::Mystery => "\u{1f50d}",   // 🔍
            Self::Comedy => "\u{1f923}",    // 🤣
            Self::Fantasy => "\u{1f3f0}",   // 🏰
            Self::SciFi => "\u{1f680}",     // 🚀
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "adventure" => Ok(Self::Adventure),
            "mystery" => Ok(Self::Mystery),
            "comedy" => Ok(Self::Comedy),
            "fantasy" => Ok(Self::Fantasy),
            "sci-fi" | "scifi" | "sci_fi" => Ok(Self::SciFi),
            other => Err(DomainError::UnknownGenre(other.to_string())),
        }
    }
}

// ── Field ─────────────────────────────────────────────────────────────────────

/// A named slot a template can reference as `{key}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Animal,
    Place,
    Object,
    Emotion,
    Superpower,
    Number,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 7] = [
        Self::Name,
        Self::Animal,
        Self::Place,
        Self::Object,
        Self::Emotion,
        Self::Superpower,
        Self::Number,
    ];

    /// The six free-text fields, in form order.
    pub const TEXT: [Field; 6] = [
        Self::Name,
        Self::Animal,
        Self::Place,
        Self::Object,
        Self::Emotion,
        Self::Superpower,
    ];

    /// Placeholder key as written inside braces.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Animal => "animal",
            Self::Place => "place",
            Self::Object => "object",
            Self::Emotion => "emotion",
            Self::Superpower => "superpower",
            Self::Number => "number",
        }
    }

    /// Form label shown to the user.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Name => "Hero's Name",
            Self::Animal => "Animal Companion",
            Self::Place => "Magical Place",
            Self::Object => "Mystical Object",
            Self::Emotion => "Dominant Emotion",
            Self::Superpower => "Unique Power",
            Self::Number => "Magic Number",
        }
    }

    /// Look a field up by placeholder key. Keys are case-sensitive.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ── MagicNumber ───────────────────────────────────────────────────────────────

/// The story's numeric field, always within `1..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct MagicNumber(u8);

impl MagicNumber {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;
    pub const DEFAULT: u8 = 7;

    /// Strict constructor: out-of-range input is rejected.
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(DomainError::NumberOutOfRange { value })
        }
    }

    /// Saturating constructor: out-of-range input is pulled to the nearest bound.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub const fn get(&self) -> u8 {
        self.0
    }
}

impl Default for MagicNumber {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<i64> for MagicNumber {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MagicNumber> for u8 {
    fn from(n: MagicNumber) -> Self {
        n.0
    }
}

impl fmt::Display for MagicNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
