//! Export formats and download naming.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Genre;

/// A downloadable artifact type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// UTF-8 plain text.
    Text,
    /// Minimal paginated PDF.
    Pdf,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [Self::Text, Self::Pdf];

    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "txt" | "text" => Ok(Self::Text),
            "pdf" => Ok(Self::Pdf),
            other => Err(format!("unknown export format: {other}")),
        }
    }
}

/// `{genre}_story_{YYYYMMDD}.{ext}`
pub fn export_file_name(genre: Genre, format: ExportFormat, date: NaiveDate) -> String {
    format!(
        "{}_story_{}.{}",
        genre.as_str(),
        date.format("%Y%m%d"),
        format.extension()
    )
}
