//! Story satisfaction rating.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// A 1-5 satisfaction rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Result<Self, DomainError> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(DomainError::RatingOutOfRange { value })
        }
    }

    pub const fn get(&self) -> u8 {
        self.0
    }

    /// High ratings (4, 5) and low ratings (1, 2) get a message; 3 gets none.
    pub fn acknowledgement(&self) -> Option<Acknowledgement> {
        match self.0 {
            4.. => Some(Acknowledgement::Delighted),
            ..=2 => Some(Acknowledgement::Retry),
            _ => None,
        }
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<i64> for Rating {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(r: Rating) -> Self {
        r.0
    }
}

/// One of the static acknowledgement messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Acknowledgement {
    Delighted,
    Retry,
}

impl Acknowledgement {
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Delighted => "We're glad you loved it! Try another genre!",
            Self::Retry => "Want to try again? Adjust your inputs!",
        }
    }

    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Delighted => "\u{1f389}", // 🎉
            Self::Retry => "\u{1f504}",     // 🔄
        }
    }
}

impl fmt::Display for Acknowledgement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds() {
        let ack = |v| Rating::new(v).unwrap().acknowledgement();
        assert_eq!(ack(5), Some(Acknowledgement::Delighted));
        assert_eq!(ack(4), Some(Acknowledgement::Delighted));
        assert_eq!(ack(3), None);
        assert_eq!(ack(2), Some(Acknowledgement::Retry));
        assert_eq!(ack(1), Some(Acknowledgement::Retry));
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(matches!(
            Rating::new(0),
            Err(DomainError::RatingOutOfRange { value: 0 })
        ));
        assert!(Rating::new(6).is_err());
    }

    #[test]
    fn default_is_neutral() {
        assert_eq!(Rating::default().acknowledgement(), None);
    }
}
