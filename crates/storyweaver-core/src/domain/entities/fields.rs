//! User-supplied field values for one submission.

use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    value_objects::{Field, MagicNumber},
};

/// The values collected from the story form.
///
/// Text values are stored trimmed; a value that is empty after trimming is
/// treated as absent. The magic number is always present and defaults to 7.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValues {
    name: Option<String>,
    animal: Option<String>,
    place: Option<String>,
    object: Option<String>,
    emotion: Option<String>,
    superpower: Option<String>,
    #[serde(default)]
    number: MagicNumber,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(self, value: impl Into<String>) -> Self {
        self.with_text(Field::Name, value)
    }

    pub fn animal(self, value: impl Into<String>) -> Self {
        self.with_text(Field::Animal, value)
    }

    pub fn place(self, value: impl Into<String>) -> Self {
        self.with_text(Field::Place, value)
    }

    pub fn object(self, value: impl Into<String>) -> Self {
        self.with_text(Field::Object, value)
    }

    pub fn emotion(self, value: impl Into<String>) -> Self {
        self.with_text(Field::Emotion, value)
    }

    pub fn superpower(self, value: impl Into<String>) -> Self {
        self.with_text(Field::Superpower, value)
    }

    pub fn number(mut self, number: MagicNumber) -> Self {
        self.number = number;
        self
    }

    fn with_text(mut self, field: Field, value: impl Into<String>) -> Self {
        if let Some(slot) = self.slot_mut(field) {
            *slot = normalize(value.into());
        }
        self
    }

    /// Set a field from raw form input.
    ///
    /// The number field is parsed and range-checked; text fields are trimmed.
    pub fn set(&mut self, field: Field, raw: &str) -> Result<(), DomainError> {
        match self.slot_mut(field) {
            Some(slot) => *slot = normalize(raw.to_string()),
            None => {
                let value: i64 = raw.trim().parse().map_err(|_| DomainError::InvalidNumber {
                    input: raw.to_string(),
                })?;
                self.number = MagicNumber::new(value)?;
            }
        }
        Ok(())
    }

    /// The text value for `field`, if present. Always `None` for `Field::Number`.
    pub fn text(&self, field: Field) -> Option<&str> {
        let slot = match field {
            Field::Name => &self.name,
            Field::Animal => &self.animal,
            Field::Place => &self.place,
            Field::Object => &self.object,
            Field::Emotion => &self.emotion,
            Field::Superpower => &self.superpower,
            Field::Number => return None,
        };
        slot.as_deref()
    }

    pub fn magic_number(&self) -> MagicNumber {
        self.number
    }

    /// String form of a field's value, as substituted into templates.
    pub fn value(&self, field: Field) -> Option<String> {
        match field {
            Field::Number => Some(self.number.to_string()),
            other => self.text(other).map(str::to_string),
        }
    }

    /// Text fields without a value, in form order.
    pub fn missing(&self) -> Vec<Field> {
        Field::TEXT
            .into_iter()
            .filter(|&f| self.text(f).is_none())
            .collect()
    }

    /// Ensure every text field is filled.
    ///
    /// # Errors
    ///
    /// [`DomainError::MissingField`] naming the first empty field.
    pub fn require_all(&self) -> Result<(), DomainError> {
        match self.missing().first() {
            Some(&field) => Err(DomainError::MissingField { field }),
            None => Ok(()),
        }
    }

    fn slot_mut(&mut self, field: Field) -> Option<&mut Option<String>> {
        match field {
            Field::Name => Some(&mut self.name),
            Field::Animal => Some(&mut self.animal),
            Field::Place => Some(&mut self.place),
            Field::Object => Some(&mut self.object),
            Field::Emotion => Some(&mut self.emotion),
            Field::Superpower => Some(&mut self.superpower),
            Field::Number => None,
        }
    }
}

fn normalize(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_counts_as_missing() {
        let values = FieldValues::new().name("   ").animal("owl");
        assert_eq!(values.text(Field::Name), None);
        assert_eq!(values.text(Field::Animal), Some("owl"));
    }

    #[test]
    fn text_is_trimmed() {
        let values = FieldValues::new().place("  Avalon \n");
        assert_eq!(values.text(Field::Place), Some("Avalon"));
    }

    #[test]
    fn number_defaults_to_seven() {
        assert_eq!(FieldValues::new().value(Field::Number).as_deref(), Some("7"));
    }

    #[test]
    fn set_parses_number_and_checks_range() {
        let mut values = FieldValues::new();
        values.set(Field::Number, " 42 ").unwrap();
        assert_eq!(values.magic_number().get(), 42);

        assert!(matches!(
            values.set(Field::Number, "101"),
            Err(DomainError::NumberOutOfRange { value: 101 })
        ));
        assert!(matches!(
            values.set(Field::Number, "seven"),
            Err(DomainError::InvalidNumber { .. })
        ));
        // failed sets leave the previous value in place
        assert_eq!(values.magic_number().get(), 42);
    }

    #[test]
    fn require_all_reports_first_missing_in_form_order() {
        let values = FieldValues::new().name("Alex").place("Avalon");
        assert_eq!(
            values.require_all(),
            Err(DomainError::MissingField {
                field: Field::Animal
            })
        );
        assert_eq!(
            values.missing(),
            vec![Field::Animal, Field::Object, Field::Emotion, Field::Superpower]
        );
    }
}
