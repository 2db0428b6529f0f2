use crate::domain::{
    entities::{FieldValues, StoryTemplate},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_template(template: &StoryTemplate) -> Result<(), DomainError> {
        template.validate()
    }

    pub fn validate_fields(fields: &FieldValues) -> Result<(), DomainError> {
        fields.require_all()
    }
}
