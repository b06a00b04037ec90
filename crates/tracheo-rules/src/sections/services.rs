use tracheo_core::catalog::{field, options};
use tracheo_core::models::field::{FieldDefinition, FieldValue};
use tracheo_core::models::section::SectionId;

use crate::validation::ValidationContext;
use crate::SectionRules;

/// Section 8: follow-up services and consent. Submission requires consent.
pub struct ServicesRules;

impl SectionRules for ServicesRules {
    fn id(&self) -> SectionId {
        SectionId::Services
    }

    fn check_field(
        &self,
        def: &FieldDefinition,
        value: &FieldValue,
        _ctx: &ValidationContext<'_>,
    ) -> Result<(), String> {
        if def.id == field::CONSENT && !value.matches(options::ACCEPTED) {
            return Err("consent is required to submit the registration".to_string());
        }
        Ok(())
    }
}
