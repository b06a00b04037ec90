use tracheo_core::catalog::field;
use tracheo_core::models::field::{FieldDefinition, FieldValue};
use tracheo_core::models::section::SectionId;

use crate::checks::postal_code;
use crate::validation::ValidationContext;
use crate::SectionRules;

pub struct AddressRules;

impl SectionRules for AddressRules {
    fn id(&self) -> SectionId {
        SectionId::Address
    }

    fn check_field(
        &self,
        def: &FieldDefinition,
        value: &FieldValue,
        _ctx: &ValidationContext<'_>,
    ) -> Result<(), String> {
        match (def.id, value.as_text()) {
            (field::POSTAL_CODE, Some(code)) => postal_code::validate(code),
            _ => Ok(()),
        }
    }
}
