use tracheo_core::catalog::field;
use tracheo_core::models::field::{FieldDefinition, FieldValue};
use tracheo_core::models::section::SectionId;

use crate::checks::{self, health_id};
use crate::validation::ValidationContext;
use crate::SectionRules;

/// Section 1: who the child is. Later sections read the birth date from here.
pub struct ChildRules;

impl SectionRules for ChildRules {
    fn id(&self) -> SectionId {
        SectionId::Child
    }

    fn check_field(
        &self,
        def: &FieldDefinition,
        value: &FieldValue,
        _ctx: &ValidationContext<'_>,
    ) -> Result<(), String> {
        let Some(text) = value.as_text() else {
            return Ok(());
        };
        match def.id {
            field::CHILD_NAME => checks::full_name(text),
            field::HEALTH_ID => health_id::validate(text),
            _ => Ok(()),
        }
    }
}
