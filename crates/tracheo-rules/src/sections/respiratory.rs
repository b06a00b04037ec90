use tracheo_core::catalog::field;
use tracheo_core::models::field::{FieldDefinition, FieldValue};
use tracheo_core::models::section::SectionId;

use crate::checks;
use crate::validation::ValidationContext;
use crate::SectionRules;

/// Highest home oxygen flow accepted, in L/min.
const MAX_OXYGEN_FLOW: f64 = 15.0;

pub struct RespiratoryRules;

impl SectionRules for RespiratoryRules {
    fn id(&self) -> SectionId {
        SectionId::Respiratory
    }

    fn check_field(
        &self,
        def: &FieldDefinition,
        value: &FieldValue,
        _ctx: &ValidationContext<'_>,
    ) -> Result<(), String> {
        match (def.id, value.as_text()) {
            (field::OXYGEN_FLOW, Some(flow)) => {
                let flow = checks::positive_decimal(flow)?;
                if flow > MAX_OXYGEN_FLOW {
                    return Err(format!("must be at most {MAX_OXYGEN_FLOW} L/min"));
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}
