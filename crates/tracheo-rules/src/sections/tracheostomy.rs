use tracheo_core::catalog::{field, options};
use tracheo_core::models::field::{FieldDefinition, FieldValue, FieldValues};
use tracheo_core::models::section::SectionId;

use crate::checks::dates;
use crate::validation::ValidationContext;
use crate::SectionRules;

/// Youngest age, in whole months, at which a child can have reached each
/// "age at procedure" answer.
pub fn minimum_months(procedure_age: &str) -> Option<i32> {
    match procedure_age {
        options::FIRST_MONTH => Some(0),
        options::ONE_TO_SIX_MONTHS => Some(1),
        options::SIX_TO_TWELVE_MONTHS => Some(6),
        options::OVER_ONE_YEAR => Some(12),
        _ => None,
    }
}

/// Section 5: the procedure itself.
pub struct TracheostomyRules;

impl SectionRules for TracheostomyRules {
    fn id(&self) -> SectionId {
        SectionId::Tracheostomy
    }

    fn check_related(
        &self,
        def: &FieldDefinition,
        value: &FieldValue,
        _values: &FieldValues,
        ctx: &ValidationContext<'_>,
    ) -> Result<(), String> {
        if def.id != field::PROCEDURE_AGE {
            return Ok(());
        }
        let (Some(min), Some(child_born)) = (
            value.as_text().and_then(minimum_months),
            ctx.child_birth_date(),
        ) else {
            return Ok(());
        };
        let age_months = dates::months_between(child_born, ctx.today())?;
        if age_months < min {
            return Err(format!(
                "the child is {age_months} month(s) old, younger than the selected age at procedure"
            ));
        }
        Ok(())
    }
}
