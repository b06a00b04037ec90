use tracheo_core::catalog::field;
use tracheo_core::models::field::{FieldDefinition, FieldValue, FieldValues};
use tracheo_core::models::section::SectionId;

use crate::checks::{self, dates, phone};
use crate::validation::ValidationContext;
use crate::SectionRules;

pub const MIN_GUARDIAN_AGE: i16 = 14;
pub const MIN_AGE_GAP: i16 = 14;
pub const MAX_AGE_GAP: i16 = 70;

/// Section 3: the guardian filling in the form.
pub struct GuardianRules;

impl SectionRules for GuardianRules {
    fn id(&self) -> SectionId {
        SectionId::Guardian
    }

    fn check_field(
        &self,
        def: &FieldDefinition,
        value: &FieldValue,
        ctx: &ValidationContext<'_>,
    ) -> Result<(), String> {
        let Some(text) = value.as_text() else {
            return Ok(());
        };
        match def.id {
            field::GUARDIAN_NAME => checks::full_name(text),
            field::GUARDIAN_BIRTH_DATE => {
                let born = dates::parse(text)?;
                if dates::years_between(born, ctx.today())? < MIN_GUARDIAN_AGE {
                    return Err(format!(
                        "the guardian must be at least {MIN_GUARDIAN_AGE} years old"
                    ));
                }
                Ok(())
            }
            field::PHONE => phone::parse(text).map(|_| ()),
            field::EMAIL => checks::email(text),
            _ => Ok(()),
        }
    }

    fn check_related(
        &self,
        def: &FieldDefinition,
        value: &FieldValue,
        _values: &FieldValues,
        ctx: &ValidationContext<'_>,
    ) -> Result<(), String> {
        if def.id != field::GUARDIAN_BIRTH_DATE {
            return Ok(());
        }
        let (Some(raw), Some(child_born)) = (value.as_text(), ctx.child_birth_date()) else {
            return Ok(());
        };
        let gap = dates::years_between(dates::parse(raw)?, child_born)?;
        if gap < MIN_AGE_GAP {
            return Err(format!(
                "the guardian must be at least {MIN_AGE_GAP} years older than the child"
            ));
        }
        if gap > MAX_AGE_GAP {
            return Err(format!(
                "the guardian cannot be more than {MAX_AGE_GAP} years older than the child"
            ));
        }
        Ok(())
    }
}
