use tracheo_core::catalog::field;
use tracheo_core::models::field::{FieldDefinition, FieldValue, FieldValues};
use tracheo_core::models::section::SectionId;

use crate::checks::{self, birth_weight};
use crate::validation::ValidationContext;
use crate::SectionRules;

const MAX_NICU_DAYS: u32 = 365;

/// Section 2: birth history.
///
/// Birth weight and gestational age constrain each other. At section level
/// a mismatch is reported on the weight; while editing the gestational age
/// alone, it is reported on the bucket instead.
pub struct BirthRules;

/// The entered weight, if it parses. Anything else is the weight field's own
/// error to report.
fn entered_grams(values: &FieldValues) -> Option<u32> {
    values
        .get(field::BIRTH_WEIGHT)
        .and_then(FieldValue::as_text)
        .and_then(|raw| birth_weight::parse_grams(raw).ok())
}

fn selected_bucket(values: &FieldValues) -> Option<&'static birth_weight::GestationalBucket> {
    values
        .get(field::GESTATIONAL_AGE)
        .and_then(FieldValue::as_text)
        .and_then(birth_weight::bucket)
}

impl SectionRules for BirthRules {
    fn id(&self) -> SectionId {
        SectionId::Birth
    }

    fn check_field(
        &self,
        def: &FieldDefinition,
        value: &FieldValue,
        _ctx: &ValidationContext<'_>,
    ) -> Result<(), String> {
        match (def.id, value.as_text()) {
            (field::BIRTH_WEIGHT, Some(raw)) => birth_weight::parse_grams(raw).map(|_| ()),
            (field::NICU_DAYS, Some(raw)) => checks::whole_number(raw, 1, MAX_NICU_DAYS).map(|_| ()),
            _ => Ok(()),
        }
    }

    fn check_related(
        &self,
        def: &FieldDefinition,
        value: &FieldValue,
        values: &FieldValues,
        _ctx: &ValidationContext<'_>,
    ) -> Result<(), String> {
        if def.id != field::BIRTH_WEIGHT {
            return Ok(());
        }
        let (Some(raw), Some(bucket)) = (value.as_text(), selected_bucket(values)) else {
            return Ok(());
        };
        birth_weight::check_weight(birth_weight::parse_grams(raw)?, bucket)
    }

    fn check_live(
        &self,
        def: &FieldDefinition,
        value: &FieldValue,
        values: &FieldValues,
        _ctx: &ValidationContext<'_>,
    ) -> Result<(), String> {
        if def.id != field::GESTATIONAL_AGE {
            return Ok(());
        }
        let (Some(bucket), Some(grams)) = (
            value.as_text().and_then(birth_weight::bucket),
            entered_grams(values),
        ) else {
            return Ok(());
        };
        birth_weight::check_bucket(bucket, grams)
    }
}
