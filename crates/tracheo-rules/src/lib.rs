//! tracheo-rules
//!
//! Validation rules for the intake wizard. Pure logic, no I/O.
//! Defines, per section, the checks each field must pass, the conditional
//! requirements between sibling fields, and the progress indicator derived
//! from them.

pub mod checks;
pub mod conditional;
pub mod error;
pub mod progress;
pub mod sections;
pub mod validation;

use tracheo_core::catalog;
use tracheo_core::models::field::{FieldDefinition, FieldType, FieldValue, FieldValues};
use tracheo_core::models::section::SectionId;
use tracheo_core::models::section_data::SectionData;

use checks::dates;
use error::RulesError;
use validation::{ValidationContext, ValidationError};

/// Trait implemented by each wizard section.
///
/// The default [`validate`](SectionRules::validate) walks the section's
/// fields in display order. Per field it runs, stopping at the first
/// failure: the required check, the type/option/date checks every field
/// gets, [`check_field`](SectionRules::check_field), and finally
/// [`check_related`](SectionRules::check_related). Errors from different
/// fields are all collected.
pub trait SectionRules: Send + Sync {
    fn id(&self) -> SectionId;

    fn title(&self) -> &str {
        catalog::section(self.id()).title
    }

    /// Checks of a filled field on its own.
    fn check_field(
        &self,
        _def: &FieldDefinition,
        _value: &FieldValue,
        _ctx: &ValidationContext<'_>,
    ) -> Result<(), String> {
        Ok(())
    }

    /// Checks against sibling fields or earlier sections.
    fn check_related(
        &self,
        _def: &FieldDefinition,
        _value: &FieldValue,
        _values: &FieldValues,
        _ctx: &ValidationContext<'_>,
    ) -> Result<(), String> {
        Ok(())
    }

    /// Checks that only apply while a single field is being edited, for
    /// rules whose section-level error is reported on a different field.
    fn check_live(
        &self,
        _def: &FieldDefinition,
        _value: &FieldValue,
        _values: &FieldValues,
        _ctx: &ValidationContext<'_>,
    ) -> Result<(), String> {
        Ok(())
    }

    /// Validate the whole section. On success returns the section's filled
    /// fields; unknown or foreign keys in `values` are dropped.
    fn validate(
        &self,
        values: &FieldValues,
        ctx: &ValidationContext<'_>,
    ) -> Result<SectionData, Vec<ValidationError>> {
        let ctx = ctx.scoped_to(self.id());
        let mut fields = FieldValues::new();
        let mut errors = Vec::new();

        for def in catalog::section_fields(self.id()) {
            match self.check_one(def, values, &ctx) {
                Ok(Some(value)) => {
                    fields.insert(def.id.to_string(), value.clone());
                }
                Ok(None) => {}
                Err(message) => errors.push(ValidationError::new(def.id, message)),
            }
        }

        if errors.is_empty() {
            Ok(SectionData::new(fields))
        } else {
            tracing::debug!(section = %self.id(), errors = errors.len(), "section validation failed");
            Err(errors)
        }
    }

    /// Validate one field for live feedback. Returns at most one error.
    fn validate_field(
        &self,
        field_id: &str,
        values: &FieldValues,
        ctx: &ValidationContext<'_>,
    ) -> Result<Vec<ValidationError>, RulesError> {
        let def = catalog::field(field_id)
            .ok_or_else(|| RulesError::UnknownField(field_id.to_string()))?;
        if !catalog::section(self.id()).contains(def.id) {
            return Err(RulesError::FieldNotInSection {
                field_id: field_id.to_string(),
                section: self.id(),
            });
        }

        let ctx = ctx.scoped_to(self.id());
        let result = match self.check_one(def, values, &ctx) {
            Ok(Some(value)) => self.check_live(def, value, values, &ctx),
            Ok(None) => Ok(()),
            Err(message) => Err(message),
        };
        Ok(result
            .err()
            .map(|message| ValidationError::new(def.id, message))
            .into_iter()
            .collect())
    }

    /// Every rule for one field. `Ok(None)` means empty and not required.
    fn check_one<'v>(
        &self,
        def: &FieldDefinition,
        values: &'v FieldValues,
        ctx: &ValidationContext<'_>,
    ) -> Result<Option<&'v FieldValue>, String> {
        let value = match values.get(def.id) {
            Some(value) if !value.is_empty() => value,
            _ if conditional::is_required(def.id, values) => return Err(required_message(def)),
            _ => return Ok(None),
        };
        check_shape(def, value, ctx)?;
        self.check_field(def, value, ctx)?;
        self.check_related(def, value, values, ctx)?;
        Ok(Some(value))
    }
}

fn required_message(def: &FieldDefinition) -> String {
    match def.field_type {
        FieldType::MultiEnum => format!("select at least one option for {}", def.label),
        FieldType::Text | FieldType::Date | FieldType::Enum => format!("{} is required", def.label),
    }
}

/// Type, option membership, and date sanity: the checks every field gets.
fn check_shape(
    def: &FieldDefinition,
    value: &FieldValue,
    ctx: &ValidationContext<'_>,
) -> Result<(), String> {
    match (def.field_type, value) {
        (FieldType::Text, FieldValue::Text(_)) => Ok(()),
        (FieldType::Date, FieldValue::Text(raw)) => {
            let date = dates::parse(raw)?;
            dates::check_not_future(date, ctx.today())
        }
        (FieldType::Enum, FieldValue::Text(raw)) => {
            if def.allows(raw.trim()) {
                Ok(())
            } else {
                Err("select one of the listed options".to_string())
            }
        }
        (FieldType::MultiEnum, FieldValue::Tags(tags)) => {
            match tags.iter().find(|tag| !def.allows(tag)) {
                Some(tag) => Err(format!("'{tag}' is not one of the listed options")),
                None => Ok(()),
            }
        }
        _ => Err("unexpected value type".to_string()),
    }
}

/// Rules of one section.
pub fn rules_for(id: SectionId) -> &'static dyn SectionRules {
    match id {
        SectionId::Child => &sections::child::ChildRules,
        SectionId::Birth => &sections::birth::BirthRules,
        SectionId::Guardian => &sections::guardian::GuardianRules,
        SectionId::Address => &sections::address::AddressRules,
        SectionId::Tracheostomy => &sections::tracheostomy::TracheostomyRules,
        SectionId::Respiratory => &sections::respiratory::RespiratoryRules,
        SectionId::Care => &sections::care::CareRules,
        SectionId::Services => &sections::services::ServicesRules,
    }
}

/// Return the rules of every section, in wizard order.
pub fn all_sections() -> Vec<&'static dyn SectionRules> {
    SectionId::ALL.into_iter().map(rules_for).collect()
}

/// Validate a section's values against its rules.
pub fn validate(
    section: SectionId,
    values: &FieldValues,
    ctx: &ValidationContext<'_>,
) -> Result<SectionData, Vec<ValidationError>> {
    rules_for(section).validate(values, ctx)
}

/// Validate a single field, looking up its section in the catalog.
pub fn validate_field(
    field_id: &str,
    values: &FieldValues,
    ctx: &ValidationContext<'_>,
) -> Result<Vec<ValidationError>, RulesError> {
    let def = catalog::field(field_id)
        .ok_or_else(|| RulesError::UnknownField(field_id.to_string()))?;
    rules_for(def.section).validate_field(field_id, values, ctx)
}
