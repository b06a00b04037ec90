//! Conditional requirement: fields that only matter while a sibling field
//! holds a given answer.

use tracheo_core::catalog::{self, field, options};
use tracheo_core::models::field::{FieldValue, FieldValues};
use tracheo_core::models::section::SectionId;

/// While `trigger_field` matches `trigger_value` (equality for scalars,
/// membership for tag lists) every dependent field is required. Once it
/// stops matching, the dependents are cleared.
#[derive(Debug, Clone, Copy)]
pub struct ConditionalRule {
    pub section: SectionId,
    pub trigger_field: &'static str,
    pub trigger_value: &'static str,
    pub dependent_fields: &'static [&'static str],
}

impl ConditionalRule {
    pub fn is_active(&self, values: &FieldValues) -> bool {
        self.is_active_with(|id| values.get(id))
    }

    fn is_active_with<'v>(&self, lookup: impl Fn(&str) -> Option<&'v FieldValue>) -> bool {
        lookup(self.trigger_field).is_some_and(|v| v.matches(self.trigger_value))
    }
}

static RULES: [ConditionalRule; 9] = [
    ConditionalRule {
        section: SectionId::Birth,
        trigger_field: field::NICU_STAY,
        trigger_value: options::YES,
        dependent_fields: &[field::NICU_DAYS],
    },
    ConditionalRule {
        section: SectionId::Guardian,
        trigger_field: field::RELATIONSHIP,
        trigger_value: options::OTHER,
        dependent_fields: &[field::RELATIONSHIP_OTHER],
    },
    ConditionalRule {
        section: SectionId::Tracheostomy,
        trigger_field: field::INDICATIONS,
        trigger_value: options::OTHER,
        dependent_fields: &[field::INDICATION_OTHER],
    },
    ConditionalRule {
        section: SectionId::Respiratory,
        trigger_field: field::VENTILATION,
        trigger_value: options::VENTILATION_NIGHT_ONLY,
        dependent_fields: &[field::VENTILATOR_MODEL],
    },
    ConditionalRule {
        section: SectionId::Respiratory,
        trigger_field: field::VENTILATION,
        trigger_value: options::VENTILATION_CONTINUOUS,
        dependent_fields: &[field::VENTILATOR_MODEL],
    },
    ConditionalRule {
        section: SectionId::Respiratory,
        trigger_field: field::OXYGEN_USE,
        trigger_value: options::YES,
        dependent_fields: &[field::OXYGEN_FLOW],
    },
    ConditionalRule {
        section: SectionId::Care,
        trigger_field: field::CAREGIVERS,
        trigger_value: options::OTHER,
        dependent_fields: &[field::CAREGIVER_OTHER],
    },
    ConditionalRule {
        section: SectionId::Care,
        trigger_field: field::HOME_CARE,
        trigger_value: options::YES,
        dependent_fields: &[field::HOME_CARE_PROVIDER],
    },
    ConditionalRule {
        section: SectionId::Services,
        trigger_field: field::FOLLOW_UP,
        trigger_value: options::OTHER,
        dependent_fields: &[field::FOLLOW_UP_OTHER],
    },
];

pub fn rules() -> &'static [ConditionalRule] {
    &RULES
}

/// Whether `field_id` must be filled given the current answers.
pub fn is_required(field_id: &str, values: &FieldValues) -> bool {
    if catalog::field(field_id).is_some_and(|def| def.statically_required) {
        return true;
    }
    RULES
        .iter()
        .any(|r| r.dependent_fields.contains(&field_id) && r.is_active(values))
}

/// Dependent fields to reset after `field_id` changes to `new_value`.
///
/// A dependent is reported when a rule triggered by `field_id` no longer
/// matches, no other rule keeps the dependent relevant, and the dependent
/// currently holds something.
pub fn on_field_changed(
    field_id: &str,
    new_value: &FieldValue,
    values: &FieldValues,
) -> Vec<&'static str> {
    let lookup = |id: &str| {
        if id == field_id {
            Some(new_value)
        } else {
            values.get(id)
        }
    };

    let mut cleared: Vec<&'static str> = Vec::new();
    for rule in RULES.iter().filter(|r| r.trigger_field == field_id) {
        if rule.is_active_with(lookup) {
            continue;
        }
        for &dependent in rule.dependent_fields {
            let kept_alive = RULES
                .iter()
                .any(|r| r.dependent_fields.contains(&dependent) && r.is_active_with(lookup));
            let holds_value = values.get(dependent).is_some_and(|v| !v.is_empty());
            if !kept_alive && holds_value && !cleared.contains(&dependent) {
                cleared.push(dependent);
            }
        }
    }
    cleared
}
