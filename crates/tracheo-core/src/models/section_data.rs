use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::field::{FieldValue, FieldValues};
use super::section::SectionId;

/// Validated values of one section.
///
/// Only produced by a successful section validation; never edited in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SectionData {
    pub fields: FieldValues,
}

impl SectionData {
    pub fn new(fields: FieldValues) -> Self {
        Self { fields }
    }

    pub fn get(&self, field_id: &str) -> Option<&FieldValue> {
        self.fields.get(field_id)
    }

    /// Trimmed text of a scalar field, if present and non-empty.
    pub fn text(&self, field_id: &str) -> Option<&str> {
        self.get(field_id)
            .and_then(FieldValue::as_text)
            .filter(|s| !s.is_empty())
    }
}

/// Committed sections, keyed in wizard order.
pub type CommittedSections = BTreeMap<SectionId, SectionData>;
