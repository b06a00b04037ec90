use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::field::{FieldValue, FieldValues};
use super::section_data::CommittedSections;

/// A completed registration, handed to the record store on finalize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IntakeRecord {
    pub fields: FieldValues,
    pub completed_at: jiff::Timestamp,
}

impl IntakeRecord {
    /// Flatten every committed section into one record. Field ids are unique
    /// across the catalog, so sections never overwrite each other.
    pub fn merge(committed: &CommittedSections, completed_at: jiff::Timestamp) -> Self {
        let fields = committed
            .values()
            .flat_map(|data| data.fields.iter())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Self {
            fields,
            completed_at,
        }
    }

    pub fn get(&self, field_id: &str) -> Option<&FieldValue> {
        self.fields.get(field_id)
    }
}
