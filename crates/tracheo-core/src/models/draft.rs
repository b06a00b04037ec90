use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::field::FieldValues;
use super::section::SectionId;
use super::section_data::CommittedSections;

/// Current draft layout. Bump when the stored shape changes; drafts written
/// under another version are discarded on load.
pub const DRAFT_SCHEMA_VERSION: u32 = 1;

/// Best-effort snapshot of in-progress input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DraftRecord {
    #[serde(default)]
    pub schema_version: u32,
    /// The section that was active when the draft was written.
    pub section: SectionId,
    /// The active section's field buffer.
    pub captured_fields: FieldValues,
    /// Committed sections. Only populated under whole-wizard draft scope.
    #[serde(default, skip_serializing_if = "CommittedSections::is_empty")]
    pub committed_sections: CommittedSections,
    pub saved_at: jiff::Timestamp,
}

impl DraftRecord {
    pub fn new(section: SectionId, captured_fields: FieldValues, saved_at: jiff::Timestamp) -> Self {
        Self {
            schema_version: DRAFT_SCHEMA_VERSION,
            section,
            captured_fields,
            committed_sections: CommittedSections::new(),
            saved_at,
        }
    }

    pub fn with_committed(mut self, committed: CommittedSections) -> Self {
        self.committed_sections = committed;
        self
    }

    /// Older than `max_age` at `now`, or written under another layout.
    pub fn is_stale(&self, now: jiff::Timestamp, max_age: jiff::SignedDuration) -> bool {
        self.schema_version != DRAFT_SCHEMA_VERSION || now.duration_since(self.saved_at) > max_age
    }
}
