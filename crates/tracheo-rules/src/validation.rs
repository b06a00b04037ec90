use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use tracheo_core::catalog::field;
use tracheo_core::models::section::SectionId;
use tracheo_core::models::section_data::{CommittedSections, SectionData};

use crate::checks::dates;

/// A field-scoped validation failure. Transient: reported, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{field_id}: {message}")]
pub struct ValidationError {
    pub field_id: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field_id: field_id.into(),
            message: message.into(),
        }
    }
}

/// Read-only view of already-committed sections plus the reference date used
/// by age rules.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    committed: &'a CommittedSections,
    today: jiff::civil::Date,
    /// Sections at or after this one are hidden from rules.
    before: Option<SectionId>,
}

impl<'a> ValidationContext<'a> {
    pub fn new(committed: &'a CommittedSections, today: jiff::civil::Date) -> Self {
        Self {
            committed,
            today,
            before: None,
        }
    }

    /// Restrict the view to sections that come before `section`.
    pub fn scoped_to(self, section: SectionId) -> Self {
        Self {
            before: Some(section),
            ..self
        }
    }

    pub fn today(&self) -> jiff::civil::Date {
        self.today
    }

    pub fn section(&self, id: SectionId) -> Option<&'a SectionData> {
        if self.before.is_some_and(|limit| id >= limit) {
            return None;
        }
        self.committed.get(&id)
    }

    /// The child's birth date from section 1, if committed and parseable.
    pub fn child_birth_date(&self) -> Option<jiff::civil::Date> {
        let raw = self.section(SectionId::Child)?.text(field::BIRTH_DATE)?;
        dates::parse(raw).ok()
    }
}
