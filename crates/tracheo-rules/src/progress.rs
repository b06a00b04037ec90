use serde::{Deserialize, Serialize};
use ts_rs::TS;

use tracheo_core::catalog;
use tracheo_core::models::field::{self, FieldValues};
use tracheo_core::models::section::SectionId;

use crate::conditional;

/// "N of M required fields filled" for one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Completion {
    pub required: u32,
    pub filled: u32,
}

impl Completion {
    pub fn is_complete(&self) -> bool {
        self.filled == self.required
    }

    /// Share of required fields filled, in `0.0..=1.0`. A section with no
    /// required fields counts as complete.
    pub fn ratio(&self) -> f64 {
        if self.required == 0 {
            1.0
        } else {
            f64::from(self.filled) / f64::from(self.required)
        }
    }
}

/// Count the section's currently-required fields and how many of them hold
/// a value. Requiredness comes from the catalog and the conditional rules.
pub fn completion(section: SectionId, values: &FieldValues) -> Completion {
    catalog::section_fields(section)
        .filter(|def| conditional::is_required(def.id, values))
        .fold(Completion::default(), |mut acc, def| {
            acc.required += 1;
            if field::is_filled(values, def.id) {
                acc.filled += 1;
            }
            acc
        })
}
