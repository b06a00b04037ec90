use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One page of the intake wizard. The variant order is the wizard order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SectionId {
    Child,
    Birth,
    Guardian,
    Address,
    Tracheostomy,
    Respiratory,
    Care,
    Services,
}

impl SectionId {
    pub const ALL: [SectionId; 8] = [
        SectionId::Child,
        SectionId::Birth,
        SectionId::Guardian,
        SectionId::Address,
        SectionId::Tracheostomy,
        SectionId::Respiratory,
        SectionId::Care,
        SectionId::Services,
    ];

    pub const FIRST: SectionId = SectionId::Child;
    pub const LAST: SectionId = SectionId::Services;

    /// 1-based position in the wizard.
    pub fn ordinal(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_ordinal(ordinal: u8) -> Result<Self, CoreError> {
        match ordinal {
            1..=8 => Ok(Self::ALL[usize::from(ordinal - 1)]),
            other => Err(CoreError::InvalidSectionOrdinal(other)),
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::ALL.get(usize::from(self.ordinal())).copied()
    }

    pub fn prev(self) -> Option<Self> {
        match self.ordinal() {
            1 => None,
            n => Some(Self::ALL[usize::from(n - 2)]),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Child => "child",
            SectionId::Birth => "birth",
            SectionId::Guardian => "guardian",
            SectionId::Address => "address",
            SectionId::Tracheostomy => "tracheostomy",
            SectionId::Respiratory => "respiratory",
            SectionId::Care => "care",
            SectionId::Services => "services",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.ordinal(), self.as_str())
    }
}

/// Static description of a wizard page.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub id: SectionId,
    pub title: &'static str,
    /// Field ids in display order.
    pub field_names: &'static [&'static str],
}

impl Section {
    pub fn contains(&self, field_id: &str) -> bool {
        self.field_names.contains(&field_id)
    }
}
