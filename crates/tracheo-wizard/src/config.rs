use std::time::Duration;

use serde::{Deserialize, Serialize};

use tracheo_core::storage_keys;

/// What a draft captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftScope {
    /// Only the active section's buffer. On restore the wizard resumes at
    /// section 1 with those fields loaded, and earlier commits are lost.
    #[default]
    ActiveSection,
    /// The active buffer plus every committed section. On restore the wizard
    /// resumes where it left off.
    WholeWizard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    pub draft_key: String,
    pub draft_debounce_ms: u64,
    /// Drafts older than this are discarded on load.
    pub draft_max_age_days: u32,
    pub draft_scope: DraftScope,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            draft_key: storage_keys::INTAKE_DRAFT.to_string(),
            draft_debounce_ms: 800,
            draft_max_age_days: 30,
            draft_scope: DraftScope::default(),
        }
    }
}

impl WizardConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.draft_debounce_ms)
    }

    pub fn max_draft_age(&self) -> jiff::SignedDuration {
        jiff::SignedDuration::from_hours(i64::from(self.draft_max_age_days) * 24)
    }
}
