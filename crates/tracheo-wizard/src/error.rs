use thiserror::Error;

use tracheo_core::models::section::SectionId;
use tracheo_rules::error::RulesError;
use tracheo_rules::validation::ValidationError;

/// Failure reported by the record store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("a duplicate identifier already exists")]
    Duplicate,

    #[error("record store rejected the submission: {0}")]
    Rejected(String),
}

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("section {section} failed validation")]
    Validation {
        section: SectionId,
        errors: Vec<ValidationError>,
    },

    #[error("already on the first section")]
    FirstSection,

    #[error("finalize is only available on the last section (active: {0})")]
    NotOnLastSection(SectionId),

    #[error("sections not yet committed: {0:?}")]
    IncompleteSections(Vec<SectionId>),

    #[error("the registration was already submitted")]
    AlreadySubmitted,

    #[error(transparent)]
    Rules(#[from] RulesError),

    #[error("submission failed: {0}")]
    Submit(#[from] SubmitError),
}

impl WizardError {
    /// Field errors, when this is a validation failure.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Validation { errors, .. } => errors,
            _ => &[],
        }
    }
}
