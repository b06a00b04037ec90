//! Storage key conventions.
//!
//! Pure string functions with no I/O. These define the logical keys handed to
//! the draft and submission collaborators.

/// The single draft slot for the tracheostomy intake wizard.
pub const INTAKE_DRAFT: &str = "drafts/tracheostomy-intake";

pub const SUBMISSIONS_PREFIX: &str = "submissions/";

/// Health IDs already submitted, for duplicate detection.
pub const SUBMISSION_INDEX: &str = "submissions/index";

pub fn submission(id: &str) -> String {
    format!("{SUBMISSIONS_PREFIX}{id}")
}
