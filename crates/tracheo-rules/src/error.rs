use thiserror::Error;

use tracheo_core::models::section::SectionId;

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("field '{field_id}' does not belong to section {section}")]
    FieldNotInSection {
        field_id: String,
        section: SectionId,
    },
}
