use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("invalid section ordinal: {0} (expected 1..=8)")]
    InvalidSectionOrdinal(u8),
}
