use tracheo_core::models::record::IntakeRecord;
use tracheo_storage::store::BoxFuture;

use crate::error::SubmitError;

/// Where completed registrations go. Only called from finalize.
pub trait RecordStore: Send + Sync {
    /// Persist the record and return its identifier.
    fn submit<'a>(&'a self, record: &'a IntakeRecord) -> BoxFuture<'a, Result<String, SubmitError>>;
}
