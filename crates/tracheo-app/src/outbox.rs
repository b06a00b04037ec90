use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use tracheo_core::catalog::field;
use tracheo_core::models::record::IntakeRecord;
use tracheo_core::storage_keys;
use tracheo_storage::state;
use tracheo_storage::store::{BoxFuture, KeyValueStore};
use tracheo_wizard::error::SubmitError;
use tracheo_wizard::record_store::RecordStore;

#[derive(Debug, Default, Serialize, Deserialize)]
struct SubmissionIndex {
    health_ids: BTreeSet<String>,
}

/// Local record store: each submission is written under
/// `submissions/<uuid>`, and a registration whose health ID was already
/// submitted is refused as a duplicate.
pub struct Outbox {
    store: Arc<dyn KeyValueStore>,
    // Serializes the index read-modify-write.
    lock: Mutex<()>,
}

impl Outbox {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            lock: Mutex::new(()),
        }
    }

    async fn submit_record(&self, record: &IntakeRecord) -> Result<String, SubmitError> {
        let _guard = self.lock.lock().await;

        let health_id = record
            .get(field::HEALTH_ID)
            .and_then(|v| v.as_text())
            .map(|id| id.chars().filter(|c| !c.is_whitespace()).collect::<String>())
            .ok_or_else(|| SubmitError::Rejected("record has no health ID".to_string()))?;

        let mut index: SubmissionIndex =
            state::load_state(self.store.as_ref(), storage_keys::SUBMISSION_INDEX)
                .await
                .map_err(rejected)?
                .unwrap_or_default();
        if index.health_ids.contains(&health_id) {
            return Err(SubmitError::Duplicate);
        }

        let record_id = uuid::Uuid::new_v4().to_string();
        state::save_state(
            self.store.as_ref(),
            &storage_keys::submission(&record_id),
            record,
        )
        .await
        .map_err(rejected)?;

        index.health_ids.insert(health_id);
        if let Err(e) =
            state::save_state(self.store.as_ref(), storage_keys::SUBMISSION_INDEX, &index).await
        {
            // Every stored submission must be indexed.
            let key = storage_keys::submission(&record_id);
            if let Err(cleanup) = self.store.delete(&key).await {
                tracing::warn!(key = %key, error = %cleanup, "failed to remove unindexed submission");
            }
            return Err(rejected(e));
        }

        tracing::info!(record_id = %record_id, "registration written to outbox");
        Ok(record_id)
    }
}

fn rejected(e: tracheo_storage::error::StorageError) -> SubmitError {
    SubmitError::Rejected(e.to_string())
}

impl RecordStore for Outbox {
    fn submit<'a>(&'a self, record: &'a IntakeRecord) -> BoxFuture<'a, Result<String, SubmitError>> {
        Box::pin(self.submit_record(record))
    }
}
