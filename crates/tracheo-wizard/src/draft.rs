use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use tracheo_core::models::draft::DraftRecord;
use tracheo_core::models::field::FieldValues;
use tracheo_core::models::section::SectionId;
use tracheo_core::models::section_data::CommittedSections;
use tracheo_storage::error::StorageError;
use tracheo_storage::state;
use tracheo_storage::store::KeyValueStore;

use crate::config::{DraftScope, WizardConfig};

/// Debounced, best-effort draft persistence.
///
/// Every [`save`](DraftStore::save) cancels the write still waiting on its
/// debounce and schedules a new one, so a burst of edits produces a single
/// write. Failures are logged and otherwise ignored: a lost draft never
/// blocks the wizard.
pub struct DraftStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
    debounce: Duration,
    max_age: jiff::SignedDuration,
    scope: DraftScope,
    pending: Option<JoinHandle<()>>,
}

impl DraftStore {
    pub fn new(store: Arc<dyn KeyValueStore>, config: &WizardConfig) -> Self {
        Self {
            store,
            key: config.draft_key.clone(),
            debounce: config.debounce(),
            max_age: config.max_draft_age(),
            scope: config.draft_scope,
            pending: None,
        }
    }

    pub fn scope(&self) -> DraftScope {
        self.scope
    }

    /// Whether a write is scheduled and has not finished yet.
    pub fn has_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Schedule a write of the active section's buffer, replacing any write
    /// still waiting. `committed` is only captured under whole-wizard scope.
    pub fn save(&mut self, section: SectionId, values: &FieldValues, committed: &CommittedSections) {
        self.cancel();

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!("no async runtime, draft not saved");
            return;
        };

        let store = Arc::clone(&self.store);
        let key = self.key.clone();
        let debounce = self.debounce;
        let values = values.clone();
        let committed = match self.scope {
            DraftScope::ActiveSection => CommittedSections::new(),
            DraftScope::WholeWizard => committed.clone(),
        };

        self.pending = Some(runtime.spawn(async move {
            tokio::time::sleep(debounce).await;
            let record =
                DraftRecord::new(section, values, jiff::Timestamp::now()).with_committed(committed);
            match state::save_state(store.as_ref(), &key, &record).await {
                Ok(()) => tracing::debug!(key = %key, section = %section, "draft saved"),
                Err(e) => tracing::warn!(key = %key, error = %e, "failed to save draft"),
            }
        }));
    }

    /// Drop the scheduled write, if any, without running it.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Wait for the scheduled write, if any, to run.
    pub async fn flush(&mut self) {
        if let Some(handle) = self.pending.take()
            && let Err(e) = handle.await
            && !e.is_cancelled()
        {
            tracing::warn!(error = %e, "draft write task failed");
        }
    }

    /// Read the stored draft. Unreadable or stale drafts are deleted and
    /// treated as absent.
    pub async fn load(&self) -> Option<DraftRecord> {
        let record = match state::load_state::<DraftRecord>(self.store.as_ref(), &self.key).await {
            Ok(Some(record)) => record,
            Ok(None) => return None,
            Err(StorageError::Serialization(e)) => {
                tracing::warn!(key = %self.key, error = %e, "discarding unreadable draft");
                self.discard().await;
                return None;
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to read draft");
                return None;
            }
        };

        if record.is_stale(jiff::Timestamp::now(), self.max_age) {
            tracing::info!(
                key = %self.key,
                saved_at = %record.saved_at,
                schema_version = record.schema_version,
                "discarding stale draft"
            );
            self.discard().await;
            return None;
        }

        tracing::debug!(key = %self.key, section = %record.section, "draft loaded");
        Some(record)
    }

    /// Cancel any scheduled write and delete the stored draft.
    pub async fn clear(&mut self) {
        self.cancel();
        self.discard().await;
    }

    async fn discard(&self) {
        if let Err(e) = self.store.delete(&self.key).await {
            tracing::warn!(key = %self.key, error = %e, "failed to delete draft");
        }
    }
}

impl Drop for DraftStore {
    fn drop(&mut self) {
        self.cancel();
    }
}
