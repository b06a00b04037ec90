use serde::{de::DeserializeOwned, Serialize};

use crate::error::StorageError;
use crate::store::KeyValueStore;

/// Load a JSON value stored under `key`.
pub async fn load_state<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.read(key).await? {
        Some(body) => Ok(Some(serde_json::from_slice(&body)?)),
        None => Ok(None),
    }
}

/// Save a value as pretty JSON under `key`.
pub async fn save_state<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    store.write(key, body).await
}
