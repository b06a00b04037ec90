use std::future::Future;
use std::pin::Pin;

use crate::error::StorageError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Blob storage addressed by a logical key.
pub trait KeyValueStore: Send + Sync {
    /// Create or overwrite the blob at `key`.
    fn write<'a>(&'a self, key: &'a str, blob: Vec<u8>) -> BoxFuture<'a, Result<(), StorageError>>;

    /// None = nothing stored under `key`.
    fn read<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<Option<Vec<u8>>, StorageError>>;

    /// Remove the blob. Deleting a missing key is not an error.
    fn delete<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<(), StorageError>>;
}
