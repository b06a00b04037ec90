//! tracheo-core
//!
//! Pure domain types, the static field catalog, and storage key conventions.
//! No I/O. This is the shared vocabulary of the tracheostomy intake wizard.

pub mod catalog;
pub mod error;
pub mod models;
pub mod storage_keys;
