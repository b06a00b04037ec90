//! tracheo-storage
//!
//! Key-value persistence behind the draft collaborator. Thin wrappers over
//! the local filesystem, plus an in-memory store.

pub mod error;
pub mod fs;
pub mod memory;
pub mod state;
pub mod store;
