//! tracheo-app
//!
//! Runs an intake from a JSON answers file, with drafts and submissions kept
//! under the configured data directory.

pub mod config;
pub mod intake;
pub mod outbox;
