//! tracheo-wizard
//!
//! The sectioned intake wizard: navigation across the eight sections,
//! commit-on-advance, debounced draft persistence, and final submission to
//! an external record store.

pub mod config;
pub mod controller;
pub mod draft;
pub mod error;
pub mod record_store;
