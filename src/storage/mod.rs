//! Durable local storage for client-owned state.
//!
//! # Modules
//!
//! - `backend`: key-value storage trait
//! - `json`: JSON file implementation with atomic writes

pub mod backend;
pub mod json;

pub use backend::KeyValueStore;
pub use json::{JsonFileStore, CORRUPT_SUFFIX, STATE_FILE_NAME};
