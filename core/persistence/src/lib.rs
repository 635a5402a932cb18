//! FILENAME: core/persistence/src/lib.rs
//! Dataset Persistence Module
//!
//! Handles fetching and parsing the published compatibility dataset: a JSON
//! array of raw records, reachable either over HTTP(S) or on the local
//! filesystem. The source location is the only externally configurable
//! parameter of the engine.

mod error;
mod source;

pub use error::LoadError;
pub use source::{load_dataset, load_rows};
