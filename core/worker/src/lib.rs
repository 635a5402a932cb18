//! FILENAME: core/worker/src/lib.rs
//! PURPOSE: Engine facade / messaging boundary for the compatibility matrix.
//! CONTEXT: The interactive surface talks to the engine exclusively through
//! EngineHandle; all load/query/distinct work runs on a dedicated worker
//! task behind an mpsc request channel with oneshot replies.

mod engine_worker;
mod error;
mod handle;
mod protocol;

pub use error::EngineError;
pub use handle::EngineHandle;
pub use protocol::LoadSummary;

// Re-export the request/response vocabulary so boundary consumers need
// only this crate.
pub use query_engine::{
    EnrichedRow, EnumOptionMap, PageWindow, QueryInput, QueryResult, SortDirection, SortSpec,
};
pub use registry::{FlatRow, GroupKey};
