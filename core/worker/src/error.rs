//! FILENAME: core/worker/src/error.rs

use thiserror::Error;

/// Failure modes of the messaging boundary. Every failure is reported as
/// the rejected response of the request that caused it; none of them
/// corrupts or discards an installed snapshot.
#[derive(Error, Debug)]
pub enum EngineError {
    /// `distinct` or `query` arrived before any successful `load`.
    #[error("no dataset has been loaded")]
    NotLoaded,

    /// The request itself was malformed (e.g., a negative page limit in a
    /// JSON query). Unknown attribute names are NOT this error - they are
    /// ignored to tolerate schema skew between UI and engine builds.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("load failed: {0}")]
    Load(#[from] persistence::LoadError),

    /// The worker task is gone (its channel closed). Only reachable when
    /// the runtime is shutting down underneath the caller.
    #[error("engine worker terminated")]
    Disconnected,
}
