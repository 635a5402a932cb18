//! FILENAME: core/worker/src/protocol.rs
//! The request/response protocol crossing the worker boundary.
//!
//! Each request carries its own reply sender, so one request correlates to
//! exactly one response - no streaming, no partial results. There is no
//! cancellation message: a superseded query still completes and the caller
//! discards the stale response.

use crate::error::EngineError;
use query_engine::{EnumOptionMap, QueryInput, QueryResult};
use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

/// Result of a successful `load`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadSummary {
    /// Number of normalized rows in the installed snapshot.
    pub count: usize,
}

/// One message on the worker's request channel.
pub(crate) enum EngineRequest {
    Load {
        /// Dataset location: HTTP(S) URL or filesystem path.
        source: String,
        reply: oneshot::Sender<Result<LoadSummary, EngineError>>,
    },
    Distinct {
        reply: oneshot::Sender<Result<EnumOptionMap, EngineError>>,
    },
    Query {
        input: QueryInput,
        reply: oneshot::Sender<Result<QueryResult, EngineError>>,
    },
}
