//! FILENAME: core/worker/src/handle.rs
//! EngineHandle - the caller-side facade over the worker channel.
//!
//! Cloning a handle is cheap; all clones feed the same worker, which
//! processes requests strictly in arrival order. Callers suspend on a
//! oneshot receiver until their response arrives - the interactive thread
//! never runs load/query/distinct work itself.

use crate::engine_worker::EngineWorker;
use crate::error::EngineError;
use crate::protocol::{EngineRequest, LoadSummary};
use query_engine::{EnumOptionMap, QueryInput, QueryResult};
use tokio::sync::{mpsc, oneshot};

/// Pending requests the channel buffers before callers start waiting to
/// enqueue. Responses are not affected; each travels its own oneshot.
const REQUEST_QUEUE_CAPACITY: usize = 32;

/// Clonable async facade over the engine worker.
#[derive(Clone)]
pub struct EngineHandle {
    requests: mpsc::Sender<EngineRequest>,
}

impl EngineHandle {
    /// Spawns the worker task on the current tokio runtime and returns the
    /// handle to it. The worker exits when the last handle is dropped.
    pub fn spawn() -> EngineHandle {
        let (requests, receiver) = mpsc::channel(REQUEST_QUEUE_CAPACITY);
        tokio::spawn(EngineWorker::new().run(receiver));
        EngineHandle { requests }
    }

    /// Fetches, normalizes, and installs the dataset at `source`,
    /// replacing any previous snapshot atomically. Returns the row count.
    pub async fn load(&self, source: impl Into<String>) -> Result<LoadSummary, EngineError> {
        let (reply, response) = oneshot::channel();
        self.send(EngineRequest::Load {
            source: source.into(),
            reply,
        })
        .await?;
        response.await.map_err(|_| EngineError::Disconnected)?
    }

    /// Returns the cached distinct-value map of the current snapshot.
    pub async fn distinct(&self) -> Result<EnumOptionMap, EngineError> {
        let (reply, response) = oneshot::channel();
        self.send(EngineRequest::Distinct { reply }).await?;
        response.await.map_err(|_| EngineError::Disconnected)?
    }

    /// Runs one query against the current snapshot.
    pub async fn query(&self, input: QueryInput) -> Result<QueryResult, EngineError> {
        let (reply, response) = oneshot::channel();
        self.send(EngineRequest::Query { input, reply }).await?;
        response.await.map_err(|_| EngineError::Disconnected)?
    }

    /// Parses a JSON query and runs it. Malformed input (bad shape,
    /// negative page numbers) is rejected as InvalidQuery before it
    /// reaches the worker.
    pub async fn query_json(&self, json: &str) -> Result<QueryResult, EngineError> {
        let input: QueryInput =
            serde_json::from_str(json).map_err(|e| EngineError::InvalidQuery(e.to_string()))?;
        self.query(input).await
    }

    async fn send(&self, request: EngineRequest) -> Result<(), EngineError> {
        self.requests
            .send(request)
            .await
            .map_err(|_| EngineError::Disconnected)
    }
}
