//! FILENAME: core/worker/src/engine_worker.rs
//! The worker loop - owns the snapshot, processes requests in arrival order.
//!
//! The loop runs on its own task with no internal parallelism, so requests
//! can never observe intermediate state. The snapshot is built fully off to
//! the side during a load and published with a single Arc swap: readers see
//! whole generations only, and a failed load leaves the previous generation
//! installed.

use crate::error::EngineError;
use crate::protocol::{EngineRequest, LoadSummary};
use query_engine::{build_options, run_query, EnumOptionMap, QueryInput, QueryResult};
use registry::FlatRow;
use std::sync::Arc;
use tokio::sync::mpsc;

/// One fully built dataset generation: the immutable row store plus its
/// cached distinct-value map. Never mutated after construction.
struct Snapshot {
    rows: Vec<FlatRow>,
    options: EnumOptionMap,
}

pub(crate) struct EngineWorker {
    snapshot: Option<Arc<Snapshot>>,
}

impl EngineWorker {
    pub(crate) fn new() -> Self {
        EngineWorker { snapshot: None }
    }

    /// Drains the request channel until every handle is dropped.
    pub(crate) async fn run(mut self, mut requests: mpsc::Receiver<EngineRequest>) {
        while let Some(request) = requests.recv().await {
            match request {
                EngineRequest::Load { source, reply } => {
                    let _ = reply.send(self.handle_load(&source).await);
                }
                EngineRequest::Distinct { reply } => {
                    let _ = reply.send(self.handle_distinct());
                }
                EngineRequest::Query { input, reply } => {
                    let _ = reply.send(self.handle_query(&input));
                }
            }
        }
        log::debug!("engine worker request channel closed, exiting");
    }

    async fn handle_load(&mut self, source: &str) -> Result<LoadSummary, EngineError> {
        log::info!("loading dataset from {}", source);
        let rows = persistence::load_rows(source).await?;
        let options = build_options(&rows);
        let count = rows.len();

        // Publish the new generation in one swap; the old Arc stays alive
        // for any caller still holding results derived from it.
        self.snapshot = Some(Arc::new(Snapshot { rows, options }));
        log::info!("dataset loaded: {} rows", count);

        Ok(LoadSummary { count })
    }

    fn handle_distinct(&self) -> Result<EnumOptionMap, EngineError> {
        let snapshot = self.snapshot.as_ref().ok_or(EngineError::NotLoaded)?;
        Ok(snapshot.options.clone())
    }

    fn handle_query(&self, input: &QueryInput) -> Result<QueryResult, EngineError> {
        let snapshot = self.snapshot.as_ref().ok_or(EngineError::NotLoaded)?;
        let result = run_query(&snapshot.rows, input);
        log::debug!(
            "query matched {} of {} rows ({} in page)",
            result.total,
            snapshot.rows.len(),
            result.rows.len()
        );
        Ok(result)
    }
}
