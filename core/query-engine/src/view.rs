//! FILENAME: core/query-engine/src/view.rs
//! Query View - the renderable output for the caller.
//!
//! Span metadata is plain data (booleans and integers per row); the
//! presentation layer decides how to turn it into merged cells, which keeps
//! the engine decoupled from any rendering technology.

use registry::FlatRow;
use serde::{Deserialize, Serialize};

// ============================================================================
// ENRICHED ROW
// ============================================================================

/// A FlatRow plus the merged-cell metadata for its page window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedRow {
    #[serde(flatten)]
    pub row: FlatRow,

    /// True when this row opens a new device group within the window.
    pub is_group_head: bool,

    /// Rows this device group spans within the window. Non-head rows carry
    /// 0, which signals "merged away" to the renderer.
    pub group_span: u32,

    /// Same computation keyed on the model field alone, for tables that
    /// merge device-identity sub-columns at a different granularity.
    pub identity_span: u32,
}

// ============================================================================
// QUERY RESULT
// ============================================================================

/// One page of results plus the pre-pagination match count, so the caller
/// can render pagination controls without a second query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    pub rows: Vec<EnrichedRow>,
    pub total: usize,
}
