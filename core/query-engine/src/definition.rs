//! FILENAME: core/query-engine/src/definition.rs
//! Query Definition - the serializable request shape.
//!
//! These structures DESCRIBE one query. They are designed to be:
//! - Deserialized from the caller's JSON unchanged (camelCase)
//! - Sent across the worker messaging boundary
//! - Immutable snapshots of caller intent
//!
//! Page numbers are unsigned on purpose: a negative offset or limit is
//! malformed input and gets rejected during deserialization, before the
//! engine ever sees it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// QUERY INPUT
// ============================================================================

/// One query request against the current snapshot.
///
/// Filters are conjunctive across attributes and disjunctive within one
/// attribute's accepted-value set. An attribute absent from the map - or
/// present with an empty set - imposes no constraint, so an accidentally
/// cleared dropdown selection never hides the whole table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryInput {
    /// Accepted values per attribute wire name. Boolean attributes use the
    /// literal values "true" / "false". Unknown names are ignored, which
    /// tolerates schema skew between UI build and engine build.
    pub filters: HashMap<String, Vec<String>>,

    /// Optional single-key sort. None preserves normalized load order.
    pub sort: Option<SortSpec>,

    /// Page window applied after filter + sort.
    pub page: PageWindow,
}

// ============================================================================
// SORT
// ============================================================================

/// Sort key and direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortSpec {
    /// Attribute wire name to order by.
    pub key: String,

    #[serde(default)]
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Ascending
    }
}

// ============================================================================
// PAGE WINDOW
// ============================================================================

/// Half-open row window `[offset, offset + limit)`.
///
/// An out-of-range window (offset past the result, or limit of zero) is an
/// empty page with the correct total, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageWindow {
    pub offset: usize,
    pub limit: usize,
}

impl Default for PageWindow {
    /// The whole result set - callers that omit `page` get every row.
    fn default() -> Self {
        PageWindow {
            offset: 0,
            limit: usize::MAX,
        }
    }
}
