//! FILENAME: core/query-engine/src/spans.rs
//! Group-Span Calculator - merged-cell metadata for a page window.
//!
//! Works on the already-paginated window only: group boundaries are always
//! re-derived per page, so a device split across a page break re-opens as a
//! fresh head on the next page. Cross-page continuity is intentionally not
//! tracked.

use crate::view::EnrichedRow;
use registry::FlatRow;

/// Annotates an ordered row window with group metadata.
///
/// A row heads a group iff its full device identity differs from the
/// previous row's (the first row of the window always heads). The head
/// carries the run length; the other rows of the run carry 0. The identity
/// span runs the same scan keyed on the model field alone.
///
/// Invariant: for a maximal run of N identity-equal rows, exactly one head
/// with span N, N-1 rows with span 0, and the spans of the run sum to N.
pub fn annotate(rows: Vec<FlatRow>) -> Vec<EnrichedRow> {
    let group_spans = run_lengths(&rows, |a, b| a.same_device(b));
    let identity_spans = run_lengths(&rows, |a, b| a.device_model == b.device_model);

    rows.into_iter()
        .enumerate()
        .map(|(i, row)| EnrichedRow {
            row,
            is_group_head: group_spans[i] > 0,
            group_span: group_spans[i],
            identity_span: identity_spans[i],
        })
        .collect()
}

/// Run-length encodes the window under an equivalence test: the first row
/// of each maximal run gets the run length, every other row gets 0.
fn run_lengths<F>(rows: &[FlatRow], same: F) -> Vec<u32>
where
    F: Fn(&FlatRow, &FlatRow) -> bool,
{
    let mut spans = vec![0u32; rows.len()];
    let mut start = 0;
    for i in 1..=rows.len() {
        if i == rows.len() || !same(&rows[i], &rows[i - 1]) {
            spans[start] = (i - start) as u32;
            start = i;
        }
    }
    spans
}
