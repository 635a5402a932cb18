//! FILENAME: core/query-engine/src/engine.rs
//! Query Engine - filter, sort, and paginate against the row store.
//!
//! Algorithm:
//! 1. Compile the filter map into per-attribute accepted-value sets
//! 2. Single pass over the snapshot collecting matching rows
//! 3. If a sort key is given, reorder contiguous device groups as units
//! 4. Slice the page window and annotate it with span metadata
//!
//! Sorting moves whole device groups, comparing each group by its first
//! row's key value with ties kept in normalized order. That is what keeps a
//! multi-row device contiguous even when the sort key is a bridge field
//! whose value differs between the device's own rows.

use crate::definition::{PageWindow, QueryInput, SortDirection, SortSpec};
use crate::spans::annotate;
use crate::view::QueryResult;
use registry::{attributes, AttrValue, FlatRow};
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

// ============================================================================
// PUBLIC API
// ============================================================================

/// Answers one query against an immutable row snapshot.
///
/// `total` counts every match before pagination; the returned rows are the
/// requested window after filter + sort, annotated for merged-cell
/// rendering. Queries never mutate or rebuild anything on the snapshot.
pub fn run_query(rows: &[FlatRow], input: &QueryInput) -> QueryResult {
    let filters = compile_filters(input);

    let matched: Vec<&FlatRow> = if filters.is_empty() {
        rows.iter().collect()
    } else {
        rows.iter().filter(|row| row_matches(row, &filters)).collect()
    };

    let total = matched.len();

    let matched = match &input.sort {
        Some(sort) if is_known_attribute(&sort.key) => sort_device_groups(matched, sort),
        _ => matched,
    };

    let window = page_slice(&matched, &input.page);
    let page_rows: Vec<FlatRow> = window.iter().map(|row| (*row).clone()).collect();

    QueryResult {
        rows: annotate(page_rows),
        total,
    }
}

// ============================================================================
// FILTERING
// ============================================================================

/// A filter constraint ready for per-row evaluation.
struct CompiledFilter<'a> {
    attribute: &'a str,
    accepted: FxHashSet<&'a str>,
}

/// Drops unknown attribute names (schema-skew tolerance) and empty value
/// sets (an empty dropdown selection means "no constraint", never
/// "match nothing").
fn compile_filters(input: &QueryInput) -> Vec<CompiledFilter<'_>> {
    input
        .filters
        .iter()
        .filter(|(name, values)| !values.is_empty() && is_known_attribute(name.as_str()))
        .map(|(name, values)| CompiledFilter {
            attribute: name.as_str(),
            accepted: values.iter().map(|v| v.as_str()).collect(),
        })
        .collect()
}

/// A row matches when every compiled constraint accepts it. List-valued
/// attributes match when at least one element is accepted; booleans match
/// against the "true" / "false" literals.
fn row_matches(row: &FlatRow, filters: &[CompiledFilter<'_>]) -> bool {
    filters.iter().all(|filter| {
        match row.attribute(filter.attribute) {
            Some(AttrValue::Bool(value)) => {
                filter.accepted.contains(if value { "true" } else { "false" })
            }
            Some(AttrValue::Text(value)) => filter.accepted.contains(value),
            Some(AttrValue::List(items)) => {
                items.iter().any(|item| filter.accepted.contains(item.as_str()))
            }
            // Unreachable after compile_filters, but stay lenient
            None => true,
        }
    })
}

fn is_known_attribute(name: &str) -> bool {
    attributes().iter().any(|spec| spec.name == name)
}

// ============================================================================
// SORTING
// ============================================================================

/// Reorders contiguous device groups by the sort key, stable within ties.
///
/// The input arrives in normalized order (device groups contiguous), so a
/// single scan finds the group boundaries. Each group is compared by its
/// first row's value for the key; rows inside a group never reorder.
fn sort_device_groups<'a>(matched: Vec<&'a FlatRow>, sort: &SortSpec) -> Vec<&'a FlatRow> {
    let mut runs: Vec<(usize, usize)> = Vec::new();
    let mut start = 0;
    for i in 1..=matched.len() {
        if i == matched.len() || !matched[i].same_device(matched[i - 1]) {
            runs.push((start, i - start));
            start = i;
        }
    }

    runs.sort_by(|&(a, _), &(b, _)| {
        let ordering = compare_attr(
            matched[a].attribute(&sort.key),
            matched[b].attribute(&sort.key),
        );
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    runs.iter()
        .flat_map(|&(run_start, len)| matched[run_start..run_start + len].iter().copied())
        .collect()
}

/// Total order across attribute values, in the spirit of the cache value
/// comparison the table engines use: missing first, then booleans
/// (false before true), then text (lexicographic), then lists
/// (element-wise lexicographic).
fn compare_attr(a: Option<AttrValue<'_>>, b: Option<AttrValue<'_>>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(va), Some(vb)) => match (va, vb) {
            (AttrValue::Bool(x), AttrValue::Bool(y)) => x.cmp(&y),
            (AttrValue::Bool(_), _) => Ordering::Less,
            (_, AttrValue::Bool(_)) => Ordering::Greater,
            (AttrValue::Text(x), AttrValue::Text(y)) => x.cmp(y),
            (AttrValue::Text(_), _) => Ordering::Less,
            (_, AttrValue::Text(_)) => Ordering::Greater,
            (AttrValue::List(x), AttrValue::List(y)) => x.cmp(y),
        },
    }
}

// ============================================================================
// PAGINATION
// ============================================================================

/// Half-open window into the matched sequence. Out-of-range requests are
/// empty pages, never errors.
fn page_slice<'a>(matched: &'a [&'a FlatRow], page: &PageWindow) -> &'a [&'a FlatRow] {
    if page.limit == 0 || page.offset >= matched.len() {
        return &[];
    }
    let end = page.offset.saturating_add(page.limit).min(matched.len());
    &matched[page.offset..end]
}

// ============================================================================
// TESTS
// ============================================================================
