//! FILENAME: core/query-engine/src/options.rs
//! Distinct-Value Indexer - option lists for the filter dropdowns.
//!
//! One pass over rows x catalog attributes, run once per dataset load and
//! cached in the snapshot. Queries never trigger a rebuild.

use registry::{attributes, AttrValue, FlatRow};
use std::collections::{BTreeMap, BTreeSet};

/// Per-attribute sorted set of distinct observed values.
/// BTreeMap so the map itself iterates in a stable attribute order.
pub type EnumOptionMap = BTreeMap<String, Vec<String>>;

/// Scans normalized rows once and collects, for every indexed attribute,
/// the deduplicated, lexicographically sorted set of non-empty values.
///
/// List-valued attributes contribute each element of each list. Boolean
/// attributes contribute the literal "true" / "false" values actually seen,
/// so the option list reflects observation rather than an assumed ordering.
pub fn build_options(rows: &[FlatRow]) -> EnumOptionMap {
    let indexed: Vec<_> = attributes().iter().filter(|spec| spec.indexed).collect();

    let mut sets: BTreeMap<&'static str, BTreeSet<String>> = BTreeMap::new();
    for spec in &indexed {
        sets.insert(spec.name, BTreeSet::new());
    }

    for row in rows {
        for spec in &indexed {
            // Catalog entries always resolve; the catalog test pins that.
            let Some(value) = row.attribute(spec.name) else {
                continue;
            };
            let set = sets.entry(spec.name).or_default();
            match value {
                AttrValue::Bool(b) => {
                    set.insert(if b { "true" } else { "false" }.to_string());
                }
                AttrValue::Text(text) => {
                    if !text.is_empty() {
                        set.insert(text.to_string());
                    }
                }
                AttrValue::List(items) => {
                    for item in items {
                        if !item.is_empty() {
                            set.insert(item.clone());
                        }
                    }
                }
            }
        }
    }

    sets.into_iter()
        .map(|(name, set)| (name.to_string(), set.into_iter().collect()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(model: &str, brand: &str, caps: &[&str]) -> FlatRow {
        let mut row = FlatRow::default();
        row.device_model = model.to_string();
        row.device_brand = brand.to_string();
        row.ewelink_capabilities = caps.iter().map(|c| c.to_string()).collect();
        row
    }

    #[test]
    fn test_distinct_values_are_deduplicated_and_sorted() {
        let rows = vec![
            row("M1", "SONOFF", &["rssi", "power"]),
            row("M2", "eWeLink", &["power"]),
            row("M3", "SONOFF", &[]),
        ];
        let options = build_options(&rows);

        assert_eq!(
            options["deviceBrand"],
            vec!["SONOFF".to_string(), "eWeLink".to_string()]
        );
        // List attributes contribute elements, not whole lists
        assert_eq!(
            options["ewelinkCapabilities"],
            vec!["power".to_string(), "rssi".to_string()]
        );
    }

    #[test]
    fn test_empty_values_are_skipped() {
        let rows = vec![row("M1", "", &["", "power"])];
        let options = build_options(&rows);
        assert!(options["deviceBrand"].is_empty());
        assert_eq!(options["ewelinkCapabilities"], vec!["power".to_string()]);
    }

    #[test]
    fn test_booleans_contribute_observed_literals() {
        let mut supported = row("M1", "B", &[]);
        supported.matter_supported = true;
        let unsupported = row("M2", "B", &[]);

        let both = build_options(&[supported.clone(), unsupported.clone()]);
        assert_eq!(both["matterSupported"].len(), 2);
        assert!(both["matterSupported"].contains(&"true".to_string()));
        assert!(both["matterSupported"].contains(&"false".to_string()));

        let only_true = build_options(&[supported]);
        assert_eq!(only_true["matterSupported"], vec!["true".to_string()]);
    }

    #[test]
    fn test_model_and_notes_have_no_option_lists() {
        let mut r = row("M1", "B", &[]);
        r.apple_notes = vec!["pairing quirk".to_string()];
        let options = build_options(&[r]);
        assert!(!options.contains_key("deviceModel"));
        assert!(!options.contains_key("appleNotes"));
    }

    #[test]
    fn test_every_indexed_attribute_has_an_entry() {
        let options = build_options(&[]);
        for spec in attributes() {
            assert_eq!(options.contains_key(spec.name), spec.indexed, "{}", spec.name);
        }
    }
}
