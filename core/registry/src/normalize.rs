//! FILENAME: core/registry/src/normalize.rs
//! Record normalization - raw nested records into flat queryable rows.
//!
//! Emits one FlatRow per bridge-protocol mapping; a record with no mappings
//! still emits exactly one row so no device ever disappears from the table.
//! Output order is the input order, with all rows of one device contiguous.

use crate::record::{MatterEntry, RawRecord};
use crate::row::FlatRow;
use thiserror::Error;

/// Normalization failure. Surfaced to callers as part of the load failure;
/// a dataset that trips this installs no snapshot.
#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("record {index} is missing the required deviceModel field")]
    MissingDeviceModel { index: usize },
}

/// Flattens raw records into queryable rows.
///
/// Never drops a record: a device with zero ecosystem blocks becomes a
/// single row with identity fields populated and ecosystem fields
/// empty/false. Fails when a record has no device model - that field is
/// the group identity every downstream component keys on.
pub fn normalize(records: &[RawRecord]) -> Result<Vec<FlatRow>, NormalizeError> {
    // Most records carry one mapping; reserve for the common case.
    let mut rows = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        if record.device_model.trim().is_empty() {
            return Err(NormalizeError::MissingDeviceModel { index });
        }

        if record.matter.is_empty() {
            rows.push(base_row(record));
        } else {
            for entry in &record.matter {
                let mut row = base_row(record);
                apply_matter_entry(&mut row, entry);
                rows.push(row);
            }
        }
    }

    Ok(rows)
}

/// Builds a row carrying the identity, cloud-service, and local-hub fields,
/// which are duplicated across every variant row of the device.
fn base_row(record: &RawRecord) -> FlatRow {
    let mut row = FlatRow::default();

    row.device_model = record.device_model.clone();
    row.device_type = record.device_type.clone();
    row.device_brand = record.device_brand.clone();
    row.device_category = record.device_category.clone();

    if let Some(ewelink) = &record.ewelink {
        row.ewelink_supported = ewelink.supported;
        row.ewelink_capabilities = ewelink.capabilities.clone();
    }

    if let Some(home_assistant) = &record.home_assistant {
        row.home_assistant_supported = home_assistant.supported;
        row.home_assistant_entities = home_assistant.entities.clone();
    }

    row
}

fn apply_matter_entry(row: &mut FlatRow, entry: &MatterEntry) {
    row.matter_supported = true;
    row.matter_device_type = entry.device_type.clone();
    row.matter_supported_clusters = entry.supported_clusters.clone();
    row.matter_unsupported_clusters = entry.unsupported_clusters.clone();
    row.matter_protocol_version = entry.protocol_version.clone();
    row.apple_supported = entry.apple.supported.clone();
    row.apple_notes = entry.apple.notes.clone();
    row.google_supported = entry.google.supported.clone();
    row.google_notes = entry.google.notes.clone();
    row.smart_things_supported = entry.smart_things.supported.clone();
    row.smart_things_notes = entry.smart_things.notes.clone();
    row.alexa_supported = entry.alexa.supported.clone();
    row.alexa_notes = entry.alexa.notes.clone();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{CloudSupport, EwelinkBlock, HomeAssistantBlock};

    fn record(model: &str) -> RawRecord {
        let mut record = RawRecord::default();
        record.device_model = model.to_string();
        record
    }

    fn matter_entry(device_type: &str) -> MatterEntry {
        let mut entry = MatterEntry::default();
        entry.device_type = device_type.to_string();
        entry
    }

    #[test]
    fn test_record_without_blocks_emits_one_row() {
        let rows = normalize(&[record("BASICR4")]).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].device_model, "BASICR4");
        assert!(!rows[0].matter_supported);
        assert!(!rows[0].ewelink_supported);
        assert!(rows[0].matter_device_type.is_empty());
    }

    #[test]
    fn test_record_with_two_mappings_emits_two_rows() {
        let mut r = record("NSPanel Pro");
        r.ewelink = Some(EwelinkBlock {
            supported: true,
            capabilities: vec!["power".to_string()],
        });
        r.matter = vec![matter_entry("On/Off Light"), matter_entry("Dimmable Light")];

        let rows = normalize(&[r]).unwrap();
        assert_eq!(rows.len(), 2);
        // Bridge fields vary per row
        assert_eq!(rows[0].matter_device_type, "On/Off Light");
        assert_eq!(rows[1].matter_device_type, "Dimmable Light");
        // Cloud fields are duplicated onto both variant rows
        for row in &rows {
            assert!(row.ewelink_supported);
            assert_eq!(row.ewelink_capabilities, vec!["power".to_string()]);
            assert!(row.matter_supported);
        }
    }

    #[test]
    fn test_identity_fields_equal_input_on_every_row() {
        let mut r = record("TRVZB");
        r.device_type = "Valve".to_string();
        r.device_brand = "SONOFF".to_string();
        r.device_category = "Thermostat".to_string();
        r.matter = vec![matter_entry("Thermostat"), matter_entry("Sensor")];

        let rows = normalize(&[r.clone()]).unwrap();
        for row in &rows {
            assert_eq!(row.device_model, r.device_model);
            assert_eq!(row.device_type, r.device_type);
            assert_eq!(row.device_brand, r.device_brand);
            assert_eq!(row.device_category, r.device_category);
        }
    }

    #[test]
    fn test_missing_model_is_an_error() {
        let records = vec![record("OK-1"), record("  ")];
        let err = normalize(&records).unwrap_err();
        match err {
            NormalizeError::MissingDeviceModel { index } => assert_eq!(index, 1),
        }
    }

    #[test]
    fn test_output_preserves_input_order() {
        let mut a = record("A");
        a.matter = vec![matter_entry("Light")];
        let b = record("B");
        let mut c = record("C");
        c.matter = vec![matter_entry("Plug"), matter_entry("Switch")];

        let rows = normalize(&[a, b, c]).unwrap();
        let models: Vec<&str> = rows.iter().map(|r| r.device_model.as_str()).collect();
        assert_eq!(models, vec!["A", "B", "C", "C"]);
    }

    #[test]
    fn test_third_party_phrases_carry_through() {
        let mut entry = matter_entry("On/Off Light");
        entry.apple = CloudSupport {
            supported: vec!["basic control".to_string()],
            notes: vec!["no scenes".to_string()],
        };
        let mut r = record("MINIR4M");
        r.matter = vec![entry];
        r.home_assistant = Some(HomeAssistantBlock {
            supported: true,
            entities: vec!["switch".to_string()],
        });

        let rows = normalize(&[r]).unwrap();
        assert_eq!(rows[0].apple_supported, vec!["basic control".to_string()]);
        assert_eq!(rows[0].apple_notes, vec!["no scenes".to_string()]);
        assert!(rows[0].home_assistant_supported);
    }
}
