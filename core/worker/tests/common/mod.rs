//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for the worker boundary integration tests.

use std::io::Write;
use tempfile::NamedTempFile;
use worker::EngineHandle;

// ============================================================================
// FIXTURE DATASETS
// ============================================================================

/// The three-record matrix fixture:
/// - device "A" (brand X) with two bridge mappings
/// - device "B" (brand Y) with one
/// - device "C" with no ecosystem blocks at all
///
/// Normalizes to 4 rows: A, A, B, C.
pub struct MatrixFixture;

impl MatrixFixture {
    pub fn dataset_json() -> &'static str {
        r#"[
            {
                "deviceModel": "A",
                "deviceType": "Switch",
                "deviceBrand": "X",
                "deviceCategory": "Wall Switch",
                "ewelink": { "supported": true, "capabilities": ["power"] },
                "matter": [
                    {
                        "deviceType": "On/Off Light",
                        "supportedClusters": ["OnOff"],
                        "protocolVersion": "1.0",
                        "apple": { "supported": ["basic control"], "notes": ["no scene support"] }
                    },
                    { "deviceType": "Dimmable Light", "protocolVersion": "1.2" }
                ],
                "homeAssistant": { "supported": true, "entities": ["switch"] }
            },
            {
                "deviceModel": "B",
                "deviceType": "Sensor",
                "deviceBrand": "Y",
                "deviceCategory": "Door Sensor",
                "matter": [ { "deviceType": "Contact Sensor", "protocolVersion": "1.0" } ]
            },
            { "deviceModel": "C", "deviceType": "Camera" }
        ]"#
    }

    /// A single-record replacement dataset for reload tests.
    pub fn alternate_json() -> &'static str {
        r#"[ { "deviceModel": "D", "deviceType": "Plug", "deviceBrand": "Z", "deviceCategory": "Smart Plug" } ]"#
    }

    pub fn write(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create fixture file");
        file.write_all(json.as_bytes()).expect("write fixture");
        file.flush().expect("flush fixture");
        file
    }
}

// ============================================================================
// WORKER HARNESS
// ============================================================================

/// Spawns a worker and keeps the fixture file alive for the test's duration.
pub struct WorkerHarness {
    pub handle: EngineHandle,
    dataset: NamedTempFile,
}

impl WorkerHarness {
    /// A fresh worker with the fixture on disk but not yet loaded.
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        WorkerHarness {
            handle: EngineHandle::spawn(),
            dataset: MatrixFixture::write(MatrixFixture::dataset_json()),
        }
    }

    /// A worker with the fixture dataset already loaded (4 rows).
    pub async fn loaded() -> Self {
        let harness = Self::new();
        let summary = harness
            .handle
            .load(harness.dataset_path())
            .await
            .expect("fixture load succeeds");
        assert_eq!(summary.count, 4);
        harness
    }

    pub fn dataset_path(&self) -> String {
        self.dataset.path().to_string_lossy().into_owned()
    }
}
