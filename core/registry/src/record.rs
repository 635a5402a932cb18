//! FILENAME: core/registry/src/record.rs
//! Raw dataset records - the on-wire shape of one device's compatibility entry.
//!
//! These structures mirror the published JSON document: identity fields plus
//! nested per-ecosystem support blocks. Every non-identity field is defaulted
//! so that sparse records (a device listed with no ecosystem data yet) still
//! parse; required-field validation happens during normalization, not here.

use serde::{Deserialize, Serialize};

// ============================================================================
// RAW RECORD
// ============================================================================

/// One device entry as published in the dataset document.
///
/// A record carries up to three ecosystem blocks:
/// - `ewelink`: cloud-service support (one block per device)
/// - `matter`: bridge-protocol support, one entry per third-party hub mapping
/// - `home_assistant`: local-hub support (one block per device)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawRecord {
    /// Device model designation. The only required identity field.
    pub device_model: String,

    /// Device type (e.g., "Switch", "Sensor").
    pub device_type: String,

    /// Manufacturer brand.
    pub device_brand: String,

    /// Catalog category (e.g., "Wall Switch").
    pub device_category: String,

    /// Cloud-service support block.
    pub ewelink: Option<EwelinkBlock>,

    /// Bridge-protocol entries, one per third-party hub mapping.
    /// A device may expose several Matter device types through different hubs.
    pub matter: Vec<MatterEntry>,

    /// Local-hub support block.
    pub home_assistant: Option<HomeAssistantBlock>,
}

// ============================================================================
// ECOSYSTEM BLOCKS
// ============================================================================

/// Cloud-service support for a device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EwelinkBlock {
    pub supported: bool,

    /// Capability names exposed through the cloud service.
    pub capabilities: Vec<String>,
}

/// One bridge-protocol mapping of a device onto a Matter device type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatterEntry {
    /// The Matter device type this mapping exposes (e.g., "On/Off Light").
    pub device_type: String,

    pub supported_clusters: Vec<String>,
    pub unsupported_clusters: Vec<String>,

    /// Matter protocol version the mapping was certified against.
    pub protocol_version: String,

    /// Third-party cloud behavior observed through this mapping.
    pub apple: CloudSupport,
    pub google: CloudSupport,
    pub smart_things: CloudSupport,
    pub alexa: CloudSupport,
}

/// Support observations for one third-party cloud.
///
/// The dataset records phrases ("basic control", "no scene support"), not
/// booleans - an empty `supported` list means nothing has been verified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CloudSupport {
    pub supported: Vec<String>,
    pub notes: Vec<String>,
}

/// Local-hub support for a device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HomeAssistantBlock {
    pub supported: bool,

    /// Entity names the device synchronizes into the local hub.
    pub entities: Vec<String>,
}
