//! FILENAME: core/registry/src/row.rs
//! Flat rows - the normalized, queryable unit.
//!
//! One FlatRow corresponds to one (device, bridge-mapping) pair. Identity
//! fields are duplicated across every row of the same device; cloud and
//! local-hub fields are duplicated too, while bridge fields vary per row.
//! Serialized camelCase so rows cross the messaging boundary unchanged.

use crate::attribute::AttrValue;
use serde::{Deserialize, Serialize};

/// The normalized row shape every downstream component consumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlatRow {
    // Identity fields - invariant across all rows of one device.
    pub device_model: String,
    pub device_type: String,
    pub device_brand: String,
    pub device_category: String,

    // Cloud-service fields (duplicated onto every variant row).
    pub ewelink_supported: bool,
    pub ewelink_capabilities: Vec<String>,

    // Bridge-protocol fields (vary per variant row).
    pub matter_supported: bool,
    pub matter_device_type: String,
    pub matter_supported_clusters: Vec<String>,
    pub matter_unsupported_clusters: Vec<String>,
    pub matter_protocol_version: String,
    pub apple_supported: Vec<String>,
    pub apple_notes: Vec<String>,
    pub google_supported: Vec<String>,
    pub google_notes: Vec<String>,
    pub smart_things_supported: Vec<String>,
    pub smart_things_notes: Vec<String>,
    pub alexa_supported: Vec<String>,
    pub alexa_notes: Vec<String>,

    // Local-hub fields (duplicated onto every variant row).
    pub home_assistant_supported: bool,
    pub home_assistant_entities: Vec<String>,
}

impl FlatRow {
    /// True when both rows belong to the same logical device.
    /// Compares the full identity tuple, not just the model - two devices
    /// that happened to share a model string would still form two groups.
    pub fn same_device(&self, other: &FlatRow) -> bool {
        self.device_model == other.device_model
            && self.device_type == other.device_type
            && self.device_brand == other.device_brand
            && self.device_category == other.device_category
    }

    /// Resolves an attribute by its wire name (camelCase, as the catalog
    /// and the filter map use it). Returns None for unknown names, which
    /// callers treat as "no constraint" rather than an error.
    pub fn attribute(&self, name: &str) -> Option<AttrValue<'_>> {
        let value = match name {
            "deviceModel" => AttrValue::Text(&self.device_model),
            "deviceType" => AttrValue::Text(&self.device_type),
            "deviceBrand" => AttrValue::Text(&self.device_brand),
            "deviceCategory" => AttrValue::Text(&self.device_category),
            "ewelinkSupported" => AttrValue::Bool(self.ewelink_supported),
            "ewelinkCapabilities" => AttrValue::List(&self.ewelink_capabilities),
            "matterSupported" => AttrValue::Bool(self.matter_supported),
            "matterDeviceType" => AttrValue::Text(&self.matter_device_type),
            "matterSupportedClusters" => AttrValue::List(&self.matter_supported_clusters),
            "matterUnsupportedClusters" => AttrValue::List(&self.matter_unsupported_clusters),
            "matterProtocolVersion" => AttrValue::Text(&self.matter_protocol_version),
            "appleSupported" => AttrValue::List(&self.apple_supported),
            "appleNotes" => AttrValue::List(&self.apple_notes),
            "googleSupported" => AttrValue::List(&self.google_supported),
            "googleNotes" => AttrValue::List(&self.google_notes),
            "smartThingsSupported" => AttrValue::List(&self.smart_things_supported),
            "smartThingsNotes" => AttrValue::List(&self.smart_things_notes),
            "alexaSupported" => AttrValue::List(&self.alexa_supported),
            "alexaNotes" => AttrValue::List(&self.alexa_notes),
            "homeAssistantSupported" => AttrValue::Bool(self.home_assistant_supported),
            "homeAssistantEntities" => AttrValue::List(&self.home_assistant_entities),
            _ => return None,
        };
        Some(value)
    }
}
