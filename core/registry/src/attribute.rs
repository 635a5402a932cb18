//! FILENAME: core/registry/src/attribute.rs
//! The filterable-attribute catalog.
//!
//! Filter controls, the distinct-value indexer, and sort-key resolution all
//! speak in attribute wire names. The catalog is the single list of those
//! names, each tagged with its column group and value kind, so callers can
//! scope filter controls per ecosystem group the same way the table scopes
//! column visibility.

use serde::{Deserialize, Serialize};

// ============================================================================
// GROUP KEY
// ============================================================================

/// Identifies one of the ecosystem column groups. Used to select which
/// attribute groups participate in filtering/visibility; not part of FlatRow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupKey {
    /// Device identity columns.
    Device,
    /// Cloud-service columns.
    Ewelink,
    /// Bridge-protocol columns.
    Matter,
    /// Local-hub columns.
    HomeAssistant,
}

// ============================================================================
// ATTRIBUTE VALUES
// ============================================================================

/// A borrowed view of one row attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttrValue<'a> {
    Bool(bool),
    Text(&'a str),
    List(&'a [String]),
}

/// The value kind an attribute carries, as declared in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttrKind {
    Bool,
    Text,
    List,
}

// ============================================================================
// CATALOG
// ============================================================================

/// One catalog entry: an attribute the query engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSpec {
    /// Wire name (camelCase), as used in filter maps and sort keys.
    pub name: &'static str,

    /// Column group this attribute belongs to.
    pub group: GroupKey,

    pub kind: AttrKind,

    /// Whether the distinct-value indexer builds an option list for this
    /// attribute. Model strings (unique per device) and free-text notes
    /// stay out of the option dropdowns but remain filterable.
    pub indexed: bool,
}

const fn spec(name: &'static str, group: GroupKey, kind: AttrKind, indexed: bool) -> AttributeSpec {
    AttributeSpec { name, group, kind, indexed }
}

/// Every attribute the query engine accepts in filters and sort keys,
/// in column order.
pub fn attributes() -> &'static [AttributeSpec] {
    ATTRIBUTES
}

static ATTRIBUTES: &[AttributeSpec] = &[
    spec("deviceModel", GroupKey::Device, AttrKind::Text, false),
    spec("deviceType", GroupKey::Device, AttrKind::Text, true),
    spec("deviceBrand", GroupKey::Device, AttrKind::Text, true),
    spec("deviceCategory", GroupKey::Device, AttrKind::Text, true),
    spec("ewelinkSupported", GroupKey::Ewelink, AttrKind::Bool, true),
    spec("ewelinkCapabilities", GroupKey::Ewelink, AttrKind::List, true),
    spec("matterSupported", GroupKey::Matter, AttrKind::Bool, true),
    spec("matterDeviceType", GroupKey::Matter, AttrKind::Text, true),
    spec("matterSupportedClusters", GroupKey::Matter, AttrKind::List, true),
    spec("matterUnsupportedClusters", GroupKey::Matter, AttrKind::List, true),
    spec("matterProtocolVersion", GroupKey::Matter, AttrKind::Text, true),
    spec("appleSupported", GroupKey::Matter, AttrKind::List, true),
    spec("appleNotes", GroupKey::Matter, AttrKind::List, false),
    spec("googleSupported", GroupKey::Matter, AttrKind::List, true),
    spec("googleNotes", GroupKey::Matter, AttrKind::List, false),
    spec("smartThingsSupported", GroupKey::Matter, AttrKind::List, true),
    spec("smartThingsNotes", GroupKey::Matter, AttrKind::List, false),
    spec("alexaSupported", GroupKey::Matter, AttrKind::List, true),
    spec("alexaNotes", GroupKey::Matter, AttrKind::List, false),
    spec("homeAssistantSupported", GroupKey::HomeAssistant, AttrKind::Bool, true),
    spec("homeAssistantEntities", GroupKey::HomeAssistant, AttrKind::List, true),
];
