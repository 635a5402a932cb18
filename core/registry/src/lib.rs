//! FILENAME: core/registry/src/lib.rs
//! PURPOSE: Main library entry point for the device registry data model.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod attribute;
pub mod normalize;
pub mod record;
pub mod row;

// Re-export commonly used types at the crate root
pub use attribute::{attributes, AttrKind, AttrValue, AttributeSpec, GroupKey};
pub use normalize::{normalize, NormalizeError};
pub use record::{CloudSupport, EwelinkBlock, HomeAssistantBlock, MatterEntry, RawRecord};
pub use row::FlatRow;
