//! FILENAME: core/persistence/src/source.rs
//! Dataset source resolution - URL or filesystem path into raw records.

use crate::error::LoadError;
use registry::{normalize, FlatRow, RawRecord};

/// Fetches and parses the dataset at `source`.
///
/// `http://` and `https://` locations go over the network; anything else is
/// treated as a filesystem path. The document must be a JSON array of raw
/// records.
pub async fn load_dataset(source: &str) -> Result<Vec<RawRecord>, LoadError> {
    let bytes = read_source(source).await?;
    let records: Vec<RawRecord> = serde_json::from_slice(&bytes)?;
    Ok(records)
}

/// Fetches, parses, and normalizes in one step - the shape the worker
/// builds its snapshot from.
pub async fn load_rows(source: &str) -> Result<Vec<FlatRow>, LoadError> {
    let records = load_dataset(source).await?;
    Ok(normalize(&records)?)
}

async fn read_source(source: &str) -> Result<Vec<u8>, LoadError> {
    if source.starts_with("http://") || source.starts_with("https://") {
        let response = reqwest::get(source).await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    } else {
        Ok(tokio::fs::read(source).await?)
    }
}
