//! Feature-collection reading.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::info;

use crate::features::FeatureCollection;

/// Read a GeoJSON FeatureCollection from `path`.
pub(crate) fn read_feature_collection(path: &Path, area_code_property: &str, area_name_property: &str) -> Result<FeatureCollection> {
    let bytes = fs::read(path)
        .with_context(|| format!("[io::geojson] Failed to read {}", path.display()))?;
    let collection = read_feature_collection_bytes(&bytes, area_code_property, area_name_property)
        .with_context(|| format!("[io::geojson] Malformed feature collection in {}", path.display()))?;
    info!(path = %path.display(), features = collection.len(), "loaded features");
    Ok(collection)
}

/// Parse a GeoJSON FeatureCollection from bytes.
pub(crate) fn read_feature_collection_bytes(bytes: &[u8], area_code_property: &str, area_name_property: &str) -> Result<FeatureCollection> {
    let value: Value = serde_json::from_slice(bytes).context("[io::geojson] Failed to parse GeoJSON bytes")?;
    Ok(FeatureCollection::from_value(&value, area_code_property, area_name_property)?)
}
