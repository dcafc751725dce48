//! Typed failure causes raised before any core operation runs.
//!
//! Everything past load time resolves to safe defaults (unknown area names,
//! empty aggregations), so these are the only errors the crate defines.

use thiserror::Error;

/// Malformed tabular or feature-collection input.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("required column '{column}' not found (also looked for '{source_name}')")]
    MissingColumn { column: &'static str, source_name: &'static str },

    #[error("column '{column}' has a missing value at row {row}")]
    NullValue { column: &'static str, row: usize },

    #[error("column '{column}' has an invalid value at row {row}: {value}")]
    InvalidValue { column: &'static str, row: usize, value: String },

    #[error("document is not a GeoJSON FeatureCollection")]
    NotAFeatureCollection,

    #[error("feature {index} has no '{property}' property")]
    MissingProperty { index: usize, property: String },

    #[error("feature {index} has an invalid '{property}' property: {value}")]
    InvalidProperty { index: usize, property: String, value: String },

    #[error("feature {index} has invalid geometry: {reason}")]
    InvalidGeometry { index: usize, reason: String },
}

/// Rejected map configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("color domain must be finite with min < max, got [{min}, {max}]")]
    InvalidColorDomain { min: f64, max: f64 },

    #[error("zoom must be within [0, 24], got {0}")]
    InvalidZoom(f64),

    #[error("opacity must be within [0, 1], got {0}")]
    InvalidOpacity(f64),

    #[error("center ({lat}, {lon}) is not a valid latitude/longitude")]
    InvalidCenter { lat: f64, lon: f64 },
}
