//! Input readers for the two source files.
//!
//! - `csv` - registration records (polars), including the header translation table
//! - `geojson` - the area feature collection

pub(crate) mod csv;
pub(crate) mod geojson;
