//! Choropleth rendering: joins aggregated counts to geometry and exports
//! the result as GeoJSON, a Plotly figure, or a static SVG.

mod choropleth;
mod color;
mod geojson;
mod plotly;
mod svg;

pub use choropleth::{ChoroplethRenderer, Hover, RenderArtifact, RenderSpec, RenderedRegion};
pub use color::{ColorScale, Rgb};
