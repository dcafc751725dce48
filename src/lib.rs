#![doc = "Dog registration explorer: facet filtering, per-area counts and choropleth rendering"]
mod aggregate;
mod config;
mod error;
mod explorer;
mod features;
mod io;
mod loader;
mod records;
mod render;
mod types;

#[doc(inline)]
pub use aggregate::{aggregate, total, AggregationRow};

#[doc(inline)]
pub use config::{ColorDomain, GeoCenter, MapConfig};

#[doc(inline)]
pub use error::{ConfigError, LoadError};

#[doc(inline)]
pub use explorer::{Explorer, Snapshot};

#[doc(inline)]
pub use features::{Feature, FeatureCollection, FeatureIndex};

#[doc(inline)]
pub use loader::{Dataset, LoadCache, Memo};

#[doc(inline)]
pub use records::{owner_sex_options, DogSexFilter, Filtered, OwnerSexFilter, Predicates, Record, RecordFilter};

#[doc(inline)]
pub use render::{ChoroplethRenderer, ColorScale, Hover, RenderArtifact, RenderSpec, RenderedRegion, Rgb};

#[doc(inline)]
pub use types::{AreaCode, DogSex, DogSexVocabulary};
