//! Reference geography: the feature collection and its code → name index.

mod collection;
mod geometry;
mod index;

pub use collection::{Feature, FeatureCollection};
pub use index::FeatureIndex;
