//! Registration records and the two-facet filter over them.

mod facets;
mod filter;
mod record;

pub use facets::{DogSexFilter, OwnerSexFilter, owner_sex_options};
pub use filter::{Filtered, Predicates, RecordFilter};
pub use record::Record;
