use std::sync::Arc;

use ahash::AHashMap;

use crate::types::AreaCode;
use super::FeatureCollection;

/// Lookup from area code to area name, built once from a feature collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureIndex {
    names: AHashMap<AreaCode, Arc<str>>,
}

impl FeatureIndex {
    /// Index every feature by its area code. Duplicate codes resolve last-write-wins.
    pub fn build(collection: &FeatureCollection) -> Self {
        collection.iter()
            .map(|feature| (feature.area_code, feature.area_name.clone()))
            .collect()
    }

    /// Name for `code`, or `None` when no feature carries that code.
    #[inline]
    pub fn lookup(&self, code: AreaCode) -> Option<&str> {
        self.names.get(&code).map(|name| &**name)
    }

    /// Shared handle to the name for `code`.
    #[inline]
    pub(crate) fn resolve(&self, code: AreaCode) -> Option<Arc<str>> {
        self.names.get(&code).cloned()
    }

    #[inline] pub fn contains(&self, code: AreaCode) -> bool { self.names.contains_key(&code) }

    #[inline] pub fn len(&self) -> usize { self.names.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.names.is_empty() }
}

impl FromIterator<(AreaCode, Arc<str>)> for FeatureIndex {
    fn from_iter<I: IntoIterator<Item = (AreaCode, Arc<str>)>>(iter: I) -> Self {
        let mut names = AHashMap::new();
        for (code, name) in iter {
            names.insert(code, name);
        }
        Self { names }
    }
}
