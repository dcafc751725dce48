//! Load-once boundary for the two input files.
//!
//! Entries are keyed by canonical path plus a load variant (the config
//! values the parse depends on) and are invalidated when the file's
//! modification time changes.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, PoisonError},
    time::SystemTime,
};

use ahash::AHashMap;
use anyhow::{Context, Result};
use tracing::debug;

use crate::{
    config::MapConfig,
    features::{FeatureCollection, FeatureIndex},
    io,
    records::Record,
};

#[derive(Debug)]
struct Entry<T> {
    modified: SystemTime,
    value: Arc<T>,
}

/// Memoized loader for one kind of input.
#[derive(Debug)]
pub struct Memo<T> {
    entries: Mutex<AHashMap<(PathBuf, String), Entry<T>>>,
}

impl<T> Default for Memo<T> {
    fn default() -> Self { Self { entries: Mutex::new(AHashMap::new()) } }
}

impl<T> Memo<T> {
    /// Return the cached value for `path`, loading it if absent or stale.
    pub fn get_or_load(&self, path: &Path, variant: &str, load: impl FnOnce(&Path) -> Result<T>) -> Result<Arc<T>> {
        let canonical = fs::canonicalize(path)
            .with_context(|| format!("[loader] Failed to resolve {}", path.display()))?;
        let modified = fs::metadata(&canonical)
            .and_then(|meta| meta.modified())
            .with_context(|| format!("[loader] Failed to stat {}", canonical.display()))?;
        let key = (canonical, variant.to_string());

        if let Some(entry) = self.entries.lock().unwrap_or_else(PoisonError::into_inner).get(&key) {
            if entry.modified == modified {
                debug!(path = %key.0.display(), "cache hit");
                return Ok(entry.value.clone());
            }
            debug!(path = %key.0.display(), "cache entry stale, reloading");
        }

        // The lock is not held while parsing; a concurrent load of the same
        // key may parse twice, and the last insert wins.
        let value = Arc::new(load(&key.0)?);
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
            .insert(key, Entry { modified, value: value.clone() });
        Ok(value)
    }

    /// Drop every entry for `path`. Returns true if anything was removed.
    pub fn invalidate(&self, path: &Path) -> bool {
        let canonical = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let before = entries.len();
        entries.retain(|(entry_path, _), _| *entry_path != canonical);
        entries.len() != before
    }

    pub fn clear(&self) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

/// Caches for both inputs.
#[derive(Debug, Default)]
pub struct LoadCache {
    pub records: Memo<Vec<Record>>,
    pub features: Memo<FeatureCollection>,
}

impl LoadCache {
    pub fn new() -> Self { Self::default() }

    pub fn invalidate(&self, path: &Path) -> bool {
        // Evaluate both so neither cache keeps a stale entry.
        let records = self.records.invalidate(path);
        let features = self.features.invalidate(path);
        records || features
    }

    pub fn clear(&self) {
        self.records.clear();
        self.features.clear();
    }

    /// Registration records from `path`, parsed with the configured dog-sex vocabulary.
    pub fn load_records(&self, path: &Path, config: &MapConfig) -> Result<Arc<Vec<Record>>> {
        let vocabulary = &config.dog_sex;
        self.records.get_or_load(
            path,
            &format!("{}|{}", vocabulary.male, vocabulary.female),
            |path| io::csv::read_records(path, vocabulary),
        )
    }

    /// Feature collection from `path`, keyed by the configured property names.
    pub fn load_features(&self, path: &Path, config: &MapConfig) -> Result<Arc<FeatureCollection>> {
        let (code_property, name_property) = (&config.area_code_property, &config.area_name_property);
        self.features.get_or_load(
            path,
            &format!("{code_property}|{name_property}"),
            |path| io::geojson::read_feature_collection(path, code_property, name_property),
        )
    }
}

/// Both inputs plus the derived feature index. Immutable once built.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<Vec<Record>>,
    features: Arc<FeatureCollection>,
    index: Arc<FeatureIndex>,
}

impl Dataset {
    pub fn new(records: impl Into<Arc<Vec<Record>>>, features: impl Into<Arc<FeatureCollection>>) -> Self {
        let features = features.into();
        let index = Arc::new(FeatureIndex::build(&features));
        Self { records: records.into(), features, index }
    }

    /// Load both files through `cache`.
    pub fn load(cache: &LoadCache, records_path: &Path, features_path: &Path, config: &MapConfig) -> Result<Self> {
        let records = cache.load_records(records_path, config)?;
        let features = cache.load_features(features_path, config)?;
        Ok(Self::new(records, features))
    }

    /// Build from in-memory CSV text and GeoJSON bytes.
    pub fn from_sources(csv: &str, geojson: &[u8], config: &MapConfig) -> Result<Self> {
        let df = io::csv::read_csv_string(csv)?;
        let records = io::csv::records_from_frame(&df, &config.dog_sex)?;
        let features = io::geojson::read_feature_collection_bytes(
            geojson,
            &config.area_code_property,
            &config.area_name_property,
        )?;
        Ok(Self::new(records, features))
    }

    #[inline] pub fn records(&self) -> &[Record] { &self.records }

    #[inline] pub fn features(&self) -> &Arc<FeatureCollection> { &self.features }

    #[inline] pub fn index(&self) -> &FeatureIndex { &self.index }
}
