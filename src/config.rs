use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, render::ColorScale, types::DogSexVocabulary};

/// Fixed `[min, max]` range mapped onto the color scale.
/// Never derived from the data being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct ColorDomain {
    min: f64,
    max: f64,
}

impl ColorDomain {
    pub fn new(min: f64, max: f64) -> Result<Self, ConfigError> {
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(ConfigError::InvalidColorDomain { min, max });
        }
        Ok(Self { min, max })
    }

    #[inline] pub fn min(&self) -> f64 { self.min }
    #[inline] pub fn max(&self) -> f64 { self.max }

    /// Position of `value` inside the domain, clamped to [0, 1].
    pub fn normalize(&self, value: f64) -> f64 {
        if !value.is_finite() { return 0.0 }
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

impl Default for ColorDomain {
    fn default() -> Self { Self { min: 80.0, max: 5600.0 } }
}

impl TryFrom<[f64; 2]> for ColorDomain {
    type Error = ConfigError;
    fn try_from([min, max]: [f64; 2]) -> Result<Self, Self::Error> { Self::new(min, max) }
}

impl From<ColorDomain> for [f64; 2] {
    fn from(domain: ColorDomain) -> Self { [domain.min, domain.max] }
}

/// Map center in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCenter {
    pub lat: f64,
    pub lon: f64,
}

impl Default for GeoCenter {
    fn default() -> Self { Self { lat: 47.3769, lon: 8.5417 } }
}

/// Everything the renderer and loaders need that is not data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub color_domain: ColorDomain,
    pub center: GeoCenter,
    pub zoom: f64,
    pub opacity: f64,
    pub color_scale: ColorScale,
    pub map_style: String,
    pub title: String,
    pub value_label: String,
    pub area_code_property: String,
    pub area_name_property: String,
    pub dog_sex: DogSexVocabulary,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            color_domain: ColorDomain::default(),
            center: GeoCenter::default(),
            zoom: 9.9,
            opacity: 0.5,
            color_scale: ColorScale::RdYlGnR,
            map_style: "carto-positron".into(),
            title: "Number of dogs per quarter".into(),
            value_label: "Number of dogs".into(),
            area_code_property: "qnr".into(),
            area_name_property: "qname".into(),
            dog_sex: DogSexVocabulary::default(),
        }
    }
}

impl MapConfig {
    /// Read a JSON config file. Missing fields fall back to defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("[config] Failed to read config file {}", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("[config] Invalid config file {}", path.display()))
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)
            .context("[config] Failed to parse config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Check ranges the type system does not already enforce.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=24.0).contains(&self.zoom) {
            return Err(ConfigError::InvalidZoom(self.zoom));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(ConfigError::InvalidOpacity(self.opacity));
        }
        let GeoCenter { lat, lon } = self.center;
        if !((-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)) {
            return Err(ConfigError::InvalidCenter { lat, lon });
        }
        Ok(())
    }
}
