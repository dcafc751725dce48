use std::sync::Arc;

use geo::MultiPolygon;
use serde_json::{Map, Value};

use crate::{error::LoadError, types::AreaCode};
use super::geometry::parse_geometry;

/// One region of the feature collection.
#[derive(Debug, Clone)]
pub struct Feature {
    pub area_code: AreaCode,
    pub area_name: Arc<str>,
    /// Parsed polygonal geometry, `None` for null or non-polygonal geometry.
    pub shape: Option<MultiPolygon<f64>>,
    geometry: Value,
    properties: Map<String, Value>,
}

impl Feature {
    /// The feature's geometry exactly as it appeared in the source document.
    #[inline] pub fn geometry(&self) -> &Value { &self.geometry }

    /// The feature's original properties.
    #[inline] pub fn properties(&self) -> &Map<String, Value> { &self.properties }
}

/// Read-only feature collection, keyed by a configurable integer property.
#[derive(Debug, Clone, Default)]
pub struct FeatureCollection {
    features: Vec<Feature>,
    area_code_property: String,
    area_name_property: String,
}

impl FeatureCollection {
    /// Parse a GeoJSON FeatureCollection document.
    /// Every feature must carry an integer `area_code_property` and a string `area_name_property`.
    pub fn from_value(value: &Value, area_code_property: &str, area_name_property: &str) -> Result<Self, LoadError> {
        if value.get("type").and_then(Value::as_str) != Some("FeatureCollection") {
            return Err(LoadError::NotAFeatureCollection);
        }
        let raw_features = value.get("features")
            .and_then(Value::as_array)
            .ok_or(LoadError::NotAFeatureCollection)?;

        let features = raw_features.iter().enumerate()
            .map(|(index, feature)| parse_feature(index, feature, area_code_property, area_name_property))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            features,
            area_code_property: area_code_property.to_string(),
            area_name_property: area_name_property.to_string(),
        })
    }

    /// Name of the integer property used as join key.
    #[inline] pub fn area_code_property(&self) -> &str { &self.area_code_property }

    /// Name of the string property holding the display name.
    #[inline] pub fn area_name_property(&self) -> &str { &self.area_name_property }

    #[inline] pub fn features(&self) -> &[Feature] { &self.features }

    #[inline] pub fn len(&self) -> usize { self.features.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.features.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &Feature> { self.features.iter() }

    /// Bounding rectangle over all parsed shapes.
    pub fn bounds(&self) -> Option<geo::Rect<f64>> {
        use geo::BoundingRect;

        self.features.iter()
            .filter_map(|feature| feature.shape.as_ref()?.bounding_rect())
            .reduce(|a, b| {
                geo::Rect::new(
                    geo::Coord { x: a.min().x.min(b.min().x), y: a.min().y.min(b.min().y) },
                    geo::Coord { x: a.max().x.max(b.max().x), y: a.max().y.max(b.max().y) },
                )
            })
    }
}

fn parse_feature(index: usize, feature: &Value, code_property: &str, name_property: &str) -> Result<Feature, LoadError> {
    let properties = feature.get("properties")
        .and_then(Value::as_object)
        .ok_or_else(|| LoadError::MissingProperty { index, property: "properties".into() })?;

    let code_value = properties.get(code_property)
        .ok_or_else(|| LoadError::MissingProperty { index, property: code_property.into() })?;
    let area_code = AreaCode::from_json(code_value)
        .ok_or_else(|| LoadError::InvalidProperty {
            index,
            property: code_property.into(),
            value: code_value.to_string(),
        })?;

    let name_value = properties.get(name_property)
        .ok_or_else(|| LoadError::MissingProperty { index, property: name_property.into() })?;
    let area_name: Arc<str> = name_value.as_str()
        .ok_or_else(|| LoadError::InvalidProperty {
            index,
            property: name_property.into(),
            value: name_value.to_string(),
        })?
        .into();

    let geometry = feature.get("geometry").cloned().unwrap_or(Value::Null);
    let shape = parse_geometry(&geometry)
        .map_err(|reason| LoadError::InvalidGeometry { index, reason })?;

    Ok(Feature { area_code, area_name, shape, geometry, properties: properties.clone() })
}
