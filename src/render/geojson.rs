use serde_json::{json, Value};

use super::RenderArtifact;

impl RenderArtifact {
    /// Export the joined map as a GeoJSON FeatureCollection.
    /// Geometry and original properties pass through unchanged; highlighted
    /// features gain `value`, `fill` and `hover_text`.
    pub fn to_geojson(&self) -> Value {
        let features: Vec<Value> = self.features.iter()
            .zip(self.regions.iter())
            .map(|(feature, region)| {
                let mut properties = feature.properties().clone();
                if let (Some(value), Some(fill), Some(hover)) = (region.value, region.fill, &region.hover) {
                    properties.insert("value".to_string(), json!(value));
                    properties.insert("fill".to_string(), json!(fill.to_hex()));
                    properties.insert("hover_text".to_string(), json!(hover.html(&self.spec.value_label)));
                }

                json!({
                    "type": "Feature",
                    "id": region.area_code.get(),
                    "geometry": feature.geometry(),
                    "properties": properties,
                })
            })
            .collect();

        json!({
            "type": "FeatureCollection",
            "features": features,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use crate::{aggregate::AggregationRow, features::FeatureCollection, render::ChoroplethRenderer, types::AreaCode};

    #[test]
    fn highlighted_features_gain_properties() {
        let geometry = json!({ "type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]] });
        let doc = json!({ "type": "FeatureCollection", "features": [
            { "type": "Feature", "geometry": geometry, "properties": { "qnr": 11, "qname": "Rathaus", "knr": 1 } },
            { "type": "Feature", "geometry": null, "properties": { "qnr": 12, "qname": "Hochschulen" } },
        ]});
        let features = Arc::new(FeatureCollection::from_value(&doc, "qnr", "qname").unwrap());
        let rows = [AggregationRow { area_code: AreaCode(11), count: 42, area_name: Some("Rathaus".into()) }];

        let out = ChoroplethRenderer::default().render(&features, &rows).to_geojson();
        let first = &out["features"][0];
        assert_eq!(first["id"], json!(11));
        assert_eq!(first["geometry"], geometry);
        assert_eq!(first["properties"]["knr"], json!(1));
        assert_eq!(first["properties"]["value"], json!(42));
        assert_eq!(first["properties"]["hover_text"], json!("<b>Rathaus</b><br><br>Number of dogs: 42<br>"));

        let second = &out["features"][1];
        assert!(second["properties"].get("value").is_none());
        assert_eq!(second["geometry"], json!(null));
    }
}
