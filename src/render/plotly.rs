use serde_json::{json, Value};

use super::RenderArtifact;

impl RenderArtifact {
    /// Export as a Plotly `choroplethmapbox` figure (`{"data": [...], "layout": {...}}`).
    ///
    /// Locations, values and hover payloads are taken from the same rows in the
    /// same order, so `z`, `text` and `customdata` always line up.
    pub fn to_plotly(&self) -> Value {
        let spec = &self.spec;

        let locations: Vec<u32> = self.rows.iter().map(|row| row.area_code.get()).collect();
        let counts: Vec<u64> = self.rows.iter().map(|row| row.count).collect();
        let names: Vec<&str> = self.rows.iter().map(|row| row.display_name()).collect();
        let colorscale: Vec<Value> = spec.color_scale.to_stop_list().into_iter()
            .map(|(position, color)| json!([position, color]))
            .collect();

        let trace = json!({
            "type": "choroplethmapbox",
            "geojson": self.to_geojson(),
            "featureidkey": format!("properties.{}", spec.join_key),
            "locations": locations,
            "z": counts,
            "zmin": spec.color_domain.min(),
            "zmax": spec.color_domain.max(),
            "colorscale": colorscale,
            "marker": { "opacity": spec.opacity },
            "text": names,
            "customdata": counts,
            "hovertemplate": format!(
                "<b>%{{text}}</b><br><br>{}: %{{customdata:.0f}}<br><extra></extra>",
                spec.value_label,
            ),
            "colorbar": { "title": { "text": spec.value_label } },
        });

        json!({
            "data": [trace],
            "layout": {
                "title": { "text": spec.title },
                "mapbox": {
                    "style": spec.map_style,
                    "center": { "lat": spec.center.lat, "lon": spec.center.lon },
                    "zoom": spec.zoom,
                },
                "margin": { "r": 0, "t": 40, "l": 0, "b": 0 },
            },
        })
    }
}
