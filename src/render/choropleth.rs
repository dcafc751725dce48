use std::sync::Arc;

use ahash::AHashMap;
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    aggregate::AggregationRow,
    config::{ColorDomain, GeoCenter, MapConfig},
    features::FeatureCollection,
    types::AreaCode,
};
use super::color::{ColorScale, Rgb};

/// Configuration handed to the chart layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSpec {
    /// Feature property joined against aggregation area codes.
    pub join_key: String,
    pub color_domain: ColorDomain,
    pub color_scale: ColorScale,
    pub center: GeoCenter,
    pub zoom: f64,
    pub opacity: f64,
    pub map_style: String,
    pub title: String,
    /// Caption of the hover value, e.g. "Number of dogs".
    pub value_label: String,
}

impl RenderSpec {
    pub fn from_config(config: &MapConfig) -> Self {
        Self {
            join_key: config.area_code_property.clone(),
            color_domain: config.color_domain,
            color_scale: config.color_scale,
            center: config.center,
            zoom: config.zoom,
            opacity: config.opacity,
            map_style: config.map_style.clone(),
            title: config.title.clone(),
            value_label: config.value_label.clone(),
        }
    }
}

impl Default for RenderSpec {
    fn default() -> Self { Self::from_config(&MapConfig::default()) }
}

/// Hover payload of a highlighted region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hover {
    /// Resolved area name, shown in bold.
    pub label: Arc<str>,
    pub count: u64,
}

impl Hover {
    /// HTML hover text: bold name, then the whole-number count.
    pub fn html(&self, value_label: &str) -> String {
        format!("<b>{}</b><br><br>{}: {}<br>", self.label, value_label, self.count)
    }

    /// Plain-text variant for SVG tooltips.
    pub fn plain(&self, value_label: &str) -> String {
        format!("{}\n{}: {}", self.label, value_label, self.count)
    }
}

/// One feature of the collection after the join.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedRegion {
    pub area_code: AreaCode,
    /// Name carried by the feature itself.
    pub feature_name: Arc<str>,
    /// Joined count, `None` when no aggregation row matched.
    pub value: Option<u64>,
    pub fill: Option<Rgb>,
    pub hover: Option<Hover>,
}

impl RenderedRegion {
    #[inline] pub fn is_highlighted(&self) -> bool { self.value.is_some() }
}

/// Renderable map: regions in collection order plus the spec that styles them.
/// Producing an artifact performs no output.
#[derive(Debug, Clone)]
pub struct RenderArtifact {
    pub(super) spec: RenderSpec,
    pub(super) features: Arc<FeatureCollection>,
    pub(super) rows: Vec<AggregationRow>,
    pub(super) regions: Vec<RenderedRegion>,
    pub(super) unmatched: Vec<AreaCode>,
}

impl RenderArtifact {
    #[inline] pub fn spec(&self) -> &RenderSpec { &self.spec }

    #[inline] pub fn features(&self) -> &FeatureCollection { &self.features }

    /// Aggregation rows the artifact was rendered from.
    #[inline] pub fn rows(&self) -> &[AggregationRow] { &self.rows }

    /// One entry per feature, in feature-collection order.
    #[inline] pub fn regions(&self) -> &[RenderedRegion] { &self.regions }

    /// Area codes of rows that matched no feature geometry.
    #[inline] pub fn unmatched(&self) -> &[AreaCode] { &self.unmatched }

    pub fn highlighted(&self) -> impl Iterator<Item = &RenderedRegion> {
        self.regions.iter().filter(|region| region.is_highlighted())
    }

    /// Region for `code`, first match in collection order.
    pub fn region(&self, code: AreaCode) -> Option<&RenderedRegion> {
        self.regions.iter().find(|region| region.area_code == code)
    }
}

/// Joins aggregation rows to geometry and colors them on a fixed domain.
#[derive(Debug, Clone, Default)]
pub struct ChoroplethRenderer {
    spec: RenderSpec,
}

impl ChoroplethRenderer {
    pub fn new(spec: RenderSpec) -> Self { Self { spec } }

    pub fn from_config(config: &MapConfig) -> Self { Self::new(RenderSpec::from_config(config)) }

    #[inline] pub fn spec(&self) -> &RenderSpec { &self.spec }

    /// Join `rows` to `features` by area code.
    ///
    /// Features without a row get no fill and no hover; rows without a feature
    /// are reported in [`RenderArtifact::unmatched`]. Empty inputs produce an
    /// artifact with no highlighted regions.
    pub fn render(&self, features: &Arc<FeatureCollection>, rows: &[AggregationRow]) -> RenderArtifact {
        let by_code: AHashMap<AreaCode, &AggregationRow> = rows.iter()
            .map(|row| (row.area_code, row))
            .collect();

        let regions: Vec<RenderedRegion> = features.iter()
            .map(|feature| {
                let row = by_code.get(&feature.area_code);
                RenderedRegion {
                    area_code: feature.area_code,
                    feature_name: feature.area_name.clone(),
                    value: row.map(|row| row.count),
                    fill: row.map(|row| self.fill_for(row.count)),
                    hover: row.map(|row| Hover {
                        label: row.area_name.clone().unwrap_or_else(|| feature.area_name.clone()),
                        count: row.count,
                    }),
                }
            })
            .collect();

        let unmatched: Vec<AreaCode> = rows.iter()
            .map(|row| row.area_code)
            .filter(|code| !features.iter().any(|feature| feature.area_code == *code))
            .collect();
        if !unmatched.is_empty() {
            warn!(codes = ?unmatched, "aggregation rows without matching geometry");
        }

        debug!(
            features = features.len(),
            rows = rows.len(),
            highlighted = regions.iter().filter(|region| region.is_highlighted()).count(),
            "rendered choropleth",
        );

        RenderArtifact {
            spec: self.spec.clone(),
            features: features.clone(),
            rows: rows.to_vec(),
            regions,
            unmatched,
        }
    }

    /// Fill for a count, clamped to the configured domain.
    pub fn fill_for(&self, count: u64) -> Rgb {
        self.spec.color_scale.sample(self.spec.color_domain.normalize(count as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::{aggregate::aggregate, features::FeatureIndex, records::Record, types::DogSex};

    fn collection() -> Arc<FeatureCollection> {
        let doc = json!({ "type": "FeatureCollection", "features": [
            { "type": "Feature", "geometry": null, "properties": { "qnr": 11, "qname": "Rathaus" } },
            { "type": "Feature", "geometry": null, "properties": { "qnr": 12, "qname": "Hochschulen" } },
            { "type": "Feature", "geometry": null, "properties": { "qnr": 13, "qname": "Lindenhof" } },
        ]});
        Arc::new(FeatureCollection::from_value(&doc, "qnr", "qname").unwrap())
    }

    fn row(code: u32, count: u64, name: Option<&str>) -> AggregationRow {
        AggregationRow { area_code: AreaCode(code), count, area_name: name.map(Arc::from) }
    }

    #[test]
    fn joins_rows_by_area_code() {
        let renderer = ChoroplethRenderer::default();
        let artifact = renderer.render(&collection(), &[row(12, 300, Some("Hochschulen")), row(11, 80, Some("Rathaus"))]);

        assert_eq!(artifact.regions().len(), 3);
        assert_eq!(artifact.region(AreaCode(11)).unwrap().value, Some(80));
        assert_eq!(artifact.region(AreaCode(12)).unwrap().value, Some(300));
        let missing = artifact.region(AreaCode(13)).unwrap();
        assert_eq!(missing.value, None);
        assert_eq!(missing.fill, None);
        assert_eq!(missing.hover, None);
        assert!(artifact.unmatched().is_empty());
    }

    #[test]
    fn hover_has_bold_name_and_whole_count() {
        let artifact = ChoroplethRenderer::default().render(&collection(), &[row(11, 1234, Some("Rathaus"))]);
        let hover = artifact.region(AreaCode(11)).unwrap().hover.clone().unwrap();
        assert_eq!(hover.html("Number of dogs"), "<b>Rathaus</b><br><br>Number of dogs: 1234<br>");
        assert_eq!(hover.plain("Number of dogs"), "Rathaus\nNumber of dogs: 1234");
    }

    #[test]
    fn fills_use_fixed_domain() {
        let renderer = ChoroplethRenderer::default();
        let low = renderer.render(&collection(), &[row(11, 1, Some("Rathaus"))]);
        let high = renderer.render(&collection(), &[row(11, 100_000, Some("Rathaus"))]);

        // Clamped to the ends of the scale, not rescaled to the data.
        assert_eq!(low.region(AreaCode(11)).unwrap().fill, Some(ColorScale::RdYlGnR.sample(0.0)));
        assert_eq!(high.region(AreaCode(11)).unwrap().fill, Some(ColorScale::RdYlGnR.sample(1.0)));
        assert_eq!(low.spec().color_domain, high.spec().color_domain);
    }

    #[test]
    fn unmatched_rows_are_reported() {
        let artifact = ChoroplethRenderer::default().render(&collection(), &[row(999, 5, None), row(11, 2, Some("Rathaus"))]);
        assert_eq!(artifact.unmatched(), &[AreaCode(999)]);
        assert_eq!(artifact.highlighted().count(), 1);
    }

    #[test]
    fn duplicate_area_codes_all_render() {
        let doc = json!({ "type": "FeatureCollection", "features": [
            { "type": "Feature", "geometry": null, "properties": { "qnr": 11, "qname": "Rathaus Ost" } },
            { "type": "Feature", "geometry": null, "properties": { "qnr": 11, "qname": "Rathaus West" } },
            { "type": "Feature", "geometry": null, "properties": { "qnr": 12, "qname": "Hochschulen" } },
        ]});
        let features = Arc::new(FeatureCollection::from_value(&doc, "qnr", "qname").unwrap());
        let index = FeatureIndex::build(&features);
        let records = [
            Record::new("1", "weiblich", DogSex::Male, AreaCode(11)),
            Record::new("2", "männlich", DogSex::Female, AreaCode(11)),
        ];
        let artifact = ChoroplethRenderer::default().render(&features, &aggregate(&records, &index));

        let duplicates: Vec<&RenderedRegion> = artifact.regions().iter()
            .filter(|region| region.area_code == AreaCode(11))
            .collect();
        assert_eq!(duplicates.len(), 2);
        for region in &duplicates {
            assert!(region.is_highlighted());
            assert_eq!(region.value, Some(2));
            assert_eq!(region.hover.as_ref().unwrap().label.as_ref(), "Rathaus West");
        }
        assert_eq!(duplicates[0].feature_name.as_ref(), "Rathaus Ost");
        assert_eq!(index.lookup(AreaCode(11)), Some("Rathaus West"));
        assert!(!artifact.region(AreaCode(12)).unwrap().is_highlighted());
    }

    #[test]
    fn empty_inputs_render() {
        let renderer = ChoroplethRenderer::default();
        let no_rows = renderer.render(&collection(), &[]);
        assert_eq!(no_rows.regions().len(), 3);
        assert_eq!(no_rows.highlighted().count(), 0);

        let no_features = renderer.render(&Arc::new(FeatureCollection::default()), &[row(11, 3, None)]);
        assert!(no_features.regions().is_empty());
        assert_eq!(no_features.unmatched(), &[AreaCode(11)]);
    }
}
