// End-to-end Filter → Aggregate → Render over in-memory inputs.

use std::sync::Arc;

use dogmap::{
    aggregate, total, AreaCode, ChoroplethRenderer, ColorDomain, Dataset, DogSex, DogSexFilter,
    Explorer, FeatureCollection, FeatureIndex, MapConfig, OwnerSexFilter, Predicates, Record,
    RecordFilter, RenderSpec,
};
use serde_json::json;

fn features() -> Arc<FeatureCollection> {
    let square = |x: f64| json!({
        "type": "Polygon",
        "coordinates": [[[x, 47.3], [x + 0.01, 47.3], [x + 0.01, 47.31], [x, 47.31], [x, 47.3]]]
    });
    let doc = json!({ "type": "FeatureCollection", "features": [
        { "type": "Feature", "geometry": square(8.54), "properties": { "qnr": 11, "qname": "Rathaus" } },
        { "type": "Feature", "geometry": square(8.55), "properties": { "qnr": 12, "qname": "Hochschulen" } },
        { "type": "Feature", "geometry": square(8.56), "properties": { "qnr": 13, "qname": "Lindenhof" } },
    ]});
    Arc::new(FeatureCollection::from_value(&doc, "qnr", "qname").unwrap())
}

fn scenario_records() -> Vec<Record> {
    vec![
        Record::new("1", "M", DogSex::Male, AreaCode(11)),
        Record::new("2", "F", DogSex::Female, AreaCode(11)),
        Record::new("3", "M", DogSex::Female, AreaCode(12)),
    ]
}

fn owner(value: &str) -> Predicates {
    Predicates::new(OwnerSexFilter::Equals(value.into()), DogSexFilter::All)
}

#[test]
fn owner_sex_scenario() {
    let index = FeatureIndex::build(&features());
    let filtered = RecordFilter::apply(&scenario_records(), &owner("M"));
    assert_eq!(filtered.count(), 2);

    let rows = aggregate(filtered.records(), &index);
    let summary: Vec<_> = rows.iter()
        .map(|row| (row.area_code.get(), row.count, row.area_name.as_deref()))
        .collect();
    assert_eq!(summary, vec![(11, 1, Some("Rathaus")), (12, 1, Some("Hochschulen"))]);
}

#[test]
fn all_all_scenario() {
    let records = scenario_records();
    let filtered = RecordFilter::apply(&records, &Predicates::default());
    assert_eq!(filtered.count(), records.len());

    let rows = aggregate(filtered.records(), &FeatureIndex::build(&features()));
    assert_eq!(total(&rows), 3);
}

#[test]
fn row_sum_matches_filtered_count_for_every_selection() {
    let mut records = scenario_records();
    records.push(Record::new("4", "F", DogSex::Male, AreaCode(999)));
    records.push(Record::new("5", "F", DogSex::Other("unbekannt".into()), AreaCode(13)));
    let index = FeatureIndex::build(&features());

    for owner_sex in [OwnerSexFilter::All, OwnerSexFilter::Equals("M".into()), OwnerSexFilter::Equals("F".into()), OwnerSexFilter::Equals("X".into())] {
        for dog_sex in DogSexFilter::ALL {
            let predicates = Predicates::new(owner_sex.clone(), dog_sex);
            let filtered = RecordFilter::apply(&records, &predicates);
            let rows = aggregate(filtered.records(), &index);

            assert_eq!(total(&rows), filtered.count() as u64, "{predicates:?}");
            for row in &rows {
                assert!(row.count >= 1);
                let expected = filtered.records().iter().filter(|r| r.area_code == row.area_code).count() as u64;
                assert_eq!(row.count, expected);
            }
        }
    }
}

#[test]
fn unknown_area_code_scenario() {
    let index = FeatureIndex::build(&features());
    assert_eq!(index.lookup(AreaCode(999)), None);

    let records = vec![Record::new("1", "M", DogSex::Male, AreaCode(999))];
    let rows = aggregate(&records, &index);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].area_name, None);

    let artifact = ChoroplethRenderer::default().render(&features(), &rows);
    assert_eq!(artifact.highlighted().count(), 0);
    assert_eq!(artifact.unmatched(), &[AreaCode(999)]);
}

#[test]
fn empty_selection_scenario() {
    let dataset = Dataset::new(scenario_records(), features());
    let explorer = Explorer::new(dataset, ChoroplethRenderer::default());

    let snapshot = explorer.explore(&owner("nobody"));
    assert_eq!(snapshot.count, 0);
    assert!(snapshot.rows.is_empty());
    assert_eq!(snapshot.artifact.regions().len(), 3);
    assert_eq!(snapshot.artifact.highlighted().count(), 0);
    assert!(snapshot.artifact.to_svg_string(400.0).unwrap().contains("</svg>"));
}

#[test]
fn color_domain_is_independent_of_data() {
    let spec = RenderSpec { color_domain: ColorDomain::new(0.0, 10.0).unwrap(), ..RenderSpec::default() };
    let renderer = ChoroplethRenderer::new(spec);
    let index = FeatureIndex::build(&features());

    let small = renderer.render(&features(), &aggregate(&scenario_records()[..1], &index));
    let large = renderer.render(&features(), &aggregate(&scenario_records(), &index));

    for artifact in [&small, &large] {
        assert_eq!(artifact.spec().color_domain, ColorDomain::new(0.0, 10.0).unwrap());
        let figure = artifact.to_plotly();
        assert_eq!(figure["data"][0]["zmin"], json!(0.0));
        assert_eq!(figure["data"][0]["zmax"], json!(10.0));
    }
}

#[test]
fn explore_is_referentially_transparent() {
    let explorer = Explorer::new(
        Dataset::new(scenario_records(), features()),
        ChoroplethRenderer::from_config(&MapConfig::default()),
    );
    let predicates = Predicates::new(OwnerSexFilter::All, DogSexFilter::FemalesOnly);

    let first = explorer.explore(&predicates);
    let second = explorer.explore(&predicates);
    assert_eq!(first.count, 2);
    assert_eq!(first.rows, second.rows);
    assert_eq!(first.artifact.regions(), second.artifact.regions());
    assert_eq!(first.artifact.to_geojson(), second.artifact.to_geojson());
    assert_eq!(explorer.dataset().records().len(), 3);
}

#[test]
fn hover_payload_matches_row() {
    let explorer = Explorer::new(Dataset::new(scenario_records(), features()), ChoroplethRenderer::default());
    let snapshot = explorer.explore(&Predicates::default());

    let region = snapshot.artifact.region(AreaCode(11)).unwrap();
    let hover = region.hover.as_ref().unwrap();
    assert_eq!(&*hover.label, "Rathaus");
    assert_eq!(hover.count, 2);
    assert_eq!(region.value, Some(2));
    assert!(snapshot.artifact.region(AreaCode(13)).unwrap().hover.is_none());
}

#[test]
fn owner_sex_options_come_from_data() {
    let explorer = Explorer::new(Dataset::new(scenario_records(), features()), ChoroplethRenderer::default());
    assert_eq!(explorer.owner_sex_options(), vec!["All", "F", "M"]);
}
