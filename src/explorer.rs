use crate::{
    aggregate::{aggregate, AggregationRow},
    loader::Dataset,
    records::{owner_sex_options, Predicates, RecordFilter},
    render::{ChoroplethRenderer, RenderArtifact},
};

/// Result of one facet selection.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Number of records matching the selection.
    pub count: usize,
    pub rows: Vec<AggregationRow>,
    pub artifact: RenderArtifact,
}

/// Runs Filter → Aggregate → Render over a loaded dataset.
/// Each call is a full, independent re-run; nothing is carried between calls.
#[derive(Debug, Clone)]
pub struct Explorer {
    dataset: Dataset,
    renderer: ChoroplethRenderer,
}

impl Explorer {
    pub fn new(dataset: Dataset, renderer: ChoroplethRenderer) -> Self {
        Self { dataset, renderer }
    }

    #[inline] pub fn dataset(&self) -> &Dataset { &self.dataset }

    #[inline] pub fn renderer(&self) -> &ChoroplethRenderer { &self.renderer }

    /// Choices for the owner-sex selector.
    pub fn owner_sex_options(&self) -> Vec<String> {
        owner_sex_options(self.dataset.records())
    }

    pub fn explore(&self, predicates: &Predicates) -> Snapshot {
        let filtered = RecordFilter::apply(self.dataset.records(), predicates);
        let rows = aggregate(filtered.records(), self.dataset.index());
        let artifact = self.renderer.render(self.dataset.features(), &rows);
        Snapshot { count: filtered.count(), rows, artifact }
    }
}
