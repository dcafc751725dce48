use tracing::debug;

use super::{DogSexFilter, OwnerSexFilter, Record};

/// Facet selection. Predicates compose with AND; the default selects everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predicates {
    pub owner_sex: OwnerSexFilter,
    pub dog_sex: DogSexFilter,
}

impl Predicates {
    pub fn new(owner_sex: OwnerSexFilter, dog_sex: DogSexFilter) -> Self {
        Self { owner_sex, dog_sex }
    }

    #[inline]
    pub fn matches(&self, record: &Record) -> bool {
        self.owner_sex.matches(record) && self.dog_sex.matches(record)
    }
}

/// Owned subset of the record set produced by a filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filtered {
    records: Vec<Record>,
}

impl Filtered {
    #[inline] pub fn records(&self) -> &[Record] { &self.records }

    /// Cardinality of the subset.
    #[inline] pub fn count(&self) -> usize { self.records.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.records.is_empty() }
}

impl FromIterator<Record> for Filtered {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self { records: iter.into_iter().collect() }
    }
}

/// Applies facet predicates to a record set without modifying it.
pub struct RecordFilter;

impl RecordFilter {
    /// Copy out every record matching `predicates`. An empty result is valid.
    pub fn apply(records: &[Record], predicates: &Predicates) -> Filtered {
        let filtered: Filtered = records.iter()
            .filter(|record| predicates.matches(record))
            .cloned()
            .collect();

        debug!(
            owner_sex = %predicates.owner_sex,
            dog_sex = %predicates.dog_sex,
            total = records.len(),
            matched = filtered.count(),
            "filtered records",
        );
        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AreaCode, DogSex};

    fn records() -> Vec<Record> {
        vec![
            Record::new("1", "M", DogSex::Male, AreaCode(11)),
            Record::new("2", "F", DogSex::Female, AreaCode(11)),
            Record::new("3", "M", DogSex::Female, AreaCode(12)),
        ]
    }

    #[test]
    fn default_predicates_keep_everything() {
        let all = records();
        let filtered = RecordFilter::apply(&all, &Predicates::default());
        assert_eq!(filtered.count(), 3);
        assert_eq!(filtered.records(), &all[..]);
    }

    #[test]
    fn owner_sex_equality() {
        let predicates = Predicates::new(OwnerSexFilter::Equals("M".into()), DogSexFilter::All);
        let filtered = RecordFilter::apply(&records(), &predicates);
        assert_eq!(filtered.count(), 2);
        assert!(filtered.records().iter().all(|r| &*r.owner_sex == "M"));
    }

    #[test]
    fn facets_compose_with_and() {
        let predicates = Predicates::new(OwnerSexFilter::Equals("M".into()), DogSexFilter::FemalesOnly);
        let filtered = RecordFilter::apply(&records(), &predicates);
        assert_eq!(filtered.count(), 1);
        assert_eq!(&*filtered.records()[0].owner_id, "3");

        let males = RecordFilter::apply(&records(), &Predicates::new(OwnerSexFilter::All, DogSexFilter::MalesOnly));
        assert_eq!(males.count(), 1);
    }

    #[test]
    fn unmatched_value_yields_empty_set() {
        let predicates = Predicates::new(OwnerSexFilter::Equals("X".into()), DogSexFilter::All);
        let filtered = RecordFilter::apply(&records(), &predicates);
        assert!(filtered.is_empty());
        assert_eq!(filtered.count(), 0);
    }

    #[test]
    fn other_dog_sex_only_matches_all() {
        let all = vec![Record::new("1", "M", DogSex::Other("unbekannt".into()), AreaCode(11))];
        assert_eq!(RecordFilter::apply(&all, &Predicates::default()).count(), 1);
        assert_eq!(RecordFilter::apply(&all, &Predicates::new(OwnerSexFilter::All, DogSexFilter::MalesOnly)).count(), 0);
        assert_eq!(RecordFilter::apply(&all, &Predicates::new(OwnerSexFilter::All, DogSexFilter::FemalesOnly)).count(), 0);
    }

    #[test]
    fn source_set_is_untouched() {
        let all = records();
        let before = all.clone();
        let mut filtered = RecordFilter::apply(&all, &Predicates::default());
        filtered.records.clear();
        assert_eq!(all, before);
    }
}
