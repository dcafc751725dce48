//! Per-area counts over a filtered record set.

use std::{collections::BTreeMap, sync::Arc};

use serde::Serialize;

use crate::{features::FeatureIndex, records::Record, types::AreaCode};

/// Count of filtered records sharing one area code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregationRow {
    pub area_code: AreaCode,
    /// Always at least 1.
    pub count: u64,
    /// `None` when the feature index has no entry for `area_code`.
    pub area_name: Option<Arc<str>>,
}

impl AggregationRow {
    /// Display name, falling back to `"Unknown"` for unmatched codes.
    pub fn display_name(&self) -> &str {
        self.area_name.as_deref().unwrap_or("Unknown")
    }
}

/// Group `records` by area code and count each group.
/// Rows come out in ascending area-code order, one per distinct code.
pub fn aggregate(records: &[Record], index: &FeatureIndex) -> Vec<AggregationRow> {
    let mut counts: BTreeMap<AreaCode, u64> = BTreeMap::new();
    for record in records {
        *counts.entry(record.area_code).or_default() += 1;
    }

    counts.into_iter()
        .map(|(area_code, count)| AggregationRow {
            area_code,
            count,
            area_name: index.resolve(area_code),
        })
        .collect()
}

/// Sum of all row counts.
#[inline]
pub fn total(rows: &[AggregationRow]) -> u64 {
    rows.iter().map(|row| row.count).sum()
}
