use std::sync::Arc;

use crate::types::{AreaCode, DogSex};

/// One dog-owner registration event.
///
/// Fields are cheap to clone so derived views can own their rows
/// without touching the loaded table.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Count subject; not unique across record years.
    pub owner_id: Arc<str>,
    pub owner_sex: Arc<str>,
    pub dog_sex: DogSex,
    pub area_code: AreaCode,

    // Descriptive attributes, unused by filtering and aggregation.
    pub area_label: Option<Arc<str>>,
    pub breed: Option<Arc<str>>,
    pub dog_birth_year: Option<i32>,
    pub dog_color: Option<Arc<str>>,
    pub record_year: Option<i32>,
}

impl Record {
    /// Record with only the attributes the core reads.
    pub fn new(owner_id: impl Into<Arc<str>>, owner_sex: impl Into<Arc<str>>, dog_sex: DogSex, area_code: AreaCode) -> Self {
        Self {
            owner_id: owner_id.into(),
            owner_sex: owner_sex.into(),
            dog_sex,
            area_code,
            area_label: None,
            breed: None,
            dog_birth_year: None,
            dog_color: None,
            record_year: None,
        }
    }
}
