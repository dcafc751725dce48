use std::{collections::BTreeSet, fmt, str::FromStr, sync::Arc};

use anyhow::bail;

use crate::types::DogSex;
use super::Record;

/// Owner-sex facet: no constraint, or equality with one observed category value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OwnerSexFilter {
    #[default]
    All,
    Equals(Arc<str>),
}

impl OwnerSexFilter {
    #[inline]
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Self::All => true,
            Self::Equals(value) => record.owner_sex == *value,
        }
    }
}

impl FromStr for OwnerSexFilter {
    type Err = std::convert::Infallible;

    /// `"All"` (any case) is the no-op variant; anything else is an exact category value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(if s.eq_ignore_ascii_case("all") { Self::All } else { Self::Equals(s.into()) })
    }
}

impl fmt::Display for OwnerSexFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Equals(value) => f.write_str(value),
        }
    }
}

/// Dog-sex facet as a closed set of choices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DogSexFilter {
    #[default]
    All,
    MalesOnly,
    FemalesOnly,
}

impl DogSexFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::MalesOnly, Self::FemalesOnly];

    #[inline]
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Self::All => true,
            Self::MalesOnly => record.dog_sex == DogSex::Male,
            Self::FemalesOnly => record.dog_sex == DogSex::Female,
        }
    }

    /// Label shown next to the choice.
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::MalesOnly => "Males only",
            Self::FemalesOnly => "Females only",
        }
    }
}

impl FromStr for DogSexFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let key: String = s.chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "all" => Ok(Self::All),
            "malesonly" | "males" | "male" => Ok(Self::MalesOnly),
            "femalesonly" | "females" | "female" => Ok(Self::FemalesOnly),
            _ => bail!("[records::facets] Unknown dog sex choice '{s}' (expected All, MalesOnly or FemalesOnly)"),
        }
    }
}

impl fmt::Display for DogSexFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.label()) }
}

/// Owner-sex choices: `"All"` followed by the sorted distinct values in `records`.
pub fn owner_sex_options(records: &[Record]) -> Vec<String> {
    let values: BTreeSet<&str> = records.iter().map(|record| &*record.owner_sex).collect();
    std::iter::once("All")
        .chain(values)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AreaCode;

    #[test]
    fn dog_sex_parses_ui_spellings() {
        for s in ["All", "all", " ALL "] {
            assert_eq!(s.parse::<DogSexFilter>().unwrap(), DogSexFilter::All);
        }
        for s in ["MalesOnly", "Males only", "males-only"] {
            assert_eq!(s.parse::<DogSexFilter>().unwrap(), DogSexFilter::MalesOnly);
        }
        for s in ["FemalesOnly", "Females only", "females_only"] {
            assert_eq!(s.parse::<DogSexFilter>().unwrap(), DogSexFilter::FemalesOnly);
        }
        assert!("puppies".parse::<DogSexFilter>().is_err());
    }

    #[test]
    fn owner_sex_all_is_no_op() {
        assert_eq!("All".parse::<OwnerSexFilter>().unwrap(), OwnerSexFilter::All);
        assert_eq!(
            "weiblich".parse::<OwnerSexFilter>().unwrap(),
            OwnerSexFilter::Equals("weiblich".into()),
        );
    }

    #[test]
    fn options_are_all_then_sorted_distinct() {
        let records = vec![
            Record::new("1", "weiblich", DogSex::Male, AreaCode(11)),
            Record::new("2", "männlich", DogSex::Male, AreaCode(11)),
            Record::new("3", "weiblich", DogSex::Female, AreaCode(12)),
        ];
        assert_eq!(owner_sex_options(&records), vec!["All", "männlich", "weiblich"]);
        assert_eq!(owner_sex_options(&[]), vec!["All"]);
    }

    #[test]
    fn labels() {
        let labels: Vec<_> = DogSexFilter::ALL.iter().map(DogSexFilter::label).collect();
        assert_eq!(labels, ["All", "Males only", "Females only"]);
    }
}
