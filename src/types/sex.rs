use std::sync::Arc;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Dog sex, resolved once from the dataset's own category literals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DogSex {
    Male,
    Female,
    /// A literal outside the configured vocabulary (kept verbatim).
    Other(Arc<str>),
}

/// The literal category values the dataset uses for the dog-sex facet.
/// These are matched exactly and never translated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DogSexVocabulary {
    pub male: Arc<str>,
    pub female: Arc<str>,
}

impl Default for DogSexVocabulary {
    fn default() -> Self {
        Self { male: "männlich".into(), female: "weiblich".into() }
    }
}

impl DogSexVocabulary {
    /// Classify a single literal.
    pub fn classify(&self, literal: &str) -> DogSex {
        let literal = literal.trim();
        if literal == &*self.male { DogSex::Male }
        else if literal == &*self.female { DogSex::Female }
        else { DogSex::Other(literal.into()) }
    }

    /// Resolve every distinct literal of an observed category domain once.
    pub fn resolve<'a>(&self, observed: impl IntoIterator<Item = &'a str>) -> AHashMap<Arc<str>, DogSex> {
        let mut domain: AHashMap<Arc<str>, DogSex> = AHashMap::new();
        for literal in observed {
            if !domain.contains_key(literal) {
                domain.insert(Arc::from(literal), self.classify(literal));
            }
        }

        if !domain.is_empty() {
            if !domain.values().any(|sex| *sex == DogSex::Male) {
                tracing::warn!(literal = %self.male, "male dog-sex literal not present in data");
            }
            if !domain.values().any(|sex| *sex == DogSex::Female) {
                tracing::warn!(literal = %self.female, "female dog-sex literal not present in data");
            }
        }

        domain
    }
}
