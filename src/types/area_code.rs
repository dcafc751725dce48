use std::fmt;

use serde::{Deserialize, Serialize};

/// Integer key of a statistical quarter, shared by records and features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AreaCode(pub u32);

impl AreaCode {
    #[inline] pub fn get(self) -> u32 { self.0 }

    /// Interpret a JSON property value as an area code.
    /// Accepts unsigned integers and integral floats (`12.0`), rejects everything else.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        if let Some(v) = value.as_u64() {
            return u32::try_from(v).ok().map(Self);
        }
        value.as_f64()
            .filter(|v| v.is_finite() && v.fract() == 0.0 && *v >= 0.0 && *v <= u32::MAX as f64)
            .map(|v| Self(v as u32))
    }

    /// Interpret a CSV cell as an area code, with the same rules as [`Self::from_json`].
    pub fn from_text(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Ok(v) = text.parse::<u32>() {
            return Some(Self(v));
        }
        text.parse::<f64>().ok()
            .filter(|v| v.is_finite() && v.fract() == 0.0 && *v >= 0.0 && *v <= u32::MAX as f64)
            .map(|v| Self(v as u32))
    }
}

impl From<u32> for AreaCode {
    fn from(value: u32) -> Self { Self(value) }
}

impl fmt::Display for AreaCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}
