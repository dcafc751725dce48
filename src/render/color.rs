//! Continuous color scales for choropleth fills.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }

    /// Format as `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear blend towards `other` at `t` in [0, 1].
    fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| -> u8 {
            (a as f64 + (b as f64 - a as f64) * t)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Rgb { r: mix(self.r, other.r), g: mix(self.g, other.g), b: mix(self.b, other.b) }
    }
}

impl fmt::Display for Rgb {
    /// Format as CSS: rgb(r,g,b)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

// ColorBrewer RdYlGn, reversed: green for low values, red for high.
const RD_YL_GN_R: &[Rgb] = &[
    Rgb::new(  0, 104,  55),
    Rgb::new( 26, 152,  80),
    Rgb::new(102, 189,  99),
    Rgb::new(166, 217, 106),
    Rgb::new(217, 239, 139),
    Rgb::new(255, 255, 191),
    Rgb::new(254, 224, 139),
    Rgb::new(253, 174,  97),
    Rgb::new(244, 109,  67),
    Rgb::new(215,  48,  39),
    Rgb::new(165,   0,  38),
];

// Light (#deebf7) to dark (#08519c) blue.
const BLUES: &[Rgb] = &[
    Rgb::new(0xde, 0xeb, 0xf7),
    Rgb::new(0x08, 0x51, 0x9c),
];

/// Named continuous color scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorScale {
    #[default]
    #[serde(rename = "RdYlGn_r")]
    RdYlGnR,
    Blues,
}

impl ColorScale {
    /// Evenly spaced color stops from low to high.
    pub fn stops(&self) -> &'static [Rgb] {
        match self {
            Self::RdYlGnR => RD_YL_GN_R,
            Self::Blues => BLUES,
        }
    }

    /// Sample the scale at `t`; out-of-range and NaN positions clamp to the ends.
    pub fn sample(&self, t: f64) -> Rgb {
        let stops = self.stops();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        let segments = (stops.len() - 1) as f64;
        let position = t * segments;
        let lower = (position.floor() as usize).min(stops.len() - 2);
        stops[lower].lerp(stops[lower + 1], position - lower as f64)
    }

    /// `[[position, "rgb(..)"], ...]` pairs for chart libraries.
    pub fn to_stop_list(&self) -> Vec<(f64, String)> {
        let stops = self.stops();
        let segments = (stops.len() - 1) as f64;
        stops.iter().enumerate()
            .map(|(i, color)| (i as f64 / segments, color.to_string()))
            .collect()
    }
}
