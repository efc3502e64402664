//! Result of measuring between two selected points.

use crate::geo::{distance_miles, Location};
use crate::units::{format_rhode_islands, rhode_islands};

/// Distance between two locations, in miles and in Rhode Islands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub from: Location,
    pub to: Location,
    pub miles: f64,
    pub rhode_islands: f64,
}

impl Measurement {
    pub fn between(from: Location, to: Location) -> Self {
        let miles = distance_miles(from, to);
        Self {
            from,
            to,
            miles,
            rhode_islands: rhode_islands(miles),
        }
    }

    /// The count rounded to two decimals, e.g. `"0.74"`.
    pub fn formatted_count(&self) -> String {
        format_rhode_islands(self.rhode_islands)
    }

    /// Text shown in the result slot, e.g. `"Distance: 0.74 Rhode Islands"`.
    pub fn display_text(&self) -> String {
        format!("Distance: {} Rhode Islands", self.formatted_count())
    }
}
