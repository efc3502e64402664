//! The "Rhode Island" reference unit.

/// Length of one Rhode Island, in miles.
pub const RHODE_ISLAND_LENGTH_MILES: f64 = 48.0;

/// Convert a distance in miles into a count of Rhode Islands.
pub fn rhode_islands(miles: f64) -> f64 {
    miles / RHODE_ISLAND_LENGTH_MILES
}

/// Two-decimal rendering used wherever a count is shown to the user.
pub fn format_rhode_islands(count: f64) -> String {
    format!("{:.2}", count)
}
