//! Geographic locations and great-circle distance.
//!
//! Distances are computed on a sphere with the haversine formula. Coordinates
//! are taken as given: nothing here validates or wraps latitude/longitude.

/// Mean Earth radius used for all distance calculations, in miles.
pub const EARTH_RADIUS_MILES: f64 = 3963.19;

/// Largest possible great-circle distance (half the circumference), in miles.
pub const MAX_DISTANCE_MILES: f64 = std::f64::consts::PI * EARTH_RADIUS_MILES;

/// A point on the map in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn distance_miles_to(&self, other: &Location) -> f64 {
        distance_miles(*self, *other)
    }
}

impl From<(f64, f64)> for Location {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

/// Haversine distance between two locations, in miles.
pub fn distance_miles(a: Location, b: Location) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = lat2 - lat1;
    let dlon = (b.lng - a.lng).to_radians();
    let sin_dlat = (dlat * 0.5).sin();
    let sin_dlon = (dlon * 0.5).sin();
    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;
    // Rounding can push h a hair past 1 for antipodal points.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_MILES * c
}
