#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ri_core::geo::Location;

pub const PROVIDENCE: Location = Location::new(41.8240, -71.4128);
pub const SOUTH_KINGSTOWN: Location = Location::new(41.3083, -71.4293);

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed_1a7e)
}

pub fn random_location(rng: &mut StdRng) -> Location {
    Location::new(rng.gen_range(-90.0..=90.0), rng.gen_range(-180.0..=180.0))
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}

fn to_unit_vector(location: Location) -> [f64; 3] {
    let lat = location.lat.to_radians();
    let lng = location.lng.to_radians();
    [lat.cos() * lng.cos(), lat.cos() * lng.sin(), lat.sin()]
}

fn from_unit_vector(v: [f64; 3]) -> Location {
    let lat = v[2].atan2((v[0] * v[0] + v[1] * v[1]).sqrt());
    let lng = v[1].atan2(v[0]);
    Location::new(lat.to_degrees(), lng.to_degrees())
}

/// Point a `fraction` of the way from `a` to `b` along their great circle.
pub fn intermediate_point(a: Location, b: Location, fraction: f64) -> Location {
    let va = to_unit_vector(a);
    let vb = to_unit_vector(b);
    let dot = (va[0] * vb[0] + va[1] * vb[1] + va[2] * vb[2]).clamp(-1.0, 1.0);
    let omega = dot.acos();
    let sin_omega = omega.sin();
    let wa = ((1.0 - fraction) * omega).sin() / sin_omega;
    let wb = (fraction * omega).sin() / sin_omega;
    from_unit_vector([
        wa * va[0] + wb * vb[0],
        wa * va[1] + wb * vb[1],
        wa * va[2] + wb * vb[2],
    ])
}
