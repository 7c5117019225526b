//! Fixtures shared by unit tests.

use crate::polyline::Polyline;
use crate::primitives::{LatLng, Point};
use rand::rngs::StdRng;
use rand::Rng;

/// Parses `"lat:lng, lat:lng, ..."` in degrees into points.
///
/// The empty string yields no points. Panics on malformed input.
pub(crate) fn parse_points(s: &str) -> Vec<Point> {
    s.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            let (lat, lng) = token
                .split_once(':')
                .unwrap_or_else(|| panic!("bad lat:lng token {token:?}"));
            let lat: f64 = lat.trim().parse().expect("latitude");
            let lng: f64 = lng.trim().parse().expect("longitude");
            LatLng::from_degrees(lat, lng).to_point()
        })
        .collect()
}

pub(crate) fn parse_polyline(s: &str) -> Polyline {
    Polyline::new(parse_points(s))
}

/// A point drawn uniformly from the cube `[-1, 1]^3`, then normalized.
pub(crate) fn random_point(rng: &mut StdRng) -> Point {
    loop {
        let x = rng.gen_range(-1.0..1.0);
        let y = rng.gen_range(-1.0..1.0);
        let z = rng.gen_range(-1.0..1.0);
        let norm2: f64 = x * x + y * y + z * z;
        if norm2 > 1e-6 && norm2 <= 1.0 {
            return Point::from_coords(x, y, z);
        }
    }
}
