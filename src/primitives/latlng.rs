//! Latitude/longitude coordinates.

use super::{Point, Vec3};
use crate::angle::Angle;
use std::f64::consts::{FRAC_PI_2, PI};

/// A point expressed as latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LatLng {
    pub lat: Angle,
    pub lng: Angle,
}

impl LatLng {
    #[inline]
    pub fn new(lat: Angle, lng: Angle) -> Self {
        Self { lat, lng }
    }

    /// Creates a coordinate pair from degrees.
    #[inline]
    pub fn from_degrees(lat: f64, lng: f64) -> Self {
        Self::new(Angle::from_degrees(lat), Angle::from_degrees(lng))
    }

    /// Returns `true` if latitude is within `[-90°, 90°]` and longitude
    /// within `[-180°, 180°]`.
    pub fn is_valid(self) -> bool {
        self.lat.radians().abs() <= FRAC_PI_2 && self.lng.radians().abs() <= PI
    }

    /// Converts to a point on the unit sphere.
    pub fn to_point(self) -> Point {
        let phi = self.lat.radians();
        let theta = self.lng.radians();
        let cos_phi = phi.cos();
        Point::from_vec_unchecked(Vec3::new(
            theta.cos() * cos_phi,
            theta.sin() * cos_phi,
            phi.sin(),
        ))
    }
}

impl From<Point> for LatLng {
    fn from(p: Point) -> Self {
        let v = p.vec();
        Self {
            lat: Angle::from_radians(v.z.atan2((v.x * v.x + v.y * v.y).sqrt())),
            lng: Angle::from_radians(v.y.atan2(v.x)),
        }
    }
}

impl From<LatLng> for Point {
    fn from(ll: LatLng) -> Self {
        ll.to_point()
    }
}
