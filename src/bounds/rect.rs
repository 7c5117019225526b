//! Latitude/longitude bounding rectangles.

use super::{ArcInterval, Interval};
use crate::angle::Angle;
use crate::consts::DBL_EPSILON;
use crate::primitives::{LatLng, Point, Vec3};
use std::f64::consts::{FRAC_PI_2, PI};

/// A closed rectangle in latitude/longitude space.
///
/// Longitudes may wrap through ±180°. A rectangle touching either pole
/// covers every longitude once passed through [`LatLngRect::polar_closure`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLngRect {
    pub lat: Interval,
    pub lng: ArcInterval,
}

impl LatLngRect {
    #[inline]
    pub fn new(lat: Interval, lng: ArcInterval) -> Self {
        Self { lat, lng }
    }

    #[inline]
    pub fn empty() -> Self {
        Self::new(Interval::empty(), ArcInterval::empty())
    }

    #[inline]
    pub fn full() -> Self {
        Self::new(full_lat(), ArcInterval::full())
    }

    /// The degenerate rectangle containing a single coordinate.
    pub fn from_lat_lng(ll: LatLng) -> Self {
        Self::new(
            Interval::from_point(ll.lat.radians()),
            ArcInterval::new(ll.lng.radians(), ll.lng.radians()),
        )
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.lat.is_empty()
    }

    #[inline]
    pub fn is_full(self) -> bool {
        self.lat == full_lat() && self.lng.is_full()
    }

    /// The south-west corner.
    pub fn lo(self) -> LatLng {
        LatLng::new(
            Angle::from_radians(self.lat.lo),
            Angle::from_radians(self.lng.lo),
        )
    }

    /// The north-east corner.
    pub fn hi(self) -> LatLng {
        LatLng::new(
            Angle::from_radians(self.lat.hi),
            Angle::from_radians(self.lng.hi),
        )
    }

    /// Returns the rectangle expanded to contain `ll`. Invalid coordinates
    /// are ignored.
    pub fn add_point(self, ll: LatLng) -> Self {
        if !ll.is_valid() {
            return self;
        }
        Self::new(
            self.lat.add_point(ll.lat.radians()),
            self.lng.add_point(ll.lng.radians()),
        )
    }

    pub fn union(self, other: Self) -> Self {
        Self::new(self.lat.union(other.lat), self.lng.union(other.lng))
    }

    pub fn intersects(self, other: Self) -> bool {
        self.lat.intersects(other.lat) && self.lng.intersects(other.lng)
    }

    pub fn contains_lat_lng(self, ll: LatLng) -> bool {
        if !ll.is_valid() {
            return false;
        }
        self.lat.contains(ll.lat.radians()) && self.lng.contains(ll.lng.radians())
    }

    /// Returns `true` if the rectangle contains the point's coordinates.
    #[inline]
    pub fn contains_point(self, p: Point) -> bool {
        self.contains_lat_lng(LatLng::from(p))
    }

    /// Returns the rectangle grown by `margin` (per axis), with latitude
    /// clamped to the poles.
    pub fn expanded(self, margin: LatLng) -> Self {
        let lat = self.lat.expanded(margin.lat.radians());
        let lng = self.lng.expanded(margin.lng.radians());
        if lat.is_empty() || lng.is_empty() {
            return Self::empty();
        }
        Self::new(lat.intersection(full_lat()), lng)
    }

    /// If the rectangle reaches a pole, extends it to every longitude.
    pub fn polar_closure(self) -> Self {
        if self.lat.lo == -FRAC_PI_2 || self.lat.hi == FRAC_PI_2 {
            return Self::new(self.lat, ArcInterval::full());
        }
        self
    }
}

impl Default for LatLngRect {
    fn default() -> Self {
        Self::empty()
    }
}

#[inline]
fn full_lat() -> Interval {
    Interval::new(-FRAC_PI_2, FRAC_PI_2)
}

/// Accumulates a bounding rectangle for a chain of geodesic edges.
///
/// Vertices are added in order; each new vertex extends the bound by the
/// edge from the previous one, including any latitude extremum the edge
/// reaches in its interior.
#[derive(Debug, Clone)]
pub struct RectBounder {
    a: Point,
    a_ll: LatLng,
    bound: LatLngRect,
}

impl RectBounder {
    pub fn new() -> Self {
        Self {
            a: Point::from_coords(1.0, 0.0, 0.0),
            a_ll: LatLng::default(),
            bound: LatLngRect::empty(),
        }
    }

    /// Adds the next vertex of the chain.
    pub fn add_point(&mut self, b: Point) {
        let b_ll = LatLng::from(b);
        if self.bound.is_empty() {
            self.a = b;
            self.a_ll = b_ll;
            self.bound = self.bound.add_point(b_ll);
            return;
        }

        // N = 2(A × B). Unlike the robust cross product this is zero for
        // identical or antipodal points.
        let (av, bv) = (self.a.vec(), b.vec());
        let n = (av - bv).cross(av + bv);
        let n_norm = n.magnitude();
        // Below this norm the direction of N is less accurate than 3.84ε.
        if n_norm < 1.91346e-15 {
            if av.dot(bv) < 0.0 {
                // Nearly antipodal: the edge could go anywhere.
                self.bound = LatLngRect::full();
            } else {
                // Nearly identical: the endpoint box suffices after padding.
                self.bound = self
                    .bound
                    .union(LatLngRect::from_lat_lng(self.a_ll).add_point(b_ll));
            }
            self.a = b;
            self.a_ll = b_ll;
            return;
        }

        let mut lng_ab = ArcInterval::empty()
            .add_point(self.a_ll.lng.radians())
            .add_point(b_ll.lng.radians());
        if lng_ab.length() >= PI - 2.0 * DBL_EPSILON {
            // Nearly opposite meridians: the edge may pass either pole.
            lng_ab = ArcInterval::full();
        }

        let mut lat_ab =
            Interval::from_point(self.a_ll.lat.radians()).add_point(b_ll.lat.radians());

        // The extremes of latitude lie on the plane through N and the z-axis.
        // M is normal to that plane; the edge crosses it iff A and B project
        // onto M with different signs.
        let m = n.cross(Vec3::unit_z());
        let m_a = m.dot(av);
        let m_b = m.dot(bv);
        let m_error = 6.06638e-16 * n_norm + 6.83174e-31;
        if m_a * m_b < 0.0 || m_a.abs() <= m_error || m_b.abs() <= m_error {
            // 90 degrees minus the latitude of N, padded by 3ε. The final
            // bound adds another 2ε.
            let max_lat = ((n.x * n.x + n.y * n.y).sqrt().atan2(n.z.abs()) + 3.0 * DBL_EPSILON)
                .min(FRAC_PI_2);

            // The latitude change available along an arc of length |AB|,
            // less what is spent getting from A to B, bounds the excursion.
            let lat_budget = 2.0 * (0.5 * (av - bv).magnitude() * max_lat.sin()).asin();
            let max_delta = 0.5 * (lat_budget - lat_ab.length()) + DBL_EPSILON;

            if m_a <= m_error && m_b >= -m_error {
                lat_ab.hi = max_lat.min(lat_ab.hi + max_delta);
            }
            if m_b <= m_error && m_a >= -m_error {
                lat_ab.lo = (-max_lat).max(lat_ab.lo - max_delta);
            }
        }
        self.a = b;
        self.a_ll = b_ll;
        self.bound = self.bound.union(LatLngRect::new(lat_ab, lng_ab));
    }

    /// Returns the bound of every edge added so far.
    ///
    /// Padded by 2ε in latitude so it contains the computed coordinates of
    /// every point on the edges, and closed over the poles.
    pub fn rect_bound(&self) -> LatLngRect {
        self.bound
            .expanded(LatLng::new(
                Angle::from_radians(2.0 * DBL_EPSILON),
                Angle::ZERO,
            ))
            .polar_closure()
    }
}

impl Default for RectBounder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn bound(points: &[Point]) -> LatLngRect {
        let mut b = RectBounder::new();
        for &p in points {
            b.add_point(p);
        }
        b.rect_bound()
    }

    #[test]
    fn test_empty_and_full() {
        assert!(LatLngRect::empty().is_empty());
        assert!(LatLngRect::full().is_full());
        assert!(RectBounder::new().rect_bound().is_empty());
        assert!(LatLngRect::full().contains_lat_lng(LatLng::from_degrees(-90.0, 180.0)));
    }

    #[test]
    fn test_add_point_and_union() {
        let r = LatLngRect::empty()
            .add_point(LatLng::from_degrees(10.0, 20.0))
            .add_point(LatLng::from_degrees(-5.0, 30.0));
        assert_relative_eq!(r.lo().lat.degrees(), -5.0, epsilon = 1e-12);
        assert_relative_eq!(r.hi().lng.degrees(), 30.0, epsilon = 1e-12);
        assert!(r.contains_lat_lng(LatLng::from_degrees(0.0, 25.0)));
        assert!(!r.contains_lat_lng(LatLng::from_degrees(0.0, 35.0)));
        let s = LatLngRect::from_lat_lng(LatLng::from_degrees(50.0, 25.0));
        assert!(!r.intersects(s));
        assert!(r.union(s).intersects(s));
        assert_eq!(r.add_point(LatLng::from_degrees(100.0, 0.0)), r);
    }

    #[test]
    fn test_polar_closure() {
        let r = LatLngRect::new(Interval::new(0.0, FRAC_PI_2), ArcInterval::new(0.0, 1.0));
        assert!(r.polar_closure().lng.is_full());
        let r = LatLngRect::new(Interval::new(0.0, 1.0), ArcInterval::new(0.0, 1.0));
        assert_eq!(r.polar_closure(), r);
    }

    #[test]
    fn test_edge_bound_reaches_interior_max_latitude() {
        // The great circle through these points peaks at 45 degrees north
        // half-way between them.
        let a = LatLng::from_degrees(0.0, -90.0).to_point();
        let peak = Point::from_coords(1.0, 0.0, 1.0);
        let b = LatLng::from_degrees(0.0, 90.0).to_point();
        let r = bound(&[a, peak]);
        assert!(r.lat.hi >= LatLng::from(peak).lat.radians());
        let r = bound(&[a, b]);
        // Exactly opposite meridians: every longitude and latitude is possible.
        assert!(r.lng.is_full());
        let r = bound(&[
            LatLng::from_degrees(0.0, -60.0).to_point(),
            LatLng::from_degrees(0.0, 60.0).to_point(),
        ]);
        assert!(r.lat.hi < 1e-14);
        assert!(r.lat.lo > -1e-14);
    }

    #[test]
    fn test_edge_bound_contains_interior_points() {
        let a = LatLng::from_degrees(10.0, -40.0).to_point();
        let b = LatLng::from_degrees(35.0, 60.0).to_point();
        let r = bound(&[a, b]);
        for k in 0..=20 {
            let p = crate::interpolate::interpolate(k as f64 / 20.0, a, b);
            assert!(r.contains_point(p), "{k}");
        }
    }

    #[test]
    fn test_identical_points() {
        let a = LatLng::from_degrees(12.0, 34.0).to_point();
        let r = bound(&[a, a]);
        assert!(r.contains_point(a));
        assert!(r.lat.length() < 1e-14);
    }
}
