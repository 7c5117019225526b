//! Distance from a point to an edge.
//!
//! Distances are carried as [`ChordAngle`]s. The update functions take the
//! best bound found so far and report whether the edge beats it, which lets
//! callers scanning many edges skip most of the work once a good bound is
//! known.

use crate::angle::{Angle, ChordAngle};
use crate::consts::DBL_EPSILON;
use crate::primitives::Point;
use crate::predicates::sign;

/// Outcome of a distance update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistanceUpdate {
    /// The edge does not beat the current bound.
    Unchanged,
    /// The edge beats the current bound; carries the new bound.
    Improved(ChordAngle),
}

impl DistanceUpdate {
    /// Returns `true` if the bound was improved.
    #[inline]
    pub fn is_improved(self) -> bool {
        matches!(self, DistanceUpdate::Improved(_))
    }

    /// Returns the new bound, if any.
    #[inline]
    pub fn value(self) -> Option<ChordAngle> {
        match self {
            DistanceUpdate::Improved(d) => Some(d),
            DistanceUpdate::Unchanged => None,
        }
    }

    /// Returns the new bound, or `current` if unchanged.
    #[inline]
    pub fn or(self, current: ChordAngle) -> ChordAngle {
        self.value().unwrap_or(current)
    }
}

/// Returns the point on edge `ab` closest to `x`.
///
/// The result is unit length. For a degenerate edge the result is `a`.
/// When `x` is equally close to both endpoints and outside the edge's
/// interior, either endpoint may be returned.
pub fn project(x: Point, a: Point, b: Point) -> Point {
    project_with_normal(x, a, b, Point::from_vec_unchecked(a.point_cross(b)))
}

/// Like [`project`], with a precomputed edge normal `a_cross_b` (any
/// positive multiple of `a × b`).
pub(crate) fn project_with_normal(x: Point, a: Point, b: Point, a_cross_b: Point) -> Point {
    // Endpoints project onto themselves exactly.
    if x == a || x == b {
        return x;
    }
    let n = a_cross_b.vec();
    let p = x.vec() - n * (x.vec().dot(n) / n.magnitude_squared());
    let p = Point::from_vec_unchecked(p);
    if sign(a_cross_b, a, p) && sign(p, b, a_cross_b) {
        return Point::from_vec(p.vec());
    }
    if (x.vec() - a.vec()).magnitude_squared() <= (x.vec() - b.vec()).magnitude_squared() {
        a
    } else {
        b
    }
}

/// Returns the angular distance from `x` to edge `ab`.
pub fn distance_from_segment(x: Point, a: Point, b: Point) -> Angle {
    min_distance(x, a, b, ChordAngle::ZERO, true)
        .or(ChordAngle::ZERO)
        .to_angle()
}

/// Returns `true` if the distance from `x` to edge `ab` is less than `limit`.
#[inline]
pub fn is_distance_less(x: Point, a: Point, b: Point, limit: ChordAngle) -> bool {
    update_min_distance(x, a, b, limit).is_improved()
}

/// Tests whether the distance from `x` to edge `ab` is less than
/// `min_dist`, returning the smaller distance if so.
///
/// Never reports `Improved` with a value that is not strictly smaller than
/// `min_dist`. The interior test is conservative, so a true distance below
/// `min_dist` is never missed by more than
/// [`min_update_distance_max_error`].
#[inline]
pub fn update_min_distance(x: Point, a: Point, b: Point, min_dist: ChordAngle) -> DistanceUpdate {
    min_distance(x, a, b, min_dist, false)
}

/// Tests whether the distance from `x` to edge `ab` is greater than
/// `max_dist`, returning the larger distance if so.
pub fn update_max_distance(x: Point, a: Point, b: Point, max_dist: ChordAngle) -> DistanceUpdate {
    let mut dist = ChordAngle::between_points(x, a).max(ChordAngle::between_points(x, b));
    if dist > ChordAngle::RIGHT {
        // The farthest point is antipodal to the closest point of -x.
        let near = min_distance(-x, a, b, dist, true).or(dist);
        dist = ChordAngle::from_squared_length(ChordAngle::STRAIGHT.length2() - near.length2());
    }
    if max_dist < dist {
        DistanceUpdate::Improved(dist)
    } else {
        DistanceUpdate::Unchanged
    }
}

/// Like [`update_min_distance`], but only considers points in the interior
/// of the edge. Endpoints never count.
#[inline]
pub fn update_min_interior_distance(
    x: Point,
    a: Point,
    b: Point,
    min_dist: ChordAngle,
) -> DistanceUpdate {
    interior_distance(x, a, b, min_dist, false)
}

/// Returns `true` if the distance from `x` to the interior of edge `ab` is
/// less than `limit`.
#[inline]
pub fn is_interior_distance_less(x: Point, a: Point, b: Point, limit: ChordAngle) -> bool {
    update_min_interior_distance(x, a, b, limit).is_improved()
}

/// Returns `|xa| / (|xa| + |xb|)`, the fraction along `ab` nearest to `x`
/// when `x` lies on the edge.
pub fn distance_fraction(x: Point, a: Point, b: Point) -> f64 {
    let da = x.distance(a).radians();
    let db = x.distance(b).radians();
    da / (da + db)
}

/// Maximum error in a distance computed by [`update_min_distance`], as an
/// error in squared chord length.
pub fn min_update_distance_max_error(dist: ChordAngle) -> f64 {
    min_update_interior_distance_max_error(dist).max(dist.max_point_error())
}

/// Maximum error in a distance computed by [`update_min_interior_distance`],
/// as an error in squared chord length.
pub fn min_update_interior_distance_max_error(dist: ChordAngle) -> f64 {
    // Beyond 90 degrees the closest point is always an endpoint.
    if dist >= ChordAngle::RIGHT {
        return 0.0;
    }
    // Components of the chord perpendicular (a) and parallel (b) to the
    // plane of the edge.
    let b = (0.5 * dist.length2()).min(1.0);
    let a = (b * (2.0 - b)).sqrt();
    let sqrt3 = 3f64.sqrt();
    ((2.5 + 2.0 * sqrt3 + 8.5 * a) * a
        + (2.0 + 2.0 * sqrt3 / 3.0 + 6.5 * (1.0 - b)) * b
        + (23.0 + 16.0 / sqrt3) * DBL_EPSILON)
        * DBL_EPSILON
}

/// Minimum distance to the edge, interior first and then the endpoints.
/// With `always_update` the distance is returned even if it does not beat
/// `min_dist`.
pub(crate) fn min_distance(
    x: Point,
    a: Point,
    b: Point,
    min_dist: ChordAngle,
    always_update: bool,
) -> DistanceUpdate {
    if let DistanceUpdate::Improved(d) = interior_distance(x, a, b, min_dist, always_update) {
        return DistanceUpdate::Improved(d);
    }
    let xa2 = (x.vec() - a.vec()).magnitude_squared();
    let xb2 = (x.vec() - b.vec()).magnitude_squared();
    let dist = ChordAngle::from_squared_length(xa2.min(xb2));
    if !always_update && dist >= min_dist {
        return DistanceUpdate::Unchanged;
    }
    DistanceUpdate::Improved(dist)
}

fn interior_distance(
    x: Point,
    a: Point,
    b: Point,
    min_dist: ChordAngle,
    always_update: bool,
) -> DistanceUpdate {
    let (xv, av, bv) = (x.vec(), a.vec(), b.vec());
    let xa2 = (xv - av).magnitude_squared();
    let xb2 = (xv - bv).magnitude_squared();

    // The closest point can only be interior if the planar angles XAB and
    // XBA are both acute, i.e. |XA² - XB²| < AB². The bound absorbs the
    // normalization error of the inputs and the rounding of the test.
    let ab2 = (av - bv).magnitude_squared();
    let max_error = 4.75 * DBL_EPSILON * (xa2 + xb2 + ab2) + 8.0 * DBL_EPSILON * DBL_EPSILON;
    if (xa2 - xb2).abs() >= ab2 + max_error {
        return DistanceUpdate::Unchanged;
    }

    // XQ² = (X·C)² / |C|², with Q the projection of X onto the plane of AB,
    // is a lower bound on the chord distance.
    let c = a.point_cross(b);
    let c2 = c.magnitude_squared();
    let x_dot_c = xv.dot(c);
    let x_dot_c2 = x_dot_c * x_dot_c;
    if !always_update && x_dot_c2 > c2 * min_dist.length2() {
        return DistanceUpdate::Unchanged;
    }

    // Exact wedge test for the interior case.
    let cx = c.cross(xv);
    if (av - xv).dot(cx) >= 0.0 || (bv - xv).dot(cx) <= 0.0 {
        return DistanceUpdate::Unchanged;
    }

    // XR² = XQ² + QR², with R the closest point on the great circle.
    let qr = 1.0 - (cx.magnitude_squared() / c2).sqrt();
    let dist = ChordAngle::from_squared_length(x_dot_c2 / c2 + qr * qr);
    if !always_update && dist >= min_dist {
        return DistanceUpdate::Unchanged;
    }
    DistanceUpdate::Improved(dist)
}
