//! Interpolation along great circles.

use crate::angle::Angle;
use crate::primitives::Point;

/// Returns the point a fraction `t` of the way from `a` to `b`.
///
/// `t = 0` returns `a` and `t = 1` returns `b`. Other values are measured
/// as arc length along the great circle through `a` and `b`, so values
/// outside `[0, 1]` extrapolate past either end and wrap around the circle.
/// A degenerate edge (`a == b`) returns `a` for every `t`.
pub fn interpolate(t: f64, a: Point, b: Point) -> Point {
    if t == 0.0 || a == b {
        return a;
    }
    if t == 1.0 {
        return b;
    }
    interpolate_at_distance(a.distance(b) * t, a, b)
}

/// Returns the point at arc length `ax` from `a` along the great circle
/// towards `b`.
///
/// The tangent at `a` comes from the robust cross product, so it stays
/// perpendicular to `a` even when `b` is equal or antipodal to it. The
/// result is renormalized so repeated calls do not drift off the sphere.
pub fn interpolate_at_distance(ax: Angle, a: Point, b: Point) -> Point {
    let rad = ax.radians();
    let normal = a.point_cross(b);
    let tangent = normal.cross(a.vec());
    Point::from_vec(a.vec() * rad.cos() + tangent.normalize() * rad.sin())
}
