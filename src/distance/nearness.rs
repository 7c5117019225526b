//! Whether one edge stays within a tolerance of another.

use super::point_edge::project_with_normal;
use crate::angle::Angle;
use crate::predicates::{robust_sign, Direction};
use crate::primitives::Point;
use std::f64::consts::PI;

/// Returns `true` if every point of edge `b0b1` lies within `tolerance` of
/// edge `a0a1`.
///
/// The relation is not symmetric: a short edge can be near a long one
/// without the converse holding. Checking the endpoints of B is not
/// enough, since two long edges with nearby endpoints can bow apart in
/// the middle. `tolerance` must be in `(0, 90°)`.
pub fn is_edge_b_near_edge_a(a0: Point, a1: Point, b0: Point, b1: Point, tolerance: Angle) -> bool {
    // The point of B furthest from A is b0, b1, or one of the two points
    // where circ(B) is furthest from circ(A). At those points the distance
    // between the circles is the angle between their planes.
    let mut a_ortho = Point::from_vec(a0.point_cross(a1));
    let a_nearest_b0 = project_with_normal(b0, a0, a1, a_ortho);
    let a_nearest_b1 = project_with_normal(b1, a0, a1, a_ortho);
    // Orient a_ortho along a_nearest_b0 × a_nearest_b1 so that oppositely
    // directed edges can still be near each other.
    if robust_sign(a_ortho, a_nearest_b0, a_nearest_b1) == Direction::Clockwise {
        a_ortho = -a_ortho;
    }

    if b0.distance(a_nearest_b0) > tolerance || b1.distance(a_nearest_b1) > tolerance {
        return false;
    }

    let b_ortho = Point::from_vec(b0.point_cross(b1));
    let planar_angle = a_ortho.distance(b_ortho);
    if planar_angle <= tolerance {
        return true;
    }

    // Close to 180 degrees the projection of a_ortho onto circ(B) vanishes.
    // Then B is near A only if both endpoints of B are nearest the same
    // endpoint of A.
    if planar_angle >= Angle::from_radians(PI - 0.01) {
        return (b0.distance(a0) < b0.distance(a1)) == (b1.distance(a0) < b1.distance(a1));
    }

    // The normalized projection of a_ortho onto the plane of circ(B) and its
    // antipode are where circ(B) is furthest from circ(A). B is not near A
    // if either of them lies on B.
    let furthest = Point::from_vec(a_ortho.vec() - b_ortho.vec() * a_ortho.dot(b_ortho));
    let furthest_inv = -furthest;
    let on_b = |p: Point| {
        robust_sign(b_ortho, b0, p) == Direction::CounterClockwise
            && robust_sign(p, b1, b_ortho) == Direction::CounterClockwise
    };
    !(on_b(furthest) || on_b(furthest_inv))
}
