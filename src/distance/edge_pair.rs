//! Distances between two edges.

use super::point_edge::{min_distance, project, update_max_distance, update_min_distance};
use super::DistanceUpdate;
use crate::angle::ChordAngle;
use crate::predicates::{crossing_sign, intersection, Crossing};
use crate::primitives::Point;

/// Tests whether the minimum distance between edges `a0a1` and `b0b1` is
/// less than `min_dist`, returning the smaller distance if so.
///
/// Edges whose interiors cross have distance zero.
pub fn update_edge_pair_min_distance(
    a0: Point,
    a1: Point,
    b0: Point,
    b1: Point,
    min_dist: ChordAngle,
) -> DistanceUpdate {
    if min_dist == ChordAngle::ZERO {
        return DistanceUpdate::Unchanged;
    }
    if crossing_sign(a0, a1, b0, b1) == Crossing::Cross {
        return DistanceUpdate::Improved(ChordAngle::ZERO);
    }
    // Otherwise the minimum is attained at an endpoint of at least one edge.
    // All four candidates are checked.
    fold_updates(
        min_dist,
        [(a0, b0, b1), (a1, b0, b1), (b0, a0, a1), (b1, a0, a1)],
        update_min_distance,
    )
}

/// Tests whether the maximum distance between edges `a0a1` and `b0b1` is
/// greater than `max_dist`, returning the larger distance if so.
///
/// If one edge crosses the antipodal reflection of the other, the maximum
/// distance is 180 degrees.
pub fn update_edge_pair_max_distance(
    a0: Point,
    a1: Point,
    b0: Point,
    b1: Point,
    max_dist: ChordAngle,
) -> DistanceUpdate {
    if max_dist == ChordAngle::STRAIGHT {
        return DistanceUpdate::Unchanged;
    }
    if crossing_sign(a0, a1, -b0, -b1) == Crossing::Cross {
        return DistanceUpdate::Improved(ChordAngle::STRAIGHT);
    }
    fold_updates(
        max_dist,
        [(a0, b0, b1), (a1, b0, b1), (b0, a0, a1), (b1, a0, a1)],
        update_max_distance,
    )
}

/// Returns the pair of points, one on each edge, that realize the minimum
/// distance between edges `a0a1` and `b0b1`.
///
/// Crossing edges return their intersection twice. When several endpoint
/// pairs are equally close, any one of them may be returned.
pub fn edge_pair_closest_points(a0: Point, a1: Point, b0: Point, b1: Point) -> (Point, Point) {
    if crossing_sign(a0, a1, b0, b1) == Crossing::Cross {
        let x = intersection(a0, a1, b0, b1);
        return (x, x);
    }
    // Find which vertex/edge pair is closest, then project only once.
    let queries = [(a0, b0, b1), (a1, b0, b1), (b0, a0, a1), (b1, a0, a1)];
    let mut best = min_distance(a0, b0, b1, ChordAngle::ZERO, true).or(ChordAngle::INFINITY);
    let mut closest = 0;
    for (i, &(x, a, b)) in queries.iter().enumerate().skip(1) {
        if let DistanceUpdate::Improved(d) = update_min_distance(x, a, b, best) {
            best = d;
            closest = i;
        }
    }
    let (x, a, b) = queries[closest];
    if closest < 2 {
        (x, project(x, a, b))
    } else {
        (project(x, a, b), x)
    }
}

fn fold_updates(
    start: ChordAngle,
    queries: [(Point, Point, Point); 4],
    update: fn(Point, Point, Point, ChordAngle) -> DistanceUpdate,
) -> DistanceUpdate {
    let mut dist = start;
    let mut improved = false;
    for (x, a, b) in queries {
        if let DistanceUpdate::Improved(d) = update(x, a, b, dist) {
            dist = d;
            improved = true;
        }
    }
    if improved {
        DistanceUpdate::Improved(dist)
    } else {
        DistanceUpdate::Unchanged
    }
}
