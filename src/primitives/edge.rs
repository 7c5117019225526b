//! Geodesic edge between two points.

use super::Point;
use crate::angle::{Angle, ChordAngle};
use crate::distance::{distance_from_segment, project, update_max_distance, DistanceUpdate};
use crate::interpolate::interpolate;

/// The shorter great-circle arc from `v0` to `v1`.
///
/// Edges are plain values. They may be degenerate (`v0 == v1`); every
/// operation below has a defined answer in that case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub v0: Point,
    pub v1: Point,
}

impl Edge {
    /// Creates a new edge from two endpoints.
    #[inline]
    pub fn new(v0: Point, v1: Point) -> Self {
        Self { v0, v1 }
    }

    /// Returns the arc length of the edge.
    #[inline]
    pub fn length(self) -> Angle {
        self.v0.distance(self.v1)
    }

    /// Returns the point at fraction `t` of the way from `v0` to `v1`.
    ///
    /// - `t = 0` returns `v0`
    /// - `t = 1` returns `v1`
    /// - Values outside [0, 1] continue along the same great circle
    #[inline]
    pub fn point_at(self, t: f64) -> Point {
        interpolate(t, self.v0, self.v1)
    }

    /// Returns the point halfway along the edge.
    #[inline]
    pub fn midpoint(self) -> Point {
        self.point_at(0.5)
    }

    /// Returns the reversed edge (endpoints swapped).
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            v0: self.v1,
            v1: self.v0,
        }
    }

    /// Returns `true` if both endpoints are identical.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.v0 == self.v1
    }

    /// Returns the point on the edge closest to `x`.
    #[inline]
    pub fn closest_point(self, x: Point) -> Point {
        project(x, self.v0, self.v1)
    }

    /// Returns the minimum angular distance from `x` to the edge.
    #[inline]
    pub fn distance_to_point(self, x: Point) -> Angle {
        distance_from_segment(x, self.v0, self.v1)
    }

    /// Returns the maximum angular distance from `x` to any point of the edge.
    pub fn max_distance_to_point(self, x: Point) -> Angle {
        match update_max_distance(x, self.v0, self.v1, ChordAngle::NEGATIVE) {
            DistanceUpdate::Improved(d) => d.to_angle(),
            DistanceUpdate::Unchanged => Angle::ZERO,
        }
    }
}

impl From<(Point, Point)> for Edge {
    fn from((v0, v1): (Point, Point)) -> Self {
        Self::new(v0, v1)
    }
}
