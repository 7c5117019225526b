//! Length, centroid, projection and parametrization along a polyline.

use super::Polyline;
use crate::angle::Angle;
use crate::distance::{distance_from_segment, project};
use crate::interpolate::interpolate_at_distance;
use crate::predicates::{ordered_ccw, sign};
use crate::primitives::{Point, Vec3};

impl Polyline {
    /// Returns the total arc length.
    pub fn length(&self) -> Angle {
        self.edges()
            .fold(Angle::ZERO, |sum, edge| sum + edge.length())
    }

    /// Returns the true centroid multiplied by the length.
    ///
    /// The result is a plain vector sum of per-edge centroids and is not
    /// unit length. Callers wanting a direction normalize it; a magnitude
    /// near zero means the polyline doubles back on itself (a closed great
    /// circle, for example).
    pub fn centroid(&self) -> Vec3<f64> {
        self.edges().fold(Vec3::zero(), |sum, edge| {
            sum + edge_true_centroid(edge.v0, edge.v1)
        })
    }

    /// Returns the point a `fraction` of the way along the polyline,
    /// measured by arc length, and the index of the next vertex after it.
    ///
    /// Fractions at or below 0 return the first vertex, and at or above 1
    /// the last. If the result lands exactly on a vertex, the returned
    /// index is the one after that vertex. `None` if the polyline is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use spherum::polyline::Polyline;
    /// use spherum::primitives::Point;
    ///
    /// let line = Polyline::new(vec![
    ///     Point::from_coords(1.0, 0.0, 0.0),
    ///     Point::from_coords(0.0, 1.0, 0.0),
    /// ]);
    /// let (mid, next) = line.interpolate(0.5).unwrap();
    /// assert!((mid.x() - mid.y()).abs() < 1e-15);
    /// assert_eq!(next, 1);
    /// ```
    pub fn interpolate(&self, fraction: f64) -> Option<(Point, usize)> {
        let vertices = self.vertices();
        let (&first, &last) = (vertices.first()?, vertices.last()?);
        if fraction <= 0.0 {
            return Some((first, 1));
        }

        // Fractions at or above 1 fall through the loop, which also absorbs
        // rounding in the accumulated length.
        let mut target = self.length() * fraction;
        for (i, edge) in self.edges().enumerate() {
            let length = edge.length();
            if target < length {
                let result = interpolate_at_distance(target, edge.v0, edge.v1);
                let next = if result == edge.v1 { i + 2 } else { i + 1 };
                return Some((result, next));
            }
            target = target - length;
        }
        Some((last, vertices.len()))
    }

    /// Inverse of [`Polyline::interpolate`]: returns the fraction of the
    /// total length at which `point` lies, given the index of the vertex
    /// following it.
    ///
    /// `point` need not lie exactly on the polyline. The result is clamped
    /// to at most 1. Polylines with fewer than two vertices, or of zero
    /// length, return 0.
    pub fn uninterpolate(&self, point: Point, next_vertex: usize) -> f64 {
        let vertices = self.vertices();
        if vertices.len() < 2 {
            return 0.0;
        }
        let next_vertex = next_vertex.clamp(1, vertices.len());

        let mut sum = Angle::ZERO;
        for edge in self.edges().take(next_vertex - 1) {
            sum = sum + edge.length();
        }
        let length_to_point = sum + vertices[next_vertex - 1].distance(point);
        for edge in self.edges().skip(next_vertex - 1) {
            sum = sum + edge.length();
        }
        if sum == Angle::ZERO {
            return 0.0;
        }
        (length_to_point.radians() / sum.radians()).min(1.0)
    }

    /// Returns the point on the polyline closest to `point` and the index
    /// of the next vertex after it.
    ///
    /// When the closest point is a vertex, the index is the one after that
    /// vertex. `None` if the polyline is empty.
    pub fn project(&self, point: Point) -> Option<(Point, usize)> {
        let vertices = self.vertices();
        match vertices.len() {
            0 => return None,
            1 => return Some((vertices[0], 1)),
            _ => {}
        }

        let mut min_dist = Angle::INFINITY;
        let mut min_index = 1;
        for (i, edge) in self.edges().enumerate() {
            let dist = distance_from_segment(point, edge.v0, edge.v1);
            if dist < min_dist {
                min_dist = dist;
                min_index = i + 1;
            }
        }

        let closest = project(point, vertices[min_index - 1], vertices[min_index]);
        if closest == vertices[min_index] {
            min_index += 1;
        }
        Some((closest, min_index))
    }

    /// Returns `true` if `point` lies to the right of the polyline, in the
    /// neighbourhood of its closest point.
    ///
    /// Vertices of the polyline are never on the right. `None` for
    /// polylines with fewer than two vertices, which have no direction.
    pub fn is_on_right(&self, point: Point) -> Option<bool> {
        let vertices = self.vertices();
        let n = vertices.len();
        if n < 2 {
            return None;
        }
        let (closest, mut next) = self.project(point)?;

        // Closest point is an interior vertex C with neighbours B and D:
        // the point is on the right if B, P, D are counter-clockwise
        // around C.
        if closest == vertices[next - 1] && next > 1 && next < n {
            if point == vertices[next - 1] {
                return Some(false);
            }
            return Some(ordered_ccw(
                vertices[next - 2],
                point,
                vertices[next],
                vertices[next - 1],
            ));
        }

        // Otherwise exactly one edge is incident to the closest point.
        if next == n {
            next -= 1;
        }
        Some(sign(point, vertices[next], vertices[next - 1]))
    }
}

/// Returns the centroid of edge `ab` multiplied by its length.
///
/// The vector points towards the midpoint of the edge. Exactly antipodal
/// edges have no defined midpoint and contribute zero.
pub(crate) fn edge_true_centroid(a: Point, b: Point) -> Vec3<f64> {
    // |a - b| = 2 sin(θ/2) and |a + b| = 2 cos(θ/2).
    let diff = a.vec() - b.vec();
    let sum = a.vec() + b.vec();
    let sin2 = diff.magnitude_squared();
    let cos2 = sum.magnitude_squared();
    if cos2 == 0.0 {
        return Vec3::zero();
    }
    sum * (sin2 / cos2).sqrt()
}
