//! Order-preserving vertex subsampling.
//!
//! Each output edge starts at a retained vertex and extends as far forward
//! as possible while every skipped vertex stays within the tolerance of the
//! new edge. Skipped vertices must also appear in order along the edge, so
//! a polyline that doubles back keeps its backtracking.

use super::Polyline;
use crate::angle::Angle;
use crate::bounds::ArcInterval;
use crate::primitives::Point;
use std::f64::consts::FRAC_PI_2;
use tracing::trace;

impl Polyline {
    /// Returns the indices of a subset of vertices such that the polyline
    /// through them stays within `tolerance` of the original.
    ///
    /// The first vertex is always retained, and so is the last unless it
    /// equals the vertex retained before it. Indices are strictly
    /// increasing and no two consecutive retained vertices are equal.
    /// A negative tolerance retains every vertex apart from such
    /// duplicates. No output edge spans more than 90 degrees unless the
    /// input edge it replaces already does.
    ///
    /// # Example
    ///
    /// ```
    /// use spherum::angle::Angle;
    /// use spherum::polyline::Polyline;
    /// use spherum::primitives::LatLng;
    ///
    /// let line = Polyline::from_lat_lngs(&[
    ///     LatLng::from_degrees(0.0, 1.0),
    ///     LatLng::from_degrees(0.0, 2.0),
    ///     LatLng::from_degrees(0.0, 3.0),
    /// ]);
    /// assert_eq!(line.subsample_vertices(Angle::from_degrees(1.0)), vec![0, 2]);
    /// ```
    pub fn subsample_vertices(&self, tolerance: Angle) -> Vec<usize> {
        let vertices = self.vertices();
        if vertices.is_empty() {
            return Vec::new();
        }

        let mut result = vec![0];
        if tolerance < Angle::ZERO {
            let mut last = vertices[0];
            for (i, &v) in vertices.iter().enumerate().skip(1) {
                if v != last {
                    result.push(i);
                    last = v;
                }
            }
        } else {
            let mut index = 0;
            while index + 1 < vertices.len() {
                let next = find_end_vertex(vertices, tolerance, index);
                if vertices[next] != vertices[index] {
                    result.push(next);
                }
                index = next;
            }
        }

        trace!(
            vertices = vertices.len(),
            retained = result.len(),
            tolerance = tolerance.radians(),
            "subsampled polyline"
        );
        result
    }
}

/// Returns the last vertex that can end an edge starting at `start`.
///
/// Tracks the wedge of ray directions from the start vertex that pass
/// within `tolerance` of every vertex seen so far, as an interval of
/// angles in the tangent plane. The result is always past `start`.
fn find_end_vertex(vertices: &[Point], tolerance: Angle, start: usize) -> usize {
    let origin = vertices[start];
    let frame = TangentFrame::at(origin);

    let mut wedge = ArcInterval::full();
    let mut last_distance = Angle::ZERO;

    let mut index = start + 1;
    while index < vertices.len() {
        let candidate = vertices[index];
        let distance = origin.distance(candidate);

        // New edges may not exceed 90 degrees, but original edges may.
        if distance.radians() > FRAC_PI_2 && last_distance > Angle::ZERO {
            break;
        }
        // Vertices must advance along the ray once clear of the start disc.
        if distance < last_distance && last_distance > tolerance {
            break;
        }
        last_distance = distance;

        // Vertices within the start disc do not constrain the direction.
        if distance <= tolerance {
            index += 1;
            continue;
        }

        // Stop as soon as the wedge misses this vertex, rather than
        // backtracking to the last vertex it held.
        let center = frame.direction_angle(candidate);
        if !wedge.contains(center) {
            break;
        }

        // Right spherical triangle between the origin, the candidate and a
        // tangent point of the tolerance cap: sin(A) = sin(a) / sin(c).
        let ratio = tolerance.radians().sin() / distance.radians().sin();
        let half_angle = ratio.min(1.0).asin();
        wedge = wedge.intersection(ArcInterval::from_point_pair(center, center).expanded(half_angle));
        index += 1;
    }
    index - 1
}

/// Tangent-plane axes at a point on the sphere.
struct TangentFrame {
    x: Point,
    y: Point,
}

impl TangentFrame {
    fn at(z: Point) -> Self {
        let y = z.ortho();
        let x = Point::from_vec_unchecked(y.cross(z));
        Self { x, y }
    }

    /// Angle of `p` around the frame's normal, in `[-π, π]`.
    fn direction_angle(&self, p: Point) -> f64 {
        p.dot(self.y).atan2(p.dot(self.x))
    }
}
