//! The polyline container and its accessors.

use crate::angle::Angle;
use crate::primitives::{Edge, LatLng, Point};

/// An ordered chain of geodesic edges, stored as its vertices.
///
/// Edge `i` runs from vertex `i` to vertex `i + 1`, so a polyline with `n`
/// vertices has `max(0, n - 1)` edges. A single vertex is a valid polyline
/// with no edges.
///
/// Construction does not check the vertices; call
/// [`Polyline::validate`] when the input is untrusted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    vertices: Vec<Point>,
}

impl Polyline {
    /// Creates a polyline from its vertices.
    #[inline]
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// Creates a polyline from latitude/longitude pairs.
    pub fn from_lat_lngs(lat_lngs: &[LatLng]) -> Self {
        lat_lngs.iter().map(|ll| ll.to_point()).collect()
    }

    /// Appends a vertex, adding an edge from the previous last vertex.
    #[inline]
    pub fn push(&mut self, p: Point) {
        self.vertices.push(p);
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns vertex `i`. Panics if out of range.
    #[inline]
    pub fn vertex(&self, i: usize) -> Point {
        self.vertices[i]
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Returns `true` if there are no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Returns edge `i`. Panics if `i >= num_edges()`.
    #[inline]
    pub fn edge(&self, i: usize) -> Edge {
        Edge::new(self.vertices[i], self.vertices[i + 1])
    }

    /// Iterates over the edges in order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices.windows(2).map(|w| Edge::new(w[0], w[1]))
    }

    /// Reverses the vertex order in place.
    #[inline]
    pub fn reverse(&mut self) {
        self.vertices.reverse();
    }

    /// Returns `true` if both polylines have the same number of vertices
    /// and corresponding vertices are within `max_error` of each other.
    pub fn approx_eq(&self, other: &Polyline, max_error: Angle) -> bool {
        self.vertices.len() == other.vertices.len()
            && self
                .vertices
                .iter()
                .zip(&other.vertices)
                .all(|(&a, &b)| a.approx_eq(b, max_error))
    }
}

impl From<Vec<Point>> for Polyline {
    fn from(vertices: Vec<Point>) -> Self {
        Self::new(vertices)
    }
}

impl FromIterator<Point> for Polyline {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
