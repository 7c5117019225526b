//! Bounding, containment and intersection queries.

use super::Polyline;
use crate::bounds::{LatLngRect, RectBounder};
use crate::cell::Cell;
use crate::predicates::{Crossing, EdgeCrosser};
use crate::primitives::Point;

impl Polyline {
    /// Returns a latitude/longitude rectangle containing every edge.
    pub fn rect_bound(&self) -> LatLngRect {
        let mut bounder = RectBounder::new();
        for &v in self.vertices() {
            bounder.add_point(v);
        }
        bounder.rect_bound()
    }

    /// Always `false`: a polyline has no interior.
    #[inline]
    pub fn contains_point(&self, _p: Point) -> bool {
        false
    }

    /// Returns `true` if any edge of this polyline crosses any edge of
    /// `other`.
    ///
    /// Touching counts: a shared vertex, or a vertex lying on the other
    /// polyline's edge, is an intersection. Polylines without edges never
    /// intersect anything.
    pub fn intersects(&self, other: &Polyline) -> bool {
        if self.is_empty() {
            return false;
        }
        let Some(&first) = other.vertices().first() else {
            return false;
        };
        if !self.rect_bound().intersects(other.rect_bound()) {
            return false;
        }
        self.edges().any(|edge| {
            let mut crosser = EdgeCrosser::new_chain(edge.v0, edge.v1, first);
            other.vertices()[1..]
                .iter()
                .any(|&d| crosser.chain_crossing_sign(d) != Crossing::DoNotCross)
        })
    }

    /// Returns `true` if the polyline touches `cell`, boundary included.
    pub fn intersects_cell(&self, cell: &Cell) -> bool {
        let Some(&first) = self.vertices().first() else {
            return false;
        };
        // Vertex 0 alone decides containment when no edge crosses the cell
        // boundary, but vertex tests are cheap next to crossings.
        if self.vertices().iter().any(|&v| cell.contains_point(v)) {
            return true;
        }
        (0..4).any(|k| {
            let mut crosser = EdgeCrosser::new_chain(cell.vertex(k), cell.vertex(k + 1), first);
            self.vertices()[1..]
                .iter()
                .any(|&d| crosser.chain_crossing_sign(d) != Crossing::DoNotCross)
        })
    }
}
