//! Cells of the hierarchical cube-face subdivision.

use super::face::{face_uv_to_xyz, st_to_uv, valid_face_xyz_to_uv};
use super::CellKey;
use crate::bounds::Interval;
use crate::consts::DBL_EPSILON;
use crate::primitives::Point;

/// A quadrilateral region of the sphere bounded by four geodesic edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    key: CellKey,
    u: Interval,
    v: Interval,
}

impl Cell {
    /// Returns the cell for a key.
    pub fn from_key(key: CellKey) -> Self {
        let (i, j) = key.ij();
        let size = (1u64 << key.level()) as f64;
        let span = |k: u32| {
            Interval::new(
                st_to_uv(k as f64 / size),
                st_to_uv((k as f64 + 1.0) / size),
            )
        };
        Self {
            key,
            u: span(i),
            v: span(j),
        }
    }

    /// Returns the whole face as a level 0 cell. `None` if `face > 5`.
    pub fn from_face(face: u8) -> Option<Self> {
        CellKey::new(face, 0, 0, 0).map(Self::from_key)
    }

    /// Returns the cell at `level` containing `p`.
    pub fn from_point(p: Point, level: u8) -> Self {
        Self::from_key(CellKey::from_point(p, level))
    }

    #[inline]
    pub fn key(&self) -> CellKey {
        self.key
    }

    #[inline]
    pub fn face(&self) -> u8 {
        self.key.face()
    }

    #[inline]
    pub fn level(&self) -> u8 {
        self.key.level()
    }

    /// Returns the `k`-th vertex (mod 4), counter-clockwise from the
    /// lower-left corner in `(u, v)`.
    pub fn vertex(&self, k: usize) -> Point {
        let (u, v) = match k & 3 {
            0 => (self.u.lo, self.v.lo),
            1 => (self.u.hi, self.v.lo),
            2 => (self.u.hi, self.v.hi),
            _ => (self.u.lo, self.v.hi),
        };
        Point::from_vec(face_uv_to_xyz(self.face(), u, v))
    }

    /// Returns the centre of the cell.
    #[inline]
    pub fn center(&self) -> Point {
        self.key.center()
    }

    /// Returns `true` if the cell contains `p`, boundary included.
    ///
    /// Points on an edge shared by two cells are contained by both, and
    /// `Cell::from_point(p, level).contains_point(p)` always holds.
    pub fn contains_point(&self, p: Point) -> bool {
        // Points on other faces project outside [-1, 1], except on the
        // shared boundary.
        let Some((u, v)) = valid_face_xyz_to_uv(self.face(), p.vec()) else {
            return false;
        };
        self.u.expanded(DBL_EPSILON).contains(u) && self.v.expanded(DBL_EPSILON).contains(v)
    }
}
