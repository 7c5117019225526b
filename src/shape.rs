//! Edge-iteration view of geometry.
//!
//! A [`Shape`] exposes a collection of edges grouped into chains, which is
//! the contract spatial indexes consume. Implementors compute everything on
//! demand from their own storage.

use crate::primitives::{Edge, Point};

/// A contiguous run of edges: edges `start..start + length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chain {
    pub start: usize,
    pub length: usize,
}

/// Location of an edge as `(chain, offset within chain)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainPosition {
    pub chain_id: usize,
    pub offset: usize,
}

/// A point together with whether the shape contains it.
///
/// Lets point-in-shape queries count crossings from a known starting
/// state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePoint {
    pub point: Point,
    pub contained: bool,
}

impl ReferencePoint {
    /// The reference point at [`Point::origin`].
    pub fn origin(contained: bool) -> Self {
        Self {
            point: Point::origin(),
            contained,
        }
    }
}

/// A collection of edges organized into chains.
pub trait Shape {
    /// Number of edges.
    fn num_edges(&self) -> usize;

    /// Returns edge `id`. Panics if `id >= num_edges()`.
    fn edge(&self, id: usize) -> Edge;

    /// Returns a point and whether the shape contains it. Shapes without
    /// an interior return a point that is never contained.
    fn reference_point(&self) -> ReferencePoint;

    fn num_chains(&self) -> usize;

    /// Returns chain `chain_id`. Panics if out of range.
    fn chain(&self, chain_id: usize) -> Chain;

    /// Returns edge `offset` of chain `chain_id`.
    fn chain_edge(&self, chain_id: usize, offset: usize) -> Edge;

    /// Returns the chain and offset holding edge `edge_id`.
    fn chain_position(&self, edge_id: usize) -> ChainPosition;

    /// 0 for points, 1 for polylines, 2 for polygons.
    fn dimension(&self) -> u8;

    /// Returns `true` if the shape contains no points.
    fn is_empty(&self) -> bool {
        self.num_edges() == 0 && (self.dimension() != 2 || self.num_chains() == 0)
    }

    /// Returns `true` if the shape contains the whole sphere.
    fn is_full(&self) -> bool {
        self.num_edges() == 0 && self.dimension() == 2 && self.num_chains() > 0
    }
}
