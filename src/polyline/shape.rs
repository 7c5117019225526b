//! [`Shape`] view of a polyline: a single chain of edges with no interior.

use super::Polyline;
use crate::primitives::Edge;
use crate::shape::{Chain, ChainPosition, ReferencePoint, Shape};

impl Shape for Polyline {
    fn num_edges(&self) -> usize {
        Polyline::num_edges(self)
    }

    fn edge(&self, id: usize) -> Edge {
        Polyline::edge(self, id)
    }

    fn reference_point(&self) -> ReferencePoint {
        ReferencePoint::origin(false)
    }

    /// One chain, unless there are no edges.
    fn num_chains(&self) -> usize {
        Polyline::num_edges(self).min(1)
    }

    fn chain(&self, _chain_id: usize) -> Chain {
        Chain {
            start: 0,
            length: Polyline::num_edges(self),
        }
    }

    fn chain_edge(&self, _chain_id: usize, offset: usize) -> Edge {
        Polyline::edge(self, offset)
    }

    fn chain_position(&self, edge_id: usize) -> ChainPosition {
        ChainPosition {
            chain_id: 0,
            offset: edge_id,
        }
    }

    fn dimension(&self) -> u8 {
        1
    }
}
