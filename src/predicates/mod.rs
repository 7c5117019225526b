//! Orientation and crossing predicates on the sphere.

mod crossing;
mod exact;
mod sign;

pub use crossing::{
    crossing_sign, edge_or_vertex_crossing, intersection, vertex_crossing, Crossing, EdgeCrosser,
    INTERSECTION_ERROR,
};
pub use sign::{ordered_ccw, robust_sign, sign, Direction};
