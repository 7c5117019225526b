//! Closest points and distances between points and edges.

mod edge_pair;
mod nearness;
mod point_edge;

pub use edge_pair::{
    edge_pair_closest_points, update_edge_pair_max_distance, update_edge_pair_min_distance,
};
pub use nearness::is_edge_b_near_edge_a;
pub use point_edge::{
    distance_fraction, distance_from_segment, is_distance_less, is_interior_distance_less,
    min_update_distance_max_error, min_update_interior_distance_max_error, project,
    update_max_distance, update_min_distance, update_min_interior_distance, DistanceUpdate,
};
