//! Points, edges and the vector type underneath them.

mod edge;
mod latlng;
mod point;
mod vec3;

pub use edge::Edge;
pub use latlng::LatLng;
pub use point::Point;
pub use vec3::Vec3;
