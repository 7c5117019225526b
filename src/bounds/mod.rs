//! Bounding regions in latitude/longitude space.

mod arc_interval;
mod interval;
mod rect;

pub use arc_interval::ArcInterval;
pub use interval::Interval;
pub use rect::{LatLngRect, RectBounder};
