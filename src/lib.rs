//! spherum - Robust geometry on the unit sphere
//!
//! Points are unit vectors, edges are geodesic arcs, and distances are
//! compared as squared chord lengths so that the common case needs no
//! trigonometry. Predicates stay correct for zero-length edges, antipodal
//! points and edges close to 180 degrees.

pub mod angle;
pub mod bounds;
pub mod cell;
pub mod consts;
pub mod distance;
pub mod error;
pub mod interpolate;
pub mod io;
pub mod polyline;
pub mod predicates;
pub mod primitives;
pub mod shape;

#[cfg(test)]
mod testing;

pub use angle::{Angle, ChordAngle};
pub use error::{DecodeError, ValidationError};
pub use polyline::Polyline;
pub use primitives::{Edge, LatLng, Point, Vec3};
pub use shape::Shape;
