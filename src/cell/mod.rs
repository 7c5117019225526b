//! Hierarchical cells on the cube-face projection of the sphere.
//!
//! Cells are used to quantize vertices for compact encoding and as query
//! regions for polyline intersection tests.

#[allow(clippy::module_inception)]
mod cell;
mod face;
mod key;

pub use cell::Cell;
pub use key::CellKey;

pub(crate) use face::xyz_to_face_si_ti;
