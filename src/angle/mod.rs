//! Angular distance representations.
//!
//! [`Angle`] is a plain radian measure. [`ChordAngle`] stores the squared
//! chord length between two unit vectors instead, which orders exactly like
//! the angle but avoids trigonometry on every comparison.

mod chord_angle;
mod angle;

pub use angle::Angle;
pub use chord_angle::ChordAngle;
