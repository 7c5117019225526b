//! Numerical constants shared by the predicates, distance bounds and codecs.

/// Machine epsilon for `f64` (the gap between 1.0 and the next float).
pub const DBL_EPSILON: f64 = f64::EPSILON;

/// Maximum rounding error of a single `f64` operation, `DBL_EPSILON / 2`.
pub const DBL_ERROR: f64 = 0.5 * f64::EPSILON;

/// Loose tolerance for comparisons that only need to absorb accumulated noise.
pub const EPSILON: f64 = 1e-15;

/// Allowed deviation of `|p|²` from 1 for a point to count as unit length.
pub const UNIT_LENGTH_TOLERANCE: f64 = 5e-14;

/// Deepest cell subdivision level.
pub const MAX_LEVEL: u8 = 30;
