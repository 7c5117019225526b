//! Exact arithmetic on point coordinates.
//!
//! Every finite `f64` is an integer times a power of two. Shifting all the
//! coordinates of a predicate onto their smallest exponent turns them into
//! big integers scaled by one common positive factor, so the sign of any
//! homogeneous polynomial in them (a 3×3 determinant, a 2×2 minor, a single
//! coordinate) is computed without rounding, underflow or overflow.

use crate::primitives::Vec3;
use num_bigint::{BigInt, Sign};
use num_traits::{Float, Zero};

/// A vector with exact integer coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExactVec {
    pub(crate) x: BigInt,
    pub(crate) y: BigInt,
    pub(crate) z: BigInt,
}

impl ExactVec {
    pub(crate) fn cross(&self, other: &Self) -> Self {
        Self {
            x: diff_of_products(&self.y, &other.z, &self.z, &other.y),
            y: diff_of_products(&self.z, &other.x, &self.x, &other.z),
            z: diff_of_products(&self.x, &other.y, &self.y, &other.x),
        }
    }

    pub(crate) fn dot(&self, other: &Self) -> BigInt {
        &self.x * &other.x + &self.y * &other.y + &self.z * &other.z
    }
}

/// Converts vectors to exact integers sharing one power-of-two scale.
///
/// Coordinates must be finite.
pub(crate) fn exact_vecs<const N: usize>(vs: [Vec3<f64>; N]) -> [ExactVec; N] {
    let parts = vs.map(|v| v.to_array().map(<f64 as Float>::integer_decode));
    let base = parts
        .iter()
        .flatten()
        .filter(|&&(mantissa, _, _)| mantissa != 0)
        .map(|&(_, exponent, _)| exponent)
        .min()
        .unwrap_or(0);

    parts.map(|coords| {
        let [x, y, z] = coords.map(|(mantissa, exponent, sign)| {
            if mantissa == 0 {
                return BigInt::zero();
            }
            let n = BigInt::from(mantissa) << ((exponent - base) as usize);
            if sign < 0 {
                -n
            } else {
                n
            }
        });
        ExactVec { x, y, z }
    })
}

/// The exact value of `a·b − c·d`.
#[inline]
pub(crate) fn diff_of_products(a: &BigInt, b: &BigInt, c: &BigInt, d: &BigInt) -> BigInt {
    a * b - c * d
}

/// Returns the sign of an integer as -1, 0 or 1.
#[inline]
pub(crate) fn sign_of(n: &BigInt) -> i32 {
    match n.sign() {
        Sign::Plus => 1,
        Sign::Minus => -1,
        Sign::NoSign => 0,
    }
}
