//! Orientation of three points on the sphere.
//!
//! [`sign`] is the fast floating-point test. [`robust_sign`] escalates
//! through three stages until the answer is certain: a triage test with a
//! fixed error bound, a more stable determinant built from the two shortest
//! edges, and finally exact integer arithmetic with symbolic perturbation.
//! The result is consistent for every permutation of the inputs.

use super::exact::{diff_of_products, exact_vecs, sign_of, ExactVec};
use crate::consts::DBL_EPSILON;
use crate::primitives::Point;
use std::cmp::Ordering;
use std::ops::Neg;

/// Maximum error of the triage determinant `(a × b) · c` for unit vectors.
const MAX_DETERMINANT_ERROR: f64 = 1.8274 * DBL_EPSILON;

/// Error factor of the stable determinant, scaled by the edge lengths.
const DET_ERROR_MULTIPLIER: f64 = 3.2321 * DBL_EPSILON;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The points turn clockwise.
    Clockwise,
    /// The orientation could not be decided (two points are equal).
    Indeterminate,
    /// The points turn counter-clockwise.
    CounterClockwise,
}

impl Direction {
    fn from_sign(s: i32) -> Self {
        match s.cmp(&0) {
            Ordering::Greater => Direction::CounterClockwise,
            Ordering::Less => Direction::Clockwise,
            Ordering::Equal => Direction::Indeterminate,
        }
    }
}

impl Neg for Direction {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
            Direction::Indeterminate => Direction::Indeterminate,
        }
    }
}

/// Returns `true` if `a`, `b`, `c` are strictly counter-clockwise.
///
/// Plain floating-point test: returns `false` for collinear points and may
/// be wrong for nearly collinear ones. Use [`robust_sign`] when the answer
/// must be consistent.
#[inline]
pub fn sign(a: Point, b: Point, c: Point) -> bool {
    c.cross(a).dot(b.vec()) > 0.0
}

/// Returns the orientation of `a`, `b`, `c`, exact for every finite input.
///
/// Returns [`Direction::Indeterminate`] if and only if two of the points
/// are identical. Otherwise the result satisfies
/// `robust_sign(a, b, c) == robust_sign(b, c, a) == -robust_sign(c, b, a)`,
/// with ties among exactly collinear points broken by a consistent
/// symbolic perturbation.
pub fn robust_sign(a: Point, b: Point, c: Point) -> Direction {
    match triage_sign(a, b, c) {
        Direction::Indeterminate => expensive_sign(a, b, c),
        sign => sign,
    }
}

/// Fast determinant test, `Indeterminate` when within the error bound.
#[inline]
pub(crate) fn triage_sign(a: Point, b: Point, c: Point) -> Direction {
    let det = a.cross(b).dot(c.vec());
    if det > MAX_DETERMINANT_ERROR {
        Direction::CounterClockwise
    } else if det < -MAX_DETERMINANT_ERROR {
        Direction::Clockwise
    } else {
        Direction::Indeterminate
    }
}

/// The slow stages of [`robust_sign`].
pub(crate) fn expensive_sign(a: Point, b: Point, c: Point) -> Direction {
    if a == b || b == c || c == a {
        return Direction::Indeterminate;
    }
    match stable_sign(a, b, c) {
        Direction::Indeterminate => exact_sign(a, b, c, true),
        sign => sign,
    }
}

/// Determinant computed from the two shortest edges of the triangle,
/// which keeps the cross product small and the error bound tight.
fn stable_sign(a: Point, b: Point, c: Point) -> Direction {
    let ab = b.vec() - a.vec();
    let bc = c.vec() - b.vec();
    let ca = a.vec() - c.vec();
    let ab2 = ab.magnitude_squared();
    let bc2 = bc.magnitude_squared();
    let ca2 = ca.magnitude_squared();

    let (e1, e2, op) = if ab2 >= bc2 && ab2 >= ca2 {
        (ca, bc, c.vec())
    } else if bc2 >= ca2 {
        (ab, ca, a.vec())
    } else {
        (bc, ab, b.vec())
    };

    let det = -e1.cross(e2).dot(op);
    let max_err = DET_ERROR_MULTIPLIER * (e1.magnitude_squared() * e2.magnitude_squared()).sqrt();
    if det > max_err {
        Direction::CounterClockwise
    } else if det < -max_err {
        Direction::Clockwise
    } else {
        Direction::Indeterminate
    }
}

/// Exact determinant sign, optionally resolving zero by symbolic
/// perturbation of the lexicographically sorted points.
pub(crate) fn exact_sign(a: Point, b: Point, c: Point, perturb: bool) -> Direction {
    let (mut pa, mut pb, mut pc) = (a.vec(), b.vec(), c.vec());
    let mut perm_sign = 1;
    if pa.lex_cmp(pb) == Ordering::Greater {
        std::mem::swap(&mut pa, &mut pb);
        perm_sign = -perm_sign;
    }
    if pb.lex_cmp(pc) == Ordering::Greater {
        std::mem::swap(&mut pb, &mut pc);
        perm_sign = -perm_sign;
    }
    if pa.lex_cmp(pb) == Ordering::Greater {
        std::mem::swap(&mut pa, &mut pb);
        perm_sign = -perm_sign;
    }

    let [ea, eb, ec] = exact_vecs([pa, pb, pc]);
    let b_cross_c = eb.cross(&ec);
    let mut det_sign = sign_of(&ea.dot(&b_cross_c));
    if det_sign == 0 && perturb {
        det_sign = symbolically_perturbed_sign(&ea, &eb, &ec, &b_cross_c);
    }
    Direction::from_sign(perm_sign * det_sign)
}

/// Sign of the determinant after perturbing each coordinate by an
/// infinitesimal of a distinct order. The points must be sorted
/// lexicographically and pairwise distinct; the result is never zero.
fn symbolically_perturbed_sign(
    a: &ExactVec,
    b: &ExactVec,
    c: &ExactVec,
    b_cross_c: &ExactVec,
) -> i32 {
    // Terms of the perturbed determinant in decreasing order of
    // significance; the first nonzero one decides.
    let terms = [
        sign_of(&b_cross_c.z),
        sign_of(&b_cross_c.y),
        sign_of(&b_cross_c.x),
        sign_of(&diff_of_products(&c.x, &a.y, &c.y, &a.x)),
        sign_of(&c.x),
        -sign_of(&c.y),
        sign_of(&diff_of_products(&c.z, &a.x, &c.x, &a.z)),
        sign_of(&c.z),
        sign_of(&diff_of_products(&a.x, &b.y, &a.y, &b.x)),
        -sign_of(&b.x),
        sign_of(&b.y),
        sign_of(&a.x),
    ];
    terms.into_iter().find(|&s| s != 0).unwrap_or(1)
}

/// Returns `true` if the edges `o→a`, `o→b`, `o→c` are encountered in that
/// order while sweeping counter-clockwise around `o`.
///
/// Equivalent to `b` lying in the closed wedge swept counter-clockwise
/// from `a` to `c`. If `a == b` or `b == c` the result is `true`;
/// otherwise if `a == c` it is `false`.
pub fn ordered_ccw(a: Point, b: Point, c: Point, o: Point) -> bool {
    let mut sum = 0;
    if robust_sign(b, o, a) != Direction::Clockwise {
        sum += 1;
    }
    if robust_sign(c, o, b) != Direction::Clockwise {
        sum += 1;
    }
    if robust_sign(a, o, c) == Direction::CounterClockwise {
        sum += 1;
    }
    sum >= 2
}
