//! Squared chord length as an angular distance.

use super::Angle;
use crate::consts::DBL_EPSILON;
use crate::primitives::Point;
use std::f64::consts::PI;
use std::ops::{Add, Sub};

/// Largest valid squared chord length, reached by antipodal points.
const MAX_LENGTH2: f64 = 4.0;

/// An angular distance stored as the squared length of the chord between
/// two unit vectors, `2·(1 − cos θ)`.
///
/// Valid values lie in `[0, 4]`, matching `θ ∈ [0, π]`. The mapping is
/// monotonic, so comparing chord angles compares the underlying angles
/// without any trigonometry. Two special values sit outside that range:
/// [`ChordAngle::NEGATIVE`] (below every distance) and
/// [`ChordAngle::INFINITY`] (above every distance).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ChordAngle(f64);

impl ChordAngle {
    /// Zero distance.
    pub const ZERO: ChordAngle = ChordAngle(0.0);

    /// A 90 degree angle.
    pub const RIGHT: ChordAngle = ChordAngle(2.0);

    /// A 180 degree angle, the largest valid distance.
    pub const STRAIGHT: ChordAngle = ChordAngle(MAX_LENGTH2);

    /// Smaller than every valid distance; the seed for maximum searches.
    pub const NEGATIVE: ChordAngle = ChordAngle(-1.0);

    /// Larger than every valid distance; the seed for minimum searches.
    pub const INFINITY: ChordAngle = ChordAngle(f64::INFINITY);

    /// Converts an angle to a chord angle.
    ///
    /// Negative angles map to [`ChordAngle::NEGATIVE`], infinite angles to
    /// [`ChordAngle::INFINITY`], and angles above π are clamped to π.
    pub fn from_angle(angle: Angle) -> Self {
        if angle.radians() < 0.0 {
            return Self::NEGATIVE;
        }
        if angle.is_infinite() {
            return Self::INFINITY;
        }
        let l = 2.0 * (0.5 * angle.radians().min(PI)).sin();
        Self(l * l)
    }

    /// Creates a chord angle from a squared chord length.
    ///
    /// Lengths above 4 are clamped to [`ChordAngle::STRAIGHT`].
    #[inline]
    pub fn from_squared_length(length2: f64) -> Self {
        if length2 > MAX_LENGTH2 {
            return Self::STRAIGHT;
        }
        Self(length2)
    }

    /// Returns the chord angle between two points.
    #[inline]
    pub fn between_points(x: Point, y: Point) -> Self {
        Self((x.vec() - y.vec()).magnitude_squared().min(MAX_LENGTH2))
    }

    /// Returns the squared chord length.
    #[inline]
    pub fn length2(self) -> f64 {
        self.0
    }

    /// Converts back to an angle.
    ///
    /// [`ChordAngle::NEGATIVE`] maps to −1 radian and
    /// [`ChordAngle::INFINITY`] to an infinite angle.
    pub fn to_angle(self) -> Angle {
        if self.0 < 0.0 {
            return Angle::from_radians(-1.0);
        }
        if self.is_infinite() {
            return Angle::INFINITY;
        }
        Angle::from_radians(2.0 * (0.5 * self.0.sqrt()).asin())
    }

    /// Returns `true` for [`ChordAngle::INFINITY`].
    #[inline]
    pub fn is_infinite(self) -> bool {
        self.0.is_infinite()
    }

    /// Returns `true` for the negative and infinite sentinels.
    #[inline]
    pub fn is_special(self) -> bool {
        self.0 < 0.0 || self.is_infinite()
    }

    /// Returns `true` if the value is in `[0, 4]` or is a sentinel.
    #[inline]
    pub fn is_valid(self) -> bool {
        (self.0 >= 0.0 && self.0 <= MAX_LENGTH2) || self.is_special()
    }

    /// Returns the smaller of two chord angles.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// Returns the larger of two chord angles.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }

    /// Returns the smallest representable chord angle larger than this one.
    ///
    /// Stepping past [`ChordAngle::STRAIGHT`] yields
    /// [`ChordAngle::INFINITY`]; stepping up from a negative value yields
    /// zero.
    pub fn successor(self) -> Self {
        if self.0 >= MAX_LENGTH2 {
            return Self::INFINITY;
        }
        if self.0 < 0.0 {
            return Self::ZERO;
        }
        Self(f64::from_bits(self.0.to_bits() + 1))
    }

    /// Returns the largest representable chord angle smaller than this one.
    ///
    /// Stepping below zero yields [`ChordAngle::NEGATIVE`]; stepping down
    /// from [`ChordAngle::INFINITY`] yields [`ChordAngle::STRAIGHT`].
    pub fn predecessor(self) -> Self {
        if self.0 <= 0.0 {
            return Self::NEGATIVE;
        }
        if self.0 > MAX_LENGTH2 {
            return Self::STRAIGHT;
        }
        Self(f64::from_bits(self.0.to_bits() - 1))
    }

    /// Returns the chord angle pushed by `error` (which may be negative),
    /// clamped to `[0, 4]`. Sentinels are returned unchanged.
    #[inline]
    pub fn expanded(self, error: f64) -> Self {
        if self.is_special() {
            return self;
        }
        Self((self.0 + error).min(MAX_LENGTH2).max(0.0))
    }

    /// Maximum error in a chord angle computed as `|x − y|²` from two
    /// unit-length points.
    #[inline]
    pub fn max_point_error(self) -> f64 {
        2.5 * DBL_EPSILON * self.0 + 16.0 * DBL_EPSILON * DBL_EPSILON
    }

    /// Maximum error in a chord angle converted from an [`Angle`].
    #[inline]
    pub fn max_angle_error(self) -> f64 {
        DBL_EPSILON * self.0
    }

    /// Returns `sin²θ`, computed without trigonometry.
    #[inline]
    pub fn sin2(self) -> f64 {
        self.0 * (1.0 - 0.25 * self.0)
    }

    /// Returns `sin θ`.
    #[inline]
    pub fn sin(self) -> f64 {
        self.sin2().sqrt()
    }

    /// Returns `cos θ`.
    #[inline]
    pub fn cos(self) -> f64 {
        1.0 - 0.5 * self.0
    }

    /// Returns `tan θ`.
    #[inline]
    pub fn tan(self) -> f64 {
        self.sin() / self.cos()
    }
}

/// Adds the underlying angles, clamping the sum to 180 degrees.
///
/// Both operands must be non-special.
impl Add for ChordAngle {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        if other.0 == 0.0 {
            return self;
        }
        if self.0 + other.0 >= MAX_LENGTH2 {
            return Self::STRAIGHT;
        }
        // With half-angles A and B, the chord of A+B follows from
        // sin(A+B) = sin A cos B + sin B cos A.
        let x = self.0 * (1.0 - 0.25 * other.0);
        let y = other.0 * (1.0 - 0.25 * self.0);
        Self((x + y + 2.0 * (x * y).sqrt()).min(MAX_LENGTH2))
    }
}

/// Subtracts the underlying angles, clamping the difference at zero.
impl Sub for ChordAngle {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        if other.0 == 0.0 {
            return self;
        }
        if self.0 <= other.0 {
            return Self::ZERO;
        }
        let x = self.0 * (1.0 - 0.25 * other.0);
        let y = other.0 * (1.0 - 0.25 * self.0);
        Self((x + y - 2.0 * (x * y).sqrt()).max(0.0))
    }
}

impl From<Angle> for ChordAngle {
    fn from(angle: Angle) -> Self {
        Self::from_angle(angle)
    }
}

impl From<ChordAngle> for Angle {
    fn from(chord: ChordAngle) -> Self {
        chord.to_angle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn degrees(d: f64) -> ChordAngle {
        ChordAngle::from_angle(Angle::from_degrees(d))
    }

    #[test]
    fn test_sentinel_ordering() {
        assert!(ChordAngle::NEGATIVE < ChordAngle::ZERO);
        assert!(ChordAngle::ZERO < ChordAngle::RIGHT);
        assert!(ChordAngle::RIGHT < ChordAngle::STRAIGHT);
        assert!(ChordAngle::STRAIGHT < ChordAngle::INFINITY);
        assert!(ChordAngle::NEGATIVE.is_special());
        assert!(ChordAngle::INFINITY.is_special());
        assert!(!ChordAngle::STRAIGHT.is_special());
        assert!(ChordAngle::NEGATIVE.is_valid());
        assert!(!ChordAngle(4.5).is_valid());
    }

    #[test]
    fn test_from_angle() {
        assert_eq!(ChordAngle::from_angle(Angle::ZERO), ChordAngle::ZERO);
        assert_eq!(ChordAngle::from_angle(Angle::from_radians(PI)), ChordAngle::STRAIGHT);
        assert_eq!(ChordAngle::from_angle(Angle::from_radians(2.0 * PI)), ChordAngle::STRAIGHT);
        assert_eq!(ChordAngle::from_angle(Angle::from_radians(-1e-10)), ChordAngle::NEGATIVE);
        assert_eq!(ChordAngle::from_angle(Angle::INFINITY), ChordAngle::INFINITY);
        assert_relative_eq!(degrees(90.0).length2(), 2.0, epsilon = 1e-15);
        assert_relative_eq!(degrees(60.0).length2(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_angle_round_trip() {
        for i in 0..=100 {
            let radians = PI * f64::from(i) / 100.0;
            let back = ChordAngle::from_angle(Angle::from_radians(radians)).to_angle();
            assert_relative_eq!(back.radians(), radians, epsilon = 1e-13);
        }
        assert_eq!(ChordAngle::NEGATIVE.to_angle().radians(), -1.0);
        assert!(ChordAngle::INFINITY.to_angle().is_infinite());
    }

    #[test]
    fn test_from_squared_length_clamps() {
        assert_eq!(ChordAngle::from_squared_length(5.0), ChordAngle::STRAIGHT);
        assert_eq!(ChordAngle::from_squared_length(2.0), ChordAngle::RIGHT);
    }

    #[test]
    fn test_successor_predecessor() {
        assert_eq!(ChordAngle::NEGATIVE.successor(), ChordAngle::ZERO);
        assert_eq!(ChordAngle::STRAIGHT.successor(), ChordAngle::INFINITY);
        assert_eq!(ChordAngle::INFINITY.successor(), ChordAngle::INFINITY);
        assert_eq!(ChordAngle::ZERO.predecessor(), ChordAngle::NEGATIVE);
        assert_eq!(ChordAngle::INFINITY.predecessor(), ChordAngle::STRAIGHT);

        let x = degrees(30.0);
        assert!(x.successor() > x);
        assert!(x.predecessor() < x);
        assert_eq!(x.successor().predecessor(), x);
        assert!(ChordAngle::ZERO.successor() > ChordAngle::ZERO);
    }

    #[test]
    fn test_expanded() {
        assert_eq!(ChordAngle::NEGATIVE.expanded(5.0), ChordAngle::NEGATIVE);
        assert_eq!(ChordAngle::INFINITY.expanded(-5.0), ChordAngle::INFINITY);
        assert_eq!(ChordAngle::ZERO.expanded(-5.0), ChordAngle::ZERO);
        assert_eq!(ChordAngle::STRAIGHT.expanded(5.0), ChordAngle::STRAIGHT);
        assert_eq!(ChordAngle::ZERO.expanded(1e-5).length2(), 1e-5);
    }

    #[test]
    fn test_add_sub() {
        let zero = ChordAngle::ZERO;
        let d30 = degrees(30.0);
        let d60 = degrees(60.0);
        let d90 = degrees(90.0);
        let d120 = degrees(120.0);
        let d180 = ChordAngle::STRAIGHT;

        assert_eq!(zero + zero, zero);
        assert_eq!(d60 + zero, d60);
        assert_eq!(zero + d60, d60);
        assert_relative_eq!((d30 + d60).length2(), d90.length2(), epsilon = 1e-14);
        assert_relative_eq!((d60 + d30).length2(), d90.length2(), epsilon = 1e-14);
        assert_eq!(d180 + zero, d180);
        assert_relative_eq!((d60 + d120).length2(), 4.0, epsilon = 1e-14);
        assert_eq!(d120 + d90, d180);
        assert_eq!(d120 + d120, d180);
        assert_eq!(d30 + d180, d180);
        assert_eq!(d180 + d180, d180);

        assert_eq!(zero - zero, zero);
        assert_eq!(d60 - d60, zero);
        assert_eq!(d180 - d180, zero);
        assert_eq!(zero - d60, zero);
        assert_eq!(d30 - d90, zero);
        assert_relative_eq!((d90 - d30).length2(), d60.length2(), epsilon = 1e-14);
        assert_relative_eq!((d90 - d60).length2(), d30.length2(), epsilon = 1e-14);
        assert_eq!(d180 - zero, d180);
    }

    #[test]
    fn test_trigonometry() {
        for i in 0..=40 {
            let radians = PI * f64::from(i) / 40.0;
            let c = ChordAngle::from_angle(Angle::from_radians(radians));
            assert_relative_eq!(c.sin(), radians.sin(), epsilon = 1e-14);
            assert_relative_eq!(c.cos(), radians.cos(), epsilon = 1e-14);
            assert_relative_eq!(c.sin2(), radians.sin().powi(2), epsilon = 1e-14);
        }
        // tan blows up near 90 degrees; check a regular value instead.
        let c = ChordAngle::from_angle(Angle::from_radians(FRAC_PI_2 / 2.0));
        assert_relative_eq!(c.tan(), 1.0, epsilon = 1e-14);
    }

    #[test]
    fn test_error_bounds() {
        assert_eq!(ChordAngle::ZERO.max_angle_error(), 0.0);
        assert!(ChordAngle::ZERO.max_point_error() > 0.0);
        assert!(ChordAngle::STRAIGHT.max_point_error() > ChordAngle::RIGHT.max_point_error());
    }
}
