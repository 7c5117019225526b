//! One-dimensional angle measured in radians.

use std::f64::consts::PI;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// An angle, stored in radians.
///
/// Angles are unbounded: they can be negative, exceed 2π, or be infinite
/// (used as a "no limit" seed for distance searches).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle(f64);

impl Angle {
    /// The zero angle.
    pub const ZERO: Angle = Angle(0.0);

    /// An angle larger than any finite angle.
    pub const INFINITY: Angle = Angle(f64::INFINITY);

    /// Creates an angle from radians.
    #[inline]
    pub const fn from_radians(radians: f64) -> Self {
        Self(radians)
    }

    /// Creates an angle from degrees.
    #[inline]
    pub fn from_degrees(degrees: f64) -> Self {
        Self(degrees * (PI / 180.0))
    }

    /// Creates an angle from an integer count of 1e-7 degrees.
    #[inline]
    pub fn from_e7(e7: i32) -> Self {
        Self::from_degrees(f64::from(e7) * 1e-7)
    }

    /// Returns the angle in radians.
    #[inline]
    pub fn radians(self) -> f64 {
        self.0
    }

    /// Returns the angle in degrees.
    #[inline]
    pub fn degrees(self) -> f64 {
        self.0 / (PI / 180.0)
    }

    /// Returns the angle in 1e-7 degrees, rounded to the nearest integer.
    #[inline]
    pub fn e7(self) -> i32 {
        (self.degrees() * 1e7).round() as i32
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Returns `true` if the angle is infinite.
    #[inline]
    pub fn is_infinite(self) -> bool {
        self.0.is_infinite()
    }

    /// Returns the smaller of two angles.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// Returns the larger of two angles.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }
}

impl Add for Angle {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Angle {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Mul<f64> for Angle {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Self(self.0 * scalar)
    }
}

impl Div<f64> for Angle {
    type Output = Self;

    #[inline]
    fn div(self, scalar: f64) -> Self {
        Self(self.0 / scalar)
    }
}

impl Neg for Angle {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.7}°", self.degrees())
    }
}
