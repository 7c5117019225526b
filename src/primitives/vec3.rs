//! 3D vector type backing points on the sphere.

use num_traits::Float;
use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A 3D vector representing a direction or offset.
///
/// Generic over floating-point types (`f32` or `f64`). Spherical code uses
/// `Vec3<f64>` throughout; unit-length vectors are wrapped in [`Point`].
///
/// [`Point`]: super::Point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3<F> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vec3<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F, z: F) -> Self {
        Self { x, y, z }
    }

    /// Creates a zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self::new(F::zero(), F::zero(), F::zero())
    }

    /// Creates a unit vector along the Z axis.
    #[inline]
    pub fn unit_z() -> Self {
        Self::new(F::zero(), F::zero(), F::one())
    }

    /// Returns `true` if every component is exactly zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == F::zero() && self.y == F::zero() && self.z == F::zero()
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product with another vector.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Returns the squared magnitude (length squared).
    #[inline]
    pub fn magnitude_squared(self) -> F {
        self.dot(self)
    }

    /// Returns the magnitude (length) of the vector.
    ///
    /// Vectors whose squared length underflows or overflows are rescaled by
    /// their largest component first.
    #[inline]
    pub fn magnitude(self) -> F {
        let n2 = self.magnitude_squared();
        if n2.is_normal() {
            return n2.sqrt();
        }
        let largest = self.largest_abs();
        if largest == F::zero() {
            return largest;
        }
        largest * (self / largest).magnitude_squared().sqrt()
    }

    fn largest_abs(self) -> F {
        self.x.abs().max(self.y.abs()).max(self.z.abs())
    }

    /// Scales the vector to unit length.
    ///
    /// The zero vector is returned unchanged. Unlike a thresholded
    /// normalization, tiny but nonzero vectors (such as the cross product of
    /// two nearly identical points) are still scaled up, even when their
    /// squared length underflows.
    #[inline]
    pub fn normalize(self) -> Self {
        let n2 = self.magnitude_squared();
        if n2.is_normal() {
            return self * (F::one() / n2.sqrt());
        }
        let largest = self.largest_abs();
        if largest == F::zero() {
            return self;
        }
        let v = self / largest;
        v * (F::one() / v.magnitude())
    }

    /// Returns the componentwise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Returns the angle between two vectors in radians, in `[0, π]`.
    ///
    /// Uses `atan2(|a × b|, a · b)`, which stays accurate for nearly
    /// parallel and nearly antiparallel vectors.
    #[inline]
    pub fn angle(self, other: Self) -> F {
        self.cross(other).magnitude().atan2(self.dot(other))
    }

    /// Returns the index (0, 1 or 2) of the component with the largest magnitude.
    pub fn largest_abs_component(self) -> usize {
        let t = self.abs();
        if t.x > t.y {
            if t.x > t.z {
                0
            } else {
                2
            }
        } else if t.y > t.z {
            1
        } else {
            2
        }
    }

    /// Returns the components as an array `[x, y, z]`.
    #[inline]
    pub fn to_array(self) -> [F; 3] {
        [self.x, self.y, self.z]
    }

    /// Compares two vectors lexicographically by `x`, then `y`, then `z`.
    pub fn lex_cmp(self, other: Self) -> Ordering {
        let by = |a: F, b: F| a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        by(self.x, other.x)
            .then_with(|| by(self.y, other.y))
            .then_with(|| by(self.z, other.z))
    }
}

impl<F: Float> Add for Vec3<F> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl<F: Float> Sub for Vec3<F> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl<F: Float> Mul<F> for Vec3<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl<F: Float> Div<F> for Vec3<F> {
    type Output = Self;

    #[inline]
    fn div(self, scalar: F) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}

impl<F: Float> Neg for Vec3<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl<F: Float> Default for Vec3<F> {
    fn default() -> Self {
        Self::zero()
    }
}
