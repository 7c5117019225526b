//! Points on the unit sphere.

use super::Vec3;
use crate::angle::Angle;
use crate::consts::UNIT_LENGTH_TOLERANCE;
use std::ops::Neg;

/// A location on the unit sphere, stored as a unit-length vector.
///
/// Constructors normalize their input, so every `Point` built through
/// [`Point::from_coords`] or [`Point::from_vec`] is unit length.
/// [`Point::from_vec_unchecked`] bypasses normalization for data that is
/// already normalized (or deliberately is not, when exercising validation).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point(Vec3<f64>);

impl Point {
    /// Creates a point from coordinates, normalizing them.
    ///
    /// The zero vector has no direction and maps to `(1, 0, 0)`.
    #[inline]
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self::from_vec(Vec3::new(x, y, z))
    }

    /// Creates a point from a vector, normalizing it.
    pub fn from_vec(v: Vec3<f64>) -> Self {
        if v.is_zero() {
            return Self(Vec3::new(1.0, 0.0, 0.0));
        }
        Self(v.normalize())
    }

    /// Wraps a vector without normalizing it.
    #[inline]
    pub const fn from_vec_unchecked(v: Vec3<f64>) -> Self {
        Self(v)
    }

    /// A fixed point used as the reference point of shapes.
    ///
    /// It lies near the north pole but away from any cube face boundary or
    /// any axis-aligned great circle, so it is unlikely to coincide with
    /// real vertices.
    pub fn origin() -> Self {
        Self(Vec3::new(
            -0.009_999_466_435_025_019_7,
            0.002_592_454_260_932_412_1,
            0.999_946_643_502_501_95,
        ))
    }

    /// Returns the underlying vector.
    #[inline]
    pub fn vec(self) -> Vec3<f64> {
        self.0
    }

    #[inline]
    pub fn x(self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn y(self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn z(self) -> f64 {
        self.0.z
    }

    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.0.dot(other.0)
    }

    /// Plain cross product of the two underlying vectors.
    #[inline]
    pub fn cross(self, other: Self) -> Vec3<f64> {
        self.0.cross(other.0)
    }

    /// Returns `true` if the vector is unit length within a small tolerance.
    #[inline]
    pub fn is_unit(self) -> bool {
        (self.0.magnitude_squared() - 1.0).abs() <= UNIT_LENGTH_TOLERANCE
    }

    /// Returns a unit vector orthogonal to this one.
    ///
    /// Satisfies `(-p).ortho() == -(p.ortho())`.
    pub fn ortho(self) -> Self {
        let mut temp = Vec3::new(0.012, 0.0053, 0.00457);
        match self.0.largest_abs_component() {
            0 => temp.z = 1.0,
            1 => temp.x = 1.0,
            _ => temp.y = 1.0,
        }
        Self(self.0.cross(temp).normalize())
    }

    /// Returns a vector orthogonal to both points, robust when they are
    /// nearly identical or nearly antipodal.
    ///
    /// Computed as `(a + b) × (b − a)`, which equals `2·(a × b)` exactly but
    /// with much less cancellation error. The result is not normalized. If
    /// it is exactly zero (the points are equal or exactly antipodal) an
    /// arbitrary orthogonal unit vector is returned instead.
    pub fn point_cross(self, other: Self) -> Vec3<f64> {
        let x = (self.0 + other.0).cross(other.0 - self.0);
        if x.is_zero() {
            return self.ortho().0;
        }
        x
    }

    /// Returns the angular distance to another point, in `[0, π]`.
    #[inline]
    pub fn distance(self, other: Self) -> Angle {
        Angle::from_radians(self.0.angle(other.0))
    }

    /// Returns `true` if the points are within `max_error` of each other.
    #[inline]
    pub fn approx_eq(self, other: Self, max_error: Angle) -> bool {
        self.distance(other) <= max_error
    }
}

impl Neg for Point {
    type Output = Self;

    /// The antipodal point.
    #[inline]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl From<Point> for Vec3<f64> {
    fn from(p: Point) -> Self {
        p.0
    }
}
