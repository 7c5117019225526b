//! Projection between the sphere and the six faces of the cube.
//!
//! Each face carries `(u, v)` coordinates in `[-1, 1]`. A quadratic warp
//! maps them to `(s, t)` in `[0, 1]` so cells at one level have roughly
//! equal area, and `(s, t)` is discretized into integer cell coordinates.

use crate::consts::MAX_LEVEL;
use crate::primitives::{Point, Vec3};

/// Number of cells along one side of a face at the finest level.
pub(crate) const MAX_SIZE: u32 = 1 << MAX_LEVEL;

/// Resolution of `(si, ti)`, which addresses cell centres and corners at
/// every level.
pub(crate) const MAX_SI_TI: u32 = 1 << (MAX_LEVEL + 1);

/// Returns the face whose axis has the largest component of `p`.
pub(crate) fn face(p: Vec3<f64>) -> u8 {
    let axis = p.largest_abs_component();
    let component = p.to_array()[axis];
    if component < 0.0 {
        axis as u8 + 3
    } else {
        axis as u8
    }
}

/// Maps face coordinates back to a (non-unit) vector.
pub(crate) fn face_uv_to_xyz(face: u8, u: f64, v: f64) -> Vec3<f64> {
    match face {
        0 => Vec3::new(1.0, u, v),
        1 => Vec3::new(-u, 1.0, v),
        2 => Vec3::new(-u, -v, 1.0),
        3 => Vec3::new(-1.0, -v, -u),
        4 => Vec3::new(v, -1.0, -u),
        _ => Vec3::new(v, u, -1.0),
    }
}

/// Projects `p` onto the plane of `face`. `p` must lie in the face's
/// hemisphere.
pub(crate) fn face_xyz_to_uv(face: u8, p: Vec3<f64>) -> (f64, f64) {
    match face {
        0 => (p.y / p.x, p.z / p.x),
        1 => (-p.x / p.y, p.z / p.y),
        2 => (-p.x / p.z, -p.y / p.z),
        3 => (p.z / p.x, p.y / p.x),
        4 => (-p.z / p.y, p.x / p.y),
        _ => (-p.y / p.z, -p.x / p.z),
    }
}

/// Like [`face_xyz_to_uv`], but `None` if `p` is not in the open
/// hemisphere of `face`.
pub(crate) fn valid_face_xyz_to_uv(face: u8, p: Vec3<f64>) -> Option<(f64, f64)> {
    let toward = match face {
        0 => p.x,
        1 => p.y,
        2 => p.z,
        3 => -p.x,
        4 => -p.y,
        _ => -p.z,
    };
    if toward <= 0.0 {
        return None;
    }
    Some(face_xyz_to_uv(face, p))
}

pub(crate) fn xyz_to_face_uv(p: Vec3<f64>) -> (u8, f64, f64) {
    let f = face(p);
    let (u, v) = face_xyz_to_uv(f, p);
    (f, u, v)
}

/// The quadratic warp from `s` in `[0, 1]` to `u` in `[-1, 1]`.
#[inline]
pub(crate) fn st_to_uv(s: f64) -> f64 {
    if s >= 0.5 {
        (1.0 / 3.0) * (4.0 * s * s - 1.0)
    } else {
        (1.0 / 3.0) * (1.0 - 4.0 * (1.0 - s) * (1.0 - s))
    }
}

/// Inverse of [`st_to_uv`].
#[inline]
pub(crate) fn uv_to_st(u: f64) -> f64 {
    if u >= 0.0 {
        0.5 * (1.0 + 3.0 * u).sqrt()
    } else {
        1.0 - 0.5 * (1.0 - 3.0 * u).sqrt()
    }
}

/// Returns the leaf cell coordinate containing `s`, clamped to the face.
#[inline]
pub(crate) fn st_to_ij(s: f64) -> u32 {
    (MAX_SIZE as f64 * s).floor().clamp(0.0, (MAX_SIZE - 1) as f64) as u32
}

#[inline]
pub(crate) fn si_ti_to_st(si: u32) -> f64 {
    if si > MAX_SI_TI {
        return 1.0;
    }
    si as f64 / MAX_SI_TI as f64
}

#[inline]
pub(crate) fn st_to_si_ti(s: f64) -> u32 {
    (s * MAX_SI_TI as f64).round() as u32
}

pub(crate) fn face_si_ti_to_xyz(face: u8, si: u32, ti: u32) -> Vec3<f64> {
    face_uv_to_xyz(
        face,
        st_to_uv(si_ti_to_st(si)),
        st_to_uv(si_ti_to_st(ti)),
    )
}

/// Returns the face and `(si, ti)` of `p`, with the level at which `p` is
/// exactly a cell centre, if there is one.
pub(crate) fn xyz_to_face_si_ti(p: Point) -> (u8, u32, u32, Option<u8>) {
    let (f, u, v) = xyz_to_face_uv(p.vec());
    let si = st_to_si_ti(uv_to_st(u));
    let ti = st_to_si_ti(uv_to_st(v));
    // A centre at level L has si an odd multiple of 2^(MAX_LEVEL - L).
    // Zero and MAX_SI_TI are corners, never centres.
    let level_of = |x: u32| MAX_LEVEL as i32 - (x | MAX_SI_TI).trailing_zeros() as i32;
    let level = level_of(si);
    if level < 0 || level != level_of(ti) {
        return (f, si, ti, None);
    }
    // Centres are built the same way as this comparison, so it can be exact.
    if p.vec() == face_si_ti_to_xyz(f, si, ti).normalize() {
        return (f, si, ti, Some(level as u8));
    }
    (f, si, ti, None)
}
