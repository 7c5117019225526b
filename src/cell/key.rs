//! Compact integer keys for cells.

use super::face::{face_si_ti_to_xyz, st_to_ij, uv_to_st, xyz_to_face_uv};
use crate::consts::MAX_LEVEL;
use crate::primitives::Point;

/// A cell addressed by cube face, subdivision level and integer position
/// `(i, j)` within the face at that level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellKey {
    face: u8,
    level: u8,
    i: u32,
    j: u32,
}

impl CellKey {
    /// Creates a key. Returns `None` if `face > 5`, `level > MAX_LEVEL`, or
    /// `i`/`j` fall outside the face at `level`.
    pub fn new(face: u8, level: u8, i: u32, j: u32) -> Option<Self> {
        if face > 5 || level > MAX_LEVEL {
            return None;
        }
        let size = 1u32 << level;
        if i >= size || j >= size {
            return None;
        }
        Some(Self { face, level, i, j })
    }

    /// Returns the key of the cell at `level` containing `p`.
    ///
    /// `level` is clamped to `MAX_LEVEL`.
    pub fn from_point(p: Point, level: u8) -> Self {
        let level = level.min(MAX_LEVEL);
        let (face, u, v) = xyz_to_face_uv(p.vec());
        let shift = MAX_LEVEL - level;
        Self {
            face,
            level,
            i: st_to_ij(uv_to_st(u)) >> shift,
            j: st_to_ij(uv_to_st(v)) >> shift,
        }
    }

    /// Packs the key as `face << 2·level | interleave(i, j)`.
    ///
    /// Within one level, keys of a parent's children share its bits as a
    /// prefix, so nearby cells have nearby keys.
    pub fn bits(self) -> u64 {
        ((self.face as u64) << (2 * self.level as u32)) | interleave(self.i, self.j)
    }

    /// Unpacks a key produced by [`CellKey::bits`] at `level`.
    pub fn from_bits(bits: u64, level: u8) -> Option<Self> {
        if level > MAX_LEVEL {
            return None;
        }
        let shift = 2 * level as u32;
        let face = bits >> shift;
        if face > 5 {
            return None;
        }
        let pos = bits & ((1u64 << shift) - 1);
        let (i, j) = deinterleave(pos);
        Some(Self {
            face: face as u8,
            level,
            i,
            j,
        })
    }

    #[inline]
    pub fn face(self) -> u8 {
        self.face
    }

    #[inline]
    pub fn level(self) -> u8 {
        self.level
    }

    /// Position of the cell within its face, at its own level.
    #[inline]
    pub fn ij(self) -> (u32, u32) {
        (self.i, self.j)
    }

    /// Returns the centre of the cell.
    pub fn center(self) -> Point {
        let shift = MAX_LEVEL - self.level;
        // Centres sit at odd multiples of 2^(MAX_LEVEL - level) in (si, ti).
        let si = ((2 * self.i as u64 + 1) << shift) as u32;
        let ti = ((2 * self.j as u64 + 1) << shift) as u32;
        Point::from_vec(face_si_ti_to_xyz(self.face, si, ti))
    }
}

/// Spreads the low 32 bits of `x` to the even bit positions.
fn spread(x: u32) -> u64 {
    let mut x = x as u64;
    x = (x | (x << 16)) & 0x0000_FFFF_0000_FFFF;
    x = (x | (x << 8)) & 0x00FF_00FF_00FF_00FF;
    x = (x | (x << 4)) & 0x0F0F_0F0F_0F0F_0F0F;
    x = (x | (x << 2)) & 0x3333_3333_3333_3333;
    (x | (x << 1)) & 0x5555_5555_5555_5555
}

/// Inverse of [`spread`].
fn compact(x: u64) -> u32 {
    let mut x = x & 0x5555_5555_5555_5555;
    x = (x | (x >> 1)) & 0x3333_3333_3333_3333;
    x = (x | (x >> 2)) & 0x0F0F_0F0F_0F0F_0F0F;
    x = (x | (x >> 4)) & 0x00FF_00FF_00FF_00FF;
    x = (x | (x >> 8)) & 0x0000_FFFF_0000_FFFF;
    ((x | (x >> 16)) & 0x0000_0000_FFFF_FFFF) as u32
}

/// Interleaves `i` (odd bits) and `j` (even bits).
#[inline]
fn interleave(i: u32, j: u32) -> u64 {
    (spread(i) << 1) | spread(j)
}

#[inline]
fn deinterleave(bits: u64) -> (u32, u32) {
    (compact(bits >> 1), compact(bits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::face::xyz_to_face_si_ti;
    use crate::testing::random_point;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_interleave() {
        assert_eq!(interleave(0b11, 0b00), 0b1010);
        assert_eq!(interleave(0b00, 0b11), 0b0101);
        assert_eq!(deinterleave(interleave(0x3FFF_FFFF, 0x1234_5678)), (0x3FFF_FFFF, 0x1234_5678));
    }

    #[test]
    fn test_bits_round_trip() {
        let key = CellKey::new(5, MAX_LEVEL, (1 << 30) - 1, 12345).unwrap();
        assert_eq!(CellKey::from_bits(key.bits(), MAX_LEVEL), Some(key));
        let key = CellKey::new(3, 0, 0, 0).unwrap();
        assert_eq!(key.bits(), 3);
        assert_eq!(CellKey::from_bits(6, 0), None);
        assert_eq!(CellKey::from_bits(6 << 60, MAX_LEVEL), None);
        assert_eq!(CellKey::from_bits(0, MAX_LEVEL + 1), None);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(CellKey::new(6, 0, 0, 0).is_none());
        assert!(CellKey::new(0, 2, 4, 0).is_none());
        assert!(CellKey::new(0, MAX_LEVEL + 1, 0, 0).is_none());
    }

    #[test]
    fn test_center_is_snapped_at_level() {
        let mut rng = StdRng::seed_from_u64(11);
        for level in [0u8, 1, 7, 20, MAX_LEVEL] {
            let p = random_point(&mut rng);
            let key = CellKey::from_point(p, level);
            let c = key.center();
            assert_eq!(xyz_to_face_si_ti(c).3, Some(level));
            assert_eq!(CellKey::from_point(c, level), key);
        }
    }

    #[test]
    fn test_parent_prefix() {
        let mut rng = StdRng::seed_from_u64(5);
        let p = random_point(&mut rng);
        let child = CellKey::from_point(p, 12);
        let parent = CellKey::from_point(p, 11);
        assert_eq!(child.bits() >> 2, parent.bits());
    }
}
