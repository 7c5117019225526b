//! Binary encoding of polylines.

use super::codec::{
    read_f64, read_u32, read_u8, read_varint, write_f64, write_u32, write_u8, write_varint,
};
use crate::cell::{xyz_to_face_si_ti, CellKey};
use crate::consts::MAX_LEVEL;
use crate::error::DecodeError;
use crate::polyline::Polyline;
use crate::primitives::{Point, Vec3};
use std::io::{self, Read, Write};
use tracing::debug;

const LOSSLESS_VERSION: u8 = 1;
const COMPRESSED_VERSION: u8 = 2;

/// Upper bound on vertices preallocated from an untrusted count.
const MAX_PREALLOCATED: usize = 1 << 16;

/// Wire format selection for [`Polyline::encode_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// Each vertex as three `f64`s. Decodes to an identical polyline.
    #[default]
    Lossless,
    /// Each vertex snapped to the centre of its cell at `level`, stored as
    /// delta-coded cell keys. An empty polyline is written losslessly.
    Compressed {
        /// Cell level, at most [`MAX_LEVEL`].
        level: u8,
    },
    /// `Compressed` at the common level if every vertex already is a cell
    /// centre at one level (so nothing is lost), otherwise `Lossless`.
    MostCompact,
}

impl Polyline {
    /// Writes the polyline in the lossless format.
    pub fn encode<W: Write>(&self, w: &mut W) -> io::Result<()> {
        self.encode_with(w, Encoding::Lossless)
    }

    /// Writes the polyline in the chosen format.
    ///
    /// Fails with [`io::ErrorKind::InvalidInput`] for a compressed level
    /// above [`MAX_LEVEL`] or more vertices than fit in a `u32`, and with
    /// any error from the writer.
    pub fn encode_with<W: Write>(&self, w: &mut W, encoding: Encoding) -> io::Result<()> {
        let count = u32::try_from(self.num_vertices())
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "too many vertices"))?;
        match encoding {
            Encoding::Lossless => self.encode_lossless(w, count),
            Encoding::Compressed { level } => {
                if level > MAX_LEVEL {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("cell level {level} exceeds maximum {MAX_LEVEL}"),
                    ));
                }
                self.encode_compressed(w, count, level)
            }
            Encoding::MostCompact => match snapped_level(self.vertices()) {
                Some(level) => {
                    debug!(level, vertices = count, "encoding snapped polyline compressed");
                    self.encode_compressed(w, count, level)
                }
                None => {
                    debug!(vertices = count, "polyline not snapped, encoding lossless");
                    self.encode_lossless(w, count)
                }
            },
        }
    }

    fn encode_lossless<W: Write>(&self, w: &mut W, count: u32) -> io::Result<()> {
        write_u8(w, LOSSLESS_VERSION)?;
        write_u32(w, count)?;
        for v in self.vertices() {
            write_f64(w, v.x())?;
            write_f64(w, v.y())?;
            write_f64(w, v.z())?;
        }
        Ok(())
    }

    fn encode_compressed<W: Write>(&self, w: &mut W, count: u32, level: u8) -> io::Result<()> {
        // The lossless header is one byte shorter and carries nothing else.
        if count == 0 {
            return self.encode_lossless(w, count);
        }
        write_u8(w, COMPRESSED_VERSION)?;
        write_u8(w, level)?;
        write_u32(w, count)?;
        let mut prev = 0i64;
        for &v in self.vertices() {
            // Keys stay below 6 << 60, so they fit an i64 and so does every
            // difference between two of them.
            let key = CellKey::from_point(v, level).bits() as i64;
            write_varint(w, key - prev)?;
            prev = key;
        }
        Ok(())
    }

    /// Reads a polyline in either format.
    ///
    /// Nothing is returned unless the whole stream decodes. A stream that
    /// ends early yields [`DecodeError::Io`] with
    /// [`io::ErrorKind::UnexpectedEof`].
    pub fn decode<R: Read>(r: &mut R) -> Result<Polyline, DecodeError> {
        let version = read_u8(r)?;
        let result = match version {
            LOSSLESS_VERSION => decode_lossless(r),
            COMPRESSED_VERSION => decode_compressed(r),
            _ => Err(DecodeError::UnknownVersion(version)),
        };
        if let Err(err) = &result {
            debug!(version, error = %err, "rejected encoded polyline");
        }
        result
    }
}

fn decode_lossless<R: Read>(r: &mut R) -> Result<Polyline, DecodeError> {
    let count = read_u32(r)? as usize;
    debug!(version = LOSSLESS_VERSION, vertices = count, "decoding polyline");
    let mut vertices = Vec::with_capacity(count.min(MAX_PREALLOCATED));
    for _ in 0..count {
        let x = read_f64(r)?;
        let y = read_f64(r)?;
        let z = read_f64(r)?;
        vertices.push(Point::from_vec_unchecked(Vec3::new(x, y, z)));
    }
    Ok(Polyline::new(vertices))
}

fn decode_compressed<R: Read>(r: &mut R) -> Result<Polyline, DecodeError> {
    let level = read_u8(r)?;
    if level > MAX_LEVEL {
        return Err(DecodeError::LevelTooHigh {
            level,
            max: MAX_LEVEL,
        });
    }
    let count = read_u32(r)? as usize;
    debug!(version = COMPRESSED_VERSION, level, vertices = count, "decoding polyline");

    let mut vertices = Vec::with_capacity(count.min(MAX_PREALLOCATED));
    let mut key = 0i64;
    for index in 0..count {
        let delta = read_varint(r)?;
        key = key
            .checked_add(delta)
            .filter(|&k| k >= 0)
            .ok_or(DecodeError::InvalidCell { index })?;
        let cell = CellKey::from_bits(key as u64, level).ok_or(DecodeError::InvalidCell { index })?;
        vertices.push(cell.center());
    }
    Ok(Polyline::new(vertices))
}

/// Returns the level at which every vertex is exactly a cell centre, if
/// there is one. Empty input has no such level.
fn snapped_level(vertices: &[Point]) -> Option<u8> {
    let mut levels = vertices.iter().map(|&v| xyz_to_face_si_ti(v).3);
    let first = levels.next()??;
    levels.all(|level| level == Some(first)).then_some(first)
}
