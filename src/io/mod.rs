//! Binary encoding and decoding.
//!
//! Two formats share a leading version byte:
//!
//! | Version | Layout |
//! |---|---|
//! | 1, lossless | `u32` vertex count, then `x, y, z` as `f64` per vertex |
//! | 2, compressed | `u8` cell level, `u32` vertex count, then one zig-zag varint per vertex: the difference between its cell key and the previous one |
//!
//! All fixed-width values are little-endian.
//!
//! # Example
//!
//! ```
//! use spherum::io::Encoding;
//! use spherum::polyline::Polyline;
//! use spherum::primitives::LatLng;
//!
//! let line = Polyline::from_lat_lngs(&[
//!     LatLng::from_degrees(0.0, 0.0),
//!     LatLng::from_degrees(10.0, 20.0),
//! ]);
//! let mut buf = Vec::new();
//! line.encode_with(&mut buf, Encoding::Lossless).unwrap();
//! let decoded = Polyline::decode(&mut buf.as_slice()).unwrap();
//! assert_eq!(decoded, line);
//! ```

mod codec;
mod polyline;

pub use polyline::Encoding;
