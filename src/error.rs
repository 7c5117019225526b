//! Error types for spherum operations.

use thiserror::Error;

/// A polyline invariant violated, reported by
/// [`Polyline::validate`](crate::polyline::Polyline::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A vertex is not unit length.
    #[error("vertex {index} is not unit length")]
    NotUnitLength {
        /// Index of the offending vertex.
        index: usize,
    },

    /// Two adjacent vertices are identical.
    #[error("vertices {first} and {second} are identical")]
    IdenticalVertices {
        /// Index of the first vertex of the pair.
        first: usize,
        /// Index of the second vertex of the pair.
        second: usize,
    },

    /// Two adjacent vertices are exactly antipodal.
    #[error("vertices {first} and {second} are antipodal")]
    AntipodalVertices {
        /// Index of the first vertex of the pair.
        first: usize,
        /// Index of the second vertex of the pair.
        second: usize,
    },
}

/// Failure to decode an encoded polyline.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The version byte names no known format.
    #[error("unknown encoding version {0}")]
    UnknownVersion(u8),

    /// The compressed stream declares a cell level above the maximum.
    #[error("cell level {level} exceeds maximum {max}")]
    LevelTooHigh {
        /// Declared level.
        level: u8,
        /// Largest supported level.
        max: u8,
    },

    /// A decoded cell key does not name a cell at the stream's level.
    #[error("invalid cell key for vertex {index}")]
    InvalidCell {
        /// Index of the vertex whose key is invalid.
        index: usize,
    },

    /// A variable-length integer ran past ten bytes.
    #[error("varint too long")]
    VarintOverflow,

    /// The underlying reader failed, including truncated input.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
