use thiserror::Error;

/// Crate-specific error enum.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The vector has no direction to normalize to.
    #[error("cannot normalize a vector whose length is not positive")]
    ZeroLength,

    /// A sphere needs at least one segment in each direction.
    #[error("invalid sphere segments: width={width}, height={height}")]
    InvalidSegments {
        /// The width (longitude) segment count.
        width: u32,

        /// The height (latitude) segment count.
        height: u32,
    },

    /// The mesh has more vertices than a `u32` index can address.
    #[error("too many vertices for u32 indices: {0}")]
    TooManyVertices(u64),

    /// The index list does not describe whole triangles.
    #[error("index count {0} is not a multiple of three")]
    IncompleteTriangle(usize),

    /// A triangle refers to a vertex that does not exist.
    #[error("index {index} is out of range for {len} positions")]
    IndexOutOfRange {
        /// The offending index.
        index: u32,

        /// The number of positions.
        len: usize,
    },
}
