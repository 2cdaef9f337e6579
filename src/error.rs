use crate::math::{Point, Vector};

/// Errors raised by grid addressing, occupancy combination and shape construction.
///
/// Every variant is a precondition violation local to the call that raised it: no state is
/// modified by a call that fails.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VoxelError {
    /// An argument is malformed (non-positive cell size, non-finite bounds, bad mesh index, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// A linear cell index lies outside of `[0, len)`.
    #[error("the cell index {index} is out of range for a grid of {len} cells")]
    InvalidIndex {
        /// The offending index.
        index: usize,
        /// The total number of cells of the grid.
        len: usize,
    },
    /// An integer cell coordinate lies outside of `[0, dimensions)` on some axis.
    #[error("the cell coordinate {coordinate:?} is out of range for a grid of {dimensions:?} cells")]
    InvalidCoordinate {
        /// The offending coordinate.
        coordinate: Point<i32>,
        /// The per-axis cell counts of the grid.
        dimensions: Vector<u32>,
    },
    /// A location or a region lies outside of the grid bounds.
    #[error("the location or region lies outside of the grid bounds")]
    OutOfBounds,
    /// Two occupancy stores cannot be combined because their sizes are incompatible.
    #[error("size mismatch: expected {expected} cells, found {found}")]
    SizeMismatch {
        /// The number of cells the operation expected.
        expected: usize,
        /// The number of cells actually provided.
        found: usize,
    },
}
