use dem_grid::{GridError, GridSize};

use crate::parallel::ParallelError;

/// An error type for the upsample module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum UpsampleError {
    /// The upsampling rate must be a positive integer.
    #[error("Upsampling rate must be >= 1, got {0}")]
    InvalidRate(usize),

    /// Interpolation needs at least two rows and two columns.
    #[error("Grid must have at least 2 rows and 2 cols for interpolation, got {0}")]
    GridTooSmall(GridSize),

    /// The upsampled grid is too large to be addressed in memory.
    #[error("Upsampling {src_size} by {rate} overflows the addressable grid size")]
    SizeOverflow {
        /// The requested rate.
        rate: usize,
        /// Size of the source grid.
        src_size: GridSize,
    },

    /// The destination grid does not have the upsampled size.
    #[error("Destination size {actual} does not match the upsampled size {expected}")]
    DestinationSizeMismatch {
        /// Size derived from the source size and the rate.
        expected: GridSize,
        /// Size of the destination grid that was passed in.
        actual: GridSize,
    },

    /// The parallel executor could not run.
    #[error(transparent)]
    Parallel(#[from] ParallelError),

    /// Error creating or accessing a grid.
    #[error(transparent)]
    Grid(#[from] GridError),
}
