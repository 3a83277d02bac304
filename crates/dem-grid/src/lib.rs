#![deny(missing_docs)]
//! Elevation grid types for storing and indexing DEM samples

/// elevation grid representation.
pub mod grid;

/// Error types for the grid module.
pub mod error;

pub use crate::error::GridError;
pub use crate::grid::{Grid, GridSize};
