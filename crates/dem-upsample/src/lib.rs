#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the upsampling operations.
pub mod error;

/// utilities for interpolating upsampled samples.
pub mod interpolation;

/// module containing parallization utilities.
pub mod parallel;

/// integer-rate upsampling of elevation grids.
pub mod upsample;

pub use crate::error::UpsampleError;
pub use crate::upsample::{upsample, upsample_into, upsample_with, UpsampleParameters};
