#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`IoError`](error::IoError) variants for file access, extension
/// and size validation.
pub mod error;

/// High-level grid reading and writing functions.
///
/// See [`functional::read_grid`] and [`functional::write_grid`].
pub mod functional;

/// Byte order of raw 16-bit samples and conversion to host order.
pub mod raw;

/// ROI-PAC `.dem.rsc` resource files describing `.dem` grids.
pub mod rsc;

/// SRTM tile resolutions and size inference.
pub mod srtm;

pub use crate::error::IoError;
pub use crate::functional::{read_grid, write_grid};
pub use crate::raw::ByteOrder;
pub use crate::rsc::{load_dem_rsc, DemRsc};
pub use crate::srtm::SrtmResolution;
