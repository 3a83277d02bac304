//! Digital elevation model upsampling for InSAR processing.
//!
//! Re-exports the grid container, the upsampling kernels and the raw file
//! reader and writer under a single crate.

#[doc(inline)]
pub use dem_grid as grid;

#[doc(inline)]
pub use dem_upsample as upsample;

#[doc(inline)]
pub use dem_io as io;
