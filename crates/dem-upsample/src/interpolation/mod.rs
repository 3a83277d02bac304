//! Sample interpolation kernels used when upsampling elevation grids.
//!
//! An upsampled grid places the source samples at `(rate * i, rate * j)` and
//! fills the `rate - 1` samples between them. The kernel used for a given
//! source cell depends on where the cell sits in the grid.
//!
//! # Interpolation Modes
//!
//! - **Bilinear**: interior cells, blends the four surrounding samples
//! - **LinearRow**: cells on the last row, blends two samples along the row
//! - **LinearCol**: cells on the last column, blends two samples down the column
//! - **Corner**: the bottom-right sample, copied verbatim
//!
//! All kernels evaluate in `f32` and narrow the result with
//! [`truncate_to_i16`], which truncates toward zero.

mod bilinear;
mod interpolate;
mod linear;

pub use bilinear::{bilinear_interpolation, BilinearCoefficients};
pub use interpolate::{
    corner_interpolation, interpolate_cell, sub_step_fraction, truncate_to_i16, CellInterpolation,
};
pub use linear::{linear_col_interpolation, linear_row_interpolation};
