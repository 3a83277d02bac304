use dem_grid::{Grid, GridSize};

use super::bilinear::bilinear_interpolation;
use super::linear::{linear_col_interpolation, linear_row_interpolation};

/// Interpolation kernel applied to a source cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellInterpolation {
    /// Four-sample interpolation for cells with a right and a lower neighbor.
    Bilinear,
    /// Two-sample interpolation along the last row.
    LinearRow,
    /// Two-sample interpolation down the last column.
    LinearCol,
    /// Verbatim copy of the bottom-right sample.
    Corner,
}

impl CellInterpolation {
    /// Select the kernel for the source cell `(i, j)` of a grid of size `size`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dem_upsample::interpolation::CellInterpolation;
    ///
    /// let size = [3, 3].into();
    /// assert_eq!(CellInterpolation::for_cell(0, 0, size), CellInterpolation::Bilinear);
    /// assert_eq!(CellInterpolation::for_cell(2, 0, size), CellInterpolation::LinearRow);
    /// assert_eq!(CellInterpolation::for_cell(0, 2, size), CellInterpolation::LinearCol);
    /// assert_eq!(CellInterpolation::for_cell(2, 2, size), CellInterpolation::Corner);
    /// ```
    pub fn for_cell(i: usize, j: usize, size: GridSize) -> Self {
        let last_row = i + 1 >= size.height;
        let last_col = j + 1 >= size.width;
        match (last_row, last_col) {
            (false, false) => CellInterpolation::Bilinear,
            (true, false) => CellInterpolation::LinearRow,
            (false, true) => CellInterpolation::LinearCol,
            (true, true) => CellInterpolation::Corner,
        }
    }
}

/// Narrow an interpolated value to the 16-bit sample domain.
///
/// The fractional part is discarded, truncating toward zero (`2.9 -> 2`,
/// `-2.9 -> -2`). Values outside the `i16` range saturate and `NaN` maps to 0.
///
/// # Examples
///
/// ```
/// use dem_upsample::interpolation::truncate_to_i16;
///
/// assert_eq!(truncate_to_i16(2.9), 2);
/// assert_eq!(truncate_to_i16(-2.9), -2);
/// assert_eq!(truncate_to_i16(40000.0), i16::MAX);
/// ```
#[inline]
pub fn truncate_to_i16(value: f32) -> i16 {
    value as i16
}

/// Fractional position of sub-step `step` inside a cell, in `[0, 1)`.
#[inline]
pub fn sub_step_fraction(step: usize, rate: usize) -> f32 {
    step as f32 / rate as f32
}

/// Copy of the bottom-right source sample, which has no neighbor to blend with.
pub fn corner_interpolation(src: &Grid) -> i16 {
    src.get(src.rows() - 1, src.cols() - 1)
}

/// Kernel for interpolating one upsampled sample
///
/// # Arguments
///
/// * `src` - The source elevation grid.
/// * `i` - The source row of the cell.
/// * `j` - The source column of the cell.
/// * `bi` - The sub-step down the cell, in `[0, rate)`.
/// * `bj` - The sub-step across the cell, in `[0, rate)`.
/// * `rate` - The upsampling rate.
///
/// # Returns
///
/// The sample at output position `(rate * i + bi, rate * j + bj)`. Sub-steps
/// that point past the last row or column are ignored for the edge kernels.
pub fn interpolate_cell(src: &Grid, i: usize, j: usize, bi: usize, bj: usize, rate: usize) -> i16 {
    match CellInterpolation::for_cell(i, j, src.size()) {
        CellInterpolation::Bilinear => bilinear_interpolation(src, i, j, bi, bj, rate),
        CellInterpolation::LinearRow => linear_row_interpolation(src, i, j, bj, rate),
        CellInterpolation::LinearCol => linear_col_interpolation(src, i, j, bi, rate),
        CellInterpolation::Corner => corner_interpolation(src),
    }
}
