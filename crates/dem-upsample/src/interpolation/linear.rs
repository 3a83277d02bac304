use dem_grid::Grid;

use super::interpolate::{sub_step_fraction, truncate_to_i16};

#[inline]
fn lerp(h1: i16, h2: i16, t: f32) -> i16 {
    truncate_to_i16(t * h2 as f32 + (1.0 - t) * h1 as f32)
}

/// Kernel for linear interpolation along the last row
///
/// Blends `h1 = G(i, j)` and `h2 = G(i, j + 1)` at `x = bj / rate`.
///
/// # Arguments
///
/// * `src` - The source elevation grid.
/// * `i` - The source row, normally `rows - 1`.
/// * `j` - The source column, `j < cols - 1`.
/// * `bj` - The sub-step along the row.
/// * `rate` - The upsampling rate.
pub fn linear_row_interpolation(src: &Grid, i: usize, j: usize, bj: usize, rate: usize) -> i16 {
    let x = sub_step_fraction(bj, rate);
    lerp(src.get(i, j), src.get(i, j + 1), x)
}

/// Kernel for linear interpolation down the last column
///
/// Blends `h1 = G(i, j)` and `h2 = G(i + 1, j)` at `y = bi / rate`.
///
/// # Arguments
///
/// * `src` - The source elevation grid.
/// * `i` - The source row, `i < rows - 1`.
/// * `j` - The source column, normally `cols - 1`.
/// * `bi` - The sub-step down the column.
/// * `rate` - The upsampling rate.
pub fn linear_col_interpolation(src: &Grid, i: usize, j: usize, bi: usize, rate: usize) -> i16 {
    let y = sub_step_fraction(bi, rate);
    lerp(src.get(i, j), src.get(i + 1, j), y)
}
