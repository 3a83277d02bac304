use dem_grid::Grid;

use super::interpolate::{sub_step_fraction, truncate_to_i16};

/// Coefficients of the bilinear surface spanning one source cell.
///
/// With corners `h1 = G(i, j)`, `h2 = G(i, j + 1)`, `h3 = G(i + 1, j)` and
/// `h4 = G(i + 1, j + 1)`, the surface is
/// `a00 + a10 * x + a01 * y + a11 * x * y` for `x, y` in `[0, 1)`.
///
/// The coefficients are kept in `i32` so that `a11 = h1 - h2 - h3 + h4` can
/// not overflow for any pair of 16-bit corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BilinearCoefficients {
    /// Value at the top-left corner.
    pub a00: i32,
    /// Slope along the row.
    pub a10: i32,
    /// Slope down the column.
    pub a01: i32,
    /// Cross term.
    pub a11: i32,
}

impl BilinearCoefficients {
    /// Compute the coefficients from the four corner samples.
    ///
    /// # Examples
    ///
    /// ```
    /// use dem_upsample::interpolation::BilinearCoefficients;
    ///
    /// let c = BilinearCoefficients::from_corners(0, 10, 20, 30);
    /// assert_eq!((c.a00, c.a10, c.a01, c.a11), (0, 10, 20, 0));
    /// ```
    pub fn from_corners(h1: i16, h2: i16, h3: i16, h4: i16) -> Self {
        let (h1, h2, h3, h4) = (h1 as i32, h2 as i32, h3 as i32, h4 as i32);
        Self {
            a00: h1,
            a10: h2 - h1,
            a01: h3 - h1,
            a11: h1 - h2 - h3 + h4,
        }
    }

    /// Compute the coefficients of the source cell whose top-left sample is `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `(i + 1, j + 1)` is outside the grid.
    pub fn from_grid(src: &Grid, i: usize, j: usize) -> Self {
        Self::from_corners(
            src.get(i, j),
            src.get(i, j + 1),
            src.get(i + 1, j),
            src.get(i + 1, j + 1),
        )
    }

    /// Evaluate the surface at the fractional position `(x, y)`.
    #[inline]
    pub fn eval(&self, x: f32, y: f32) -> f32 {
        self.a00 as f32 + self.a10 as f32 * x + self.a01 as f32 * y + self.a11 as f32 * x * y
    }

    /// Evaluate the surface at sub-step `(bi, bj)` and narrow it to a sample.
    #[inline]
    pub fn interpolate(&self, bi: usize, bj: usize, rate: usize) -> i16 {
        let x = sub_step_fraction(bj, rate);
        let y = sub_step_fraction(bi, rate);
        truncate_to_i16(self.eval(x, y))
    }
}

/// Kernel for bilinear interpolation
///
/// # Arguments
///
/// * `src` - The source elevation grid.
/// * `i` - The source row of the cell, `i < rows - 1`.
/// * `j` - The source column of the cell, `j < cols - 1`.
/// * `bi` - The sub-step down the cell.
/// * `bj` - The sub-step across the cell.
/// * `rate` - The upsampling rate.
///
/// # Returns
///
/// The interpolated sample, truncated toward zero.
pub fn bilinear_interpolation(
    src: &Grid,
    i: usize,
    j: usize,
    bi: usize,
    bj: usize,
    rate: usize,
) -> i16 {
    BilinearCoefficients::from_grid(src, i, j).interpolate(bi, bj, rate)
}
