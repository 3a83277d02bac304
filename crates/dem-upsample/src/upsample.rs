use dem_grid::{Grid, GridSize};

use crate::error::UpsampleError;
use crate::interpolation::{
    corner_interpolation, linear_col_interpolation, linear_row_interpolation,
    BilinearCoefficients,
};
use crate::parallel::{par_iter_bands, ExecutionStrategy};

/// Validated parameters of an upsampling run.
///
/// The upsampled size along each axis is `rate * (n - 1) + 1`, so that the
/// source sample `(i, j)` lands on the output sample `(rate * i, rate * j)`.
///
/// # Examples
///
/// ```
/// use dem_grid::GridSize;
/// use dem_upsample::UpsampleParameters;
///
/// // 3 points at x = (0, 1, 2) become 5 points at x = (0, .5, 1, 1.5, 2)
/// let params = UpsampleParameters::new(2, [3, 4].into()).unwrap();
/// assert_eq!(params.dst_size(), GridSize { width: 5, height: 7 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpsampleParameters {
    rate: usize,
    src_size: GridSize,
}

impl UpsampleParameters {
    /// Create the parameters for upsampling a grid of `src_size` by `rate`.
    ///
    /// # Errors
    ///
    /// Returns an error if `rate` is zero, the grid has fewer than two rows
    /// or two columns, or the upsampled grid can not be addressed in memory.
    pub fn new(rate: usize, src_size: GridSize) -> Result<Self, UpsampleError> {
        if rate < 1 {
            return Err(UpsampleError::InvalidRate(rate));
        }

        if src_size.width < 2 || src_size.height < 2 {
            return Err(UpsampleError::GridTooSmall(src_size));
        }

        let up_size = |n: usize| rate.checked_mul(n - 1)?.checked_add(1);
        let num_bytes = up_size(src_size.width)
            .zip(up_size(src_size.height))
            .and_then(|(width, height)| width.checked_mul(height))
            .and_then(|num_samples| num_samples.checked_mul(std::mem::size_of::<i16>()))
            .filter(|&num_bytes| num_bytes <= isize::MAX as usize);

        if num_bytes.is_none() {
            return Err(UpsampleError::SizeOverflow { rate, src_size });
        }

        Ok(Self { rate, src_size })
    }

    /// The upsampling rate.
    pub fn rate(&self) -> usize {
        self.rate
    }

    /// The size of the source grid.
    pub fn src_size(&self) -> GridSize {
        self.src_size
    }

    /// The size of the upsampled grid.
    pub fn dst_size(&self) -> GridSize {
        GridSize {
            width: self.rate * (self.src_size.width - 1) + 1,
            height: self.rate * (self.src_size.height - 1) + 1,
        }
    }
}

/// Compute the output rows `rate * i .. rate * i + rate` contributed by the
/// source row `i < rows - 1`.
///
/// Every bilinear sub-step of the cells `(i, 0) .. (i, cols - 2)` is written,
/// followed by the last-column samples of row `i`. `write` receives the row
/// offset inside the band, the output column and the value.
fn fill_band<W>(src: &Grid, rate: usize, i: usize, mut write: W)
where
    W: FnMut(usize, usize, i16),
{
    let last_j = src.cols() - 1;

    for j in 0..last_j {
        let coeffs = BilinearCoefficients::from_grid(src, i, j);
        for bi in 0..rate {
            for bj in 0..rate {
                let value = coeffs.interpolate(bi, bj, rate);
                write(bi, rate * j + bj, value);
            }
        }
    }

    for bi in 0..rate {
        let value = linear_col_interpolation(src, i, last_j, bi, rate);
        write(bi, rate * last_j, value);
    }
}

/// Compute the last output row: the last-row samples followed by the corner.
fn fill_last_row<W>(src: &Grid, rate: usize, mut write: W)
where
    W: FnMut(usize, i16),
{
    let last_i = src.rows() - 1;
    let last_j = src.cols() - 1;

    for j in 0..last_j {
        for bj in 0..rate {
            let value = linear_row_interpolation(src, last_i, j, bj, rate);
            write(rate * j + bj, value);
        }
    }

    write(rate * last_j, corner_interpolation(src));
}

/// Upsample an elevation grid into a preallocated destination.
///
/// The destination is split into one band of `rate` output rows per source
/// row plus the final output row. The bands cover disjoint samples, so they
/// are computed independently according to `strategy` and every output
/// sample is written exactly once.
///
/// # Arguments
///
/// * `src` - The source elevation grid.
/// * `dst` - The destination grid, of size `rate * (n - 1) + 1` on each axis.
/// * `rate` - The upsampling rate.
/// * `strategy` - How the bands are executed.
///
/// # Errors
///
/// Returns an error if the parameters are invalid, the destination has the
/// wrong size, or the parallel executor fails.
pub fn upsample_into(
    src: &Grid,
    dst: &mut Grid,
    rate: usize,
    strategy: ExecutionStrategy,
) -> Result<(), UpsampleError> {
    let params = UpsampleParameters::new(rate, src.size())?;
    let dst_size = params.dst_size();

    if dst.size() != dst_size {
        return Err(UpsampleError::DestinationSizeMismatch {
            expected: dst_size,
            actual: dst.size(),
        });
    }

    log::debug!(
        "upsampling {} by {} into {} using {:?}",
        src.size(),
        rate,
        dst_size,
        strategy
    );

    let out_cols = dst_size.width;
    let band_len = rate * out_cols;
    let (bands, last_row) = dst
        .as_slice_mut()
        .split_at_mut((src.rows() - 1) * band_len);

    par_iter_bands(strategy, bands, band_len, |i, band| {
        fill_band(src, rate, i, |bi, col, value| {
            band[bi * out_cols + col] = value;
        });
    })?;

    fill_last_row(src, rate, |col, value| {
        last_row[col] = value;
    });

    Ok(())
}

/// Upsample an elevation grid by an integer rate with the given strategy.
///
/// # Errors
///
/// Returns an error if `rate` is zero, the grid is smaller than 2x2, or the
/// parallel executor fails.
pub fn upsample_with(
    src: &Grid,
    rate: usize,
    strategy: ExecutionStrategy,
) -> Result<Grid, UpsampleError> {
    let params = UpsampleParameters::new(rate, src.size())?;
    let mut dst = Grid::from_size_val(params.dst_size(), 0);
    upsample_into(src, &mut dst, rate, strategy)?;
    Ok(dst)
}

/// Upsample an elevation grid by an integer rate.
///
/// Interior samples are bilinearly interpolated, the last row and column are
/// linearly interpolated, and the bottom-right sample is copied. Samples are
/// truncated toward zero.
///
/// # Arguments
///
/// * `src` - The source elevation grid.
/// * `rate` - The upsampling rate, `>= 1`.
///
/// # Returns
///
/// The upsampled grid.
///
/// # Example
///
/// ```
/// use dem_grid::Grid;
/// use dem_upsample::upsample;
///
/// let src = Grid::new([2, 2].into(), vec![0, 10, 20, 30]).unwrap();
/// let dst = upsample(&src, 2).unwrap();
///
/// assert_eq!(dst.size().width, 3);
/// assert_eq!(dst.size().height, 3);
/// assert_eq!(dst.as_slice(), &[0, 5, 10, 10, 15, 20, 20, 25, 30]);
/// ```
pub fn upsample(src: &Grid, rate: usize) -> Result<Grid, UpsampleError> {
    upsample_with(src, rate, ExecutionStrategy::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpolation::{interpolate_cell, CellInterpolation};
    use dem_grid::GridError;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::collections::HashMap;

    fn random_grid(size: GridSize, seed: u64) -> Result<Grid, GridError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let data = (0..size.num_samples())
            .map(|_| rng.random_range(-500..9000))
            .collect();
        Grid::new(size, data)
    }

    #[test]
    fn parameters_dst_size() -> Result<(), UpsampleError> {
        let params = UpsampleParameters::new(3, [4, 2].into())?;
        assert_eq!(params.rate(), 3);
        assert_eq!(params.src_size(), GridSize::from([4, 2]));
        assert_eq!(params.dst_size(), GridSize::from([10, 4]));

        let params = UpsampleParameters::new(1, [4, 2].into())?;
        assert_eq!(params.dst_size(), params.src_size());
        Ok(())
    }

    #[test]
    fn parameters_invalid() {
        assert_eq!(
            UpsampleParameters::new(0, [3, 3].into()),
            Err(UpsampleError::InvalidRate(0))
        );
        assert_eq!(
            UpsampleParameters::new(2, [1, 3].into()),
            Err(UpsampleError::GridTooSmall([1, 3].into()))
        );
        assert_eq!(
            UpsampleParameters::new(2, [3, 1].into()),
            Err(UpsampleError::GridTooSmall([3, 1].into()))
        );
    }

    #[test]
    fn upsample_known_bilinear() -> Result<(), Box<dyn std::error::Error>> {
        let src = Grid::new([2, 2].into(), vec![0, 10, 20, 30])?;
        let dst = upsample(&src, 2)?;
        assert_eq!(dst.size(), GridSize::from([3, 3]));
        assert_eq!(dst.as_slice(), &[0, 5, 10, 10, 15, 20, 20, 25, 30]);
        Ok(())
    }

    #[test]
    fn upsample_identity() -> Result<(), Box<dyn std::error::Error>> {
        let src = random_grid([7, 5].into(), 1)?;
        let dst = upsample(&src, 1)?;
        assert_eq!(dst, src);
        Ok(())
    }

    #[test]
    fn upsample_preserves_corners() -> Result<(), Box<dyn std::error::Error>> {
        let src = random_grid([6, 4].into(), 2)?;
        let (rows, cols) = (src.rows(), src.cols());
        for rate in 1..6 {
            let dst = upsample(&src, rate)?;
            let (out_rows, out_cols) = (dst.rows(), dst.cols());
            assert_eq!(dst.get(0, 0), src.get(0, 0));
            assert_eq!(dst.get(0, out_cols - 1), src.get(0, cols - 1));
            assert_eq!(dst.get(out_rows - 1, 0), src.get(rows - 1, 0));
            assert_eq!(
                dst.get(out_rows - 1, out_cols - 1),
                src.get(rows - 1, cols - 1)
            );
        }
        Ok(())
    }

    #[test]
    fn upsample_preserves_source_samples() -> Result<(), Box<dyn std::error::Error>> {
        let src = random_grid([5, 6].into(), 3)?;
        let rate = 4;
        let dst = upsample(&src, rate)?;
        for i in 0..src.rows() {
            for j in 0..src.cols() {
                assert_eq!(dst.get(rate * i, rate * j), src.get(i, j), "at ({i}, {j})");
            }
        }
        Ok(())
    }

    #[test]
    fn upsample_matches_cell_kernels() -> Result<(), Box<dyn std::error::Error>> {
        let src = random_grid([4, 3].into(), 4)?;
        let rate = 3;
        let dst = upsample(&src, rate)?;
        for r in 0..dst.rows() {
            for c in 0..dst.cols() {
                let (i, bi) = (r / rate, r % rate);
                let (j, bj) = (c / rate, c % rate);
                let expected = interpolate_cell(&src, i, j, bi, bj, rate);
                assert_eq!(dst.get(r, c), expected, "at ({r}, {c})");
            }
        }
        Ok(())
    }

    #[test]
    fn upsample_disjoint_coverage() -> Result<(), Box<dyn std::error::Error>> {
        let src = random_grid([4, 3].into(), 5)?;
        let rate = 3;
        let dst_size = UpsampleParameters::new(rate, src.size())?.dst_size();
        let mut writes = vec![0u32; dst_size.num_samples()];
        let mut per_kernel: HashMap<CellInterpolation, usize> = HashMap::new();

        let mut count = |row: usize, col: usize| {
            writes[row * dst_size.width + col] += 1;
            let kernel = CellInterpolation::for_cell(row / rate, col / rate, src.size());
            *per_kernel.entry(kernel).or_default() += 1;
        };

        for i in 0..src.rows() - 1 {
            fill_band(&src, rate, i, |bi, col, _| count(rate * i + bi, col));
        }
        fill_last_row(&src, rate, |col, _| count(dst_size.height - 1, col));

        assert!(writes.iter().all(|&n| n == 1));
        let (rows, cols) = (src.rows(), src.cols());
        assert_eq!(
            per_kernel[&CellInterpolation::Bilinear],
            (rows - 1) * (cols - 1) * rate * rate
        );
        assert_eq!(per_kernel[&CellInterpolation::LinearCol], (rows - 1) * rate);
        assert_eq!(per_kernel[&CellInterpolation::LinearRow], (cols - 1) * rate);
        assert_eq!(per_kernel[&CellInterpolation::Corner], 1);
        Ok(())
    }

    #[test]
    fn upsample_edge_linearity() -> Result<(), Box<dyn std::error::Error>> {
        let src = random_grid([5, 4].into(), 6)?;
        let rate = 5;
        let dst = upsample(&src, rate)?;
        let (last_i, last_j) = (src.rows() - 1, src.cols() - 1);

        for j in 0..last_j {
            let (h1, h2) = (src.get(last_i, j) as f32, src.get(last_i, j + 1) as f32);
            for bj in 0..rate {
                let x = bj as f32 / rate as f32;
                let expected = (x * h2 + (1.0 - x) * h1) as i16;
                assert_eq!(dst.get(dst.rows() - 1, rate * j + bj), expected);
            }
        }

        for i in 0..last_i {
            let (h1, h2) = (src.get(i, last_j) as f32, src.get(i + 1, last_j) as f32);
            for bi in 0..rate {
                let y = bi as f32 / rate as f32;
                let expected = (y * h2 + (1.0 - y) * h1) as i16;
                assert_eq!(dst.get(rate * i + bi, dst.cols() - 1), expected);
            }
        }
        Ok(())
    }

    #[test]
    fn upsample_sub_step_bounds() -> Result<(), Box<dyn std::error::Error>> {
        let mut rng = StdRng::seed_from_u64(7);
        let data = (0..5 * 5)
            .map(|_| rng.random_range(i16::MIN..=i16::MAX))
            .collect();
        let src = Grid::new([5, 5].into(), data)?;
        let rate = 7;
        let dst = upsample(&src, rate)?;

        for i in 0..src.rows() - 1 {
            for j in 0..src.cols() - 1 {
                let corners = [
                    src.get(i, j),
                    src.get(i, j + 1),
                    src.get(i + 1, j),
                    src.get(i + 1, j + 1),
                ];
                let lo = *corners.iter().min().unwrap() as i32;
                let hi = *corners.iter().max().unwrap() as i32;
                for bi in 0..rate {
                    for bj in 0..rate {
                        let v = dst.get(rate * i + bi, rate * j + bj) as i32;
                        // the f32 sum can land one ulp past an integer bound,
                        // e.g. 2.9999998 for a bound of 3, which truncates to 2
                        assert!(lo - 1 <= v && v <= hi + 1, "{v} not in [{lo}, {hi}]");
                    }
                }
            }
        }
        Ok(())
    }

    #[test]
    fn upsample_truncates_toward_zero() -> Result<(), Box<dyn std::error::Error>> {
        let src = Grid::new([2, 2].into(), vec![0, -1, 0, -1])?;
        let dst = upsample(&src, 2)?;
        assert_eq!(dst.as_slice(), &[0, 0, -1, 0, 0, -1, 0, 0, -1]);
        Ok(())
    }

    #[test]
    fn upsample_strategies_agree() -> Result<(), Box<dyn std::error::Error>> {
        let src = random_grid([17, 9].into(), 8)?;
        let serial = upsample_with(&src, 4, ExecutionStrategy::Serial)?;
        let parallel = upsample_with(&src, 4, ExecutionStrategy::ParallelRows)?;
        let fixed = upsample_with(&src, 4, ExecutionStrategy::Fixed(3))?;
        assert_eq!(serial, parallel);
        assert_eq!(serial, fixed);
        Ok(())
    }

    #[test]
    fn upsample_into_size_mismatch() -> Result<(), Box<dyn std::error::Error>> {
        let src = Grid::from_size_val([3, 3].into(), 1);
        let mut dst = Grid::from_size_val([4, 5].into(), 0);
        let res = upsample_into(&src, &mut dst, 2, ExecutionStrategy::Serial);
        assert_eq!(
            res,
            Err(UpsampleError::DestinationSizeMismatch {
                expected: [5, 5].into(),
                actual: [4, 5].into(),
            })
        );
        Ok(())
    }

    #[test]
    fn upsample_invalid_parameters() {
        let src = Grid::from_size_val([3, 3].into(), 1);
        assert_eq!(upsample(&src, 0), Err(UpsampleError::InvalidRate(0)));

        let row = Grid::from_size_val([3, 1].into(), 1);
        assert_eq!(
            upsample(&row, 2),
            Err(UpsampleError::GridTooSmall([3, 1].into()))
        );
    }

    #[test]
    fn parameters_size_overflow() {
        let src_size: GridSize = [3, 3].into();
        for rate in [usize::MAX / 2, usize::MAX, 1 << (usize::BITS / 2)] {
            assert_eq!(
                UpsampleParameters::new(rate, src_size),
                Err(UpsampleError::SizeOverflow { rate, src_size })
            );
        }

        let src = Grid::from_size_val(src_size, 1);
        assert_eq!(
            upsample(&src, usize::MAX / 2),
            Err(UpsampleError::SizeOverflow {
                rate: usize::MAX / 2,
                src_size
            })
        );
    }

    #[test]
    fn upsample_fixed_zero_threads() {
        let src = Grid::from_size_val([3, 3].into(), 1);
        let res = upsample_with(&src, 2, ExecutionStrategy::Fixed(0));
        assert!(matches!(res, Err(UpsampleError::Parallel(_))));
    }
}
