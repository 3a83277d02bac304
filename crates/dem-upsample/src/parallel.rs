use rayon::prelude::*;
use thiserror::Error;

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),

    /// The band length must be valid.
    #[error("band length must be > 0, got {0}")]
    InvalidBandLength(usize),

    /// The destination does not split into whole bands.
    #[error("destination length {0} is not a multiple of the band length {1}")]
    SizeMismatch(usize, usize),
}

/// Controls how the upsampling bands are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Run sequentially on the current thread.
    ///
    /// Useful for small grids, debugging, or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,

    /// Use the global Rayon thread pool to process bands in parallel.
    #[default]
    ParallelRows,

    /// Run on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    /// Use this primarily for benchmarking or specific isolation needs.
    Fixed(usize),
}

/// Apply a function to every band of a buffer with the given strategy.
///
/// The buffer is split into consecutive, non-overlapping chunks of
/// `band_len` elements and `f` is called with the band index and the band.
///
/// # Arguments
///
/// * `strategy` - The execution strategy.
/// * `dst` - The buffer to split into bands.
/// * `band_len` - The number of elements of each band.
/// * `f` - The operation to run on each `(index, band)` pair.
///
/// # Errors
///
/// Returns an error if the band length is zero, does not divide the buffer,
/// or the local thread pool cannot be built.
pub fn par_iter_bands<T, F>(
    strategy: ExecutionStrategy,
    dst: &mut [T],
    band_len: usize,
    f: F,
) -> Result<(), ParallelError>
where
    T: Send,
    F: Fn(usize, &mut [T]) + Send + Sync,
{
    if band_len == 0 {
        return Err(ParallelError::InvalidBandLength(band_len));
    }

    if dst.len() % band_len != 0 {
        return Err(ParallelError::SizeMismatch(dst.len(), band_len));
    }

    match strategy {
        ExecutionStrategy::Serial => {
            dst.chunks_exact_mut(band_len)
                .enumerate()
                .for_each(|(i, band)| f(i, band));
        }
        ExecutionStrategy::ParallelRows => {
            dst.par_chunks_exact_mut(band_len)
                .enumerate()
                .for_each(|(i, band)| f(i, band));
        }
        ExecutionStrategy::Fixed(n) => {
            if n == 0 {
                return Err(ParallelError::InvalidThreadCount(n));
            }
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| ParallelError::BuildError(e.to_string()))?;

            pool.install(|| {
                dst.par_chunks_exact_mut(band_len)
                    .enumerate()
                    .for_each(|(i, band)| f(i, band));
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_index(i: usize, band: &mut [usize]) {
        band.iter_mut().for_each(|v| *v = i);
    }

    #[test]
    fn test_bands_serial() {
        let mut dst = vec![0; 6];
        par_iter_bands(ExecutionStrategy::Serial, &mut dst, 2, fill_index).unwrap();
        assert_eq!(dst, vec![0, 0, 1, 1, 2, 2]);
    }

    #[test]
    fn test_bands_parallel_rows() {
        let mut dst = vec![0; 6];
        par_iter_bands(ExecutionStrategy::ParallelRows, &mut dst, 3, fill_index).unwrap();
        assert_eq!(dst, vec![0, 0, 0, 1, 1, 1]);
    }

    #[test]
    fn test_bands_fixed_success() {
        let mut dst = vec![0; 4];
        par_iter_bands(ExecutionStrategy::Fixed(2), &mut dst, 1, fill_index).unwrap();
        assert_eq!(dst, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_bands_fixed_error() {
        let mut dst = vec![0; 4];
        let res = par_iter_bands(ExecutionStrategy::Fixed(0), &mut dst, 1, fill_index);
        assert_eq!(res, Err(ParallelError::InvalidThreadCount(0)));
    }

    #[test]
    fn test_bands_invalid_length() {
        let mut dst = vec![0; 4];
        let res = par_iter_bands(ExecutionStrategy::Serial, &mut dst, 0, fill_index);
        assert_eq!(res, Err(ParallelError::InvalidBandLength(0)));
        let res = par_iter_bands(ExecutionStrategy::Serial, &mut dst, 3, fill_index);
        assert_eq!(res, Err(ParallelError::SizeMismatch(4, 3)));
    }

    #[test]
    fn test_default_strategy() {
        assert_eq!(ExecutionStrategy::default(), ExecutionStrategy::ParallelRows);
    }
}
