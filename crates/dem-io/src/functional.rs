use std::path::Path;

use dem_grid::{Grid, GridSize};

use crate::error::IoError;
use crate::raw::{decode_samples, encode_samples, ByteOrder};
use crate::rsc::{load_dem_rsc, rsc_path};
use crate::srtm::SrtmResolution;

/// Reads an elevation grid from a raw `.hgt` or `.dem` file.
///
/// Samples are stored as row-major signed 16-bit integers; `.hgt` files are
/// big-endian and `.dem` files little-endian. The returned grid holds the
/// samples in host order. Bytes past the last sample of the grid are ignored.
///
/// # Arguments
///
/// * `file_path` - The path to the elevation file.
/// * `size` - The size of the grid. When `None`, the size of a `.hgt` file
///   is inferred from its length as a square SRTM tile, and the size of a
///   `.dem` file is read from its `.dem.rsc` resource file.
///
/// # Returns
///
/// The elevation grid.
///
/// # Errors
///
/// Returns an error if the file is missing, has an unsupported extension,
/// holds fewer samples than the grid needs, or its size cannot be inferred.
pub fn read_grid(file_path: impl AsRef<Path>, size: Option<GridSize>) -> Result<Grid, IoError> {
    let file_path = file_path.as_ref();

    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let order = ByteOrder::from_path(file_path)?;
    let bytes = std::fs::read(file_path)?;

    let size = match (size, order) {
        (Some(size), _) => size,
        (None, ByteOrder::Big) => SrtmResolution::from_sample_count(bytes.len() / 2)
            .filter(|_| bytes.len() % 2 == 0)
            .map(|res| res.size())
            .ok_or_else(|| IoError::UnknownGridSize(file_path.to_path_buf()))?,
        (None, ByteOrder::Little) => {
            if !rsc_path(file_path).exists() {
                return Err(IoError::UnknownGridSize(file_path.to_path_buf()));
            }
            load_dem_rsc(file_path)?.size()?
        }
    };

    let expected = size
        .width
        .checked_mul(size.height)
        .and_then(|num_samples| num_samples.checked_mul(2))
        .ok_or(IoError::InvalidGridSize(size))?;
    if bytes.len() < expected {
        return Err(IoError::TruncatedData {
            expected,
            actual: bytes.len(),
        });
    }

    let samples = decode_samples(&bytes[..expected], order)?;
    log::info!(
        "read {} ({:?} endian) from {}",
        size,
        order,
        file_path.display()
    );

    Ok(Grid::new(size, samples)?)
}

/// Writes an elevation grid to a raw `.dem` file.
///
/// Samples are written row-major in host byte order. The whole file is
/// encoded in memory first and written with a single call.
///
/// # Arguments
///
/// * `file_path` - The path to the output file, with a `.dem` extension.
/// * `grid` - The elevation grid to write.
///
/// # Errors
///
/// Returns an error if the extension is not `.dem` or the file cannot be written.
pub fn write_grid(file_path: impl AsRef<Path>, grid: &Grid) -> Result<(), IoError> {
    let file_path = file_path.as_ref();

    if ByteOrder::from_path(file_path)? != ByteOrder::Little {
        return Err(IoError::InvalidFileExtension(file_path.to_path_buf()));
    }

    let bytes = encode_samples(grid.as_slice(), ByteOrder::native());
    std::fs::write(file_path, bytes)?;

    log::info!("wrote {} to {}", grid.size(), file_path.display());

    Ok(())
}
