use std::path::Path;

use crate::error::IoError;

/// Byte order of the 16-bit samples stored in a raw elevation file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Least significant byte first, used by ROI-PAC `.dem` files.
    Little,
    /// Most significant byte first, used by SRTM `.hgt` tiles.
    Big,
}

impl ByteOrder {
    /// The byte order of the host.
    pub fn native() -> Self {
        if cfg!(target_endian = "big") {
            ByteOrder::Big
        } else {
            ByteOrder::Little
        }
    }

    /// Select the byte order from the file extension.
    ///
    /// `.hgt` files are big-endian and `.dem` files are little-endian. The
    /// extension is matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidFileExtension`] for any other extension.
    ///
    /// # Example
    ///
    /// ```
    /// use dem_io::ByteOrder;
    ///
    /// assert_eq!(ByteOrder::from_path("N19W156.hgt").unwrap(), ByteOrder::Big);
    /// assert_eq!(ByteOrder::from_path("elevation.dem").unwrap(), ByteOrder::Little);
    /// assert!(ByteOrder::from_path("elevation.tif").is_err());
    /// ```
    pub fn from_path(file_path: impl AsRef<Path>) -> Result<Self, IoError> {
        let file_path = file_path.as_ref();
        let ext = file_path
            .extension()
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        if ext == "hgt" {
            Ok(ByteOrder::Big)
        } else if ext == "dem" {
            Ok(ByteOrder::Little)
        } else {
            Err(IoError::InvalidFileExtension(file_path.to_path_buf()))
        }
    }
}

/// Decode raw bytes into host-order samples.
///
/// # Errors
///
/// Returns [`IoError::TruncatedData`] if the buffer ends in the middle of a sample.
pub fn decode_samples(bytes: &[u8], order: ByteOrder) -> Result<Vec<i16>, IoError> {
    if bytes.len() % 2 != 0 {
        return Err(IoError::TruncatedData {
            expected: bytes.len() + 1,
            actual: bytes.len(),
        });
    }

    let samples = bytes
        .chunks_exact(2)
        .map(|b| match order {
            ByteOrder::Little => i16::from_le_bytes([b[0], b[1]]),
            ByteOrder::Big => i16::from_be_bytes([b[0], b[1]]),
        })
        .collect();

    Ok(samples)
}

/// Encode samples into raw bytes with the given byte order.
pub fn encode_samples(samples: &[i16], order: ByteOrder) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(samples.len() * 2);
    for sample in samples {
        match order {
            ByteOrder::Little => bytes.extend_from_slice(&sample.to_le_bytes()),
            ByteOrder::Big => bytes.extend_from_slice(&sample.to_be_bytes()),
        }
    }
    bytes
}
