/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Invalid file extension.
    #[error("File does not have a valid extension: {0}")]
    InvalidFileExtension(std::path::PathBuf),

    /// Error to open, read or write the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// The file holds fewer bytes than the grid needs.
    #[error("Truncated data: expected {expected} bytes, got {actual}")]
    TruncatedData {
        /// Number of bytes needed.
        expected: usize,
        /// Number of bytes available.
        actual: usize,
    },

    /// The grid size could not be inferred from the file.
    #[error("Cannot infer the grid size of {0}: pass the number of rows and cols")]
    UnknownGridSize(std::path::PathBuf),

    /// The requested grid does not fit in memory.
    #[error("Grid size {0} overflows the addressable file length")]
    InvalidGridSize(dem_grid::GridSize),

    /// A resource file lacks a required field.
    #[error("Resource file is missing the {0} field")]
    MissingRscField(&'static str),

    /// A resource file field holds a value of the wrong type.
    #[error("Invalid value for resource field {0}: {1:?}")]
    InvalidRscField(&'static str, String),

    /// Error to create the grid.
    #[error("Failed to create grid. {0}")]
    GridError(#[from] dem_grid::GridError),
}
