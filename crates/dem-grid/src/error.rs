/// An error type for the grid module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GridError {
    /// Error when the sample buffer does not match the grid size.
    #[error("Data length ({0}) does not match the grid size ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when the requested row is not part of the grid.
    #[error("Row index {0} is out of bounds for a grid with {1} rows")]
    RowIndexOutOfBounds(usize, usize),
}
