use crate::error::GridError;

/// Grid size in samples
///
/// A struct to represent the size of an elevation grid in samples.
///
/// # Examples
///
/// ```
/// use dem_grid::GridSize;
///
/// let grid_size = GridSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(grid_size.width, 10);
/// assert_eq!(grid_size.height, 20);
/// assert_eq!(grid_size.num_samples(), 200);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSize {
    /// Number of columns of the grid
    pub width: usize,
    /// Number of rows of the grid
    pub height: usize,
}

impl GridSize {
    /// Total number of samples held by a grid of this size.
    pub fn num_samples(&self) -> usize {
        self.width * self.height
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "GridSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for GridSize {
    fn from(size: [usize; 2]) -> Self {
        GridSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Represents a digital elevation model as a grid of signed 16-bit samples.
///
/// The samples are stored in row-major order: the sample at row `r` and
/// column `c` lives at offset `r * cols + c` of the backing buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: GridSize,
    data: Vec<i16>,
}

impl Grid {
    /// Create a new grid from sample data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the grid in samples.
    /// * `data` - The samples of the grid in row-major order.
    ///
    /// # Errors
    ///
    /// If the length of the data does not match the grid size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use dem_grid::{Grid, GridSize};
    ///
    /// let grid = Grid::new(
    ///     GridSize {
    ///         width: 2,
    ///         height: 3,
    ///     },
    ///     vec![0i16, 1, 2, 3, 4, 5],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(grid.cols(), 2);
    /// assert_eq!(grid.rows(), 3);
    /// assert_eq!(grid.get(2, 1), 5);
    /// ```
    pub fn new(size: GridSize, data: Vec<i16>) -> Result<Self, GridError> {
        if data.len() != size.num_samples() {
            return Err(GridError::InvalidDataLength(data.len(), size.num_samples()));
        }

        Ok(Self { size, data })
    }

    /// Create a new grid with the given size where every sample is `val`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dem_grid::{Grid, GridSize};
    ///
    /// let grid = Grid::from_size_val([4, 3].into(), -32768);
    ///
    /// assert_eq!(grid.size().width, 4);
    /// assert!(grid.as_slice().iter().all(|&h| h == -32768));
    /// ```
    pub fn from_size_val(size: GridSize, val: i16) -> Self {
        Self {
            size,
            data: vec![val; size.num_samples()],
        }
    }

    /// Get the size of the grid in samples.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Get the number of rows of the grid.
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// Get the number of columns of the grid.
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// Get the sample at the given row and column.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows()` or `col >= cols()`.
    #[track_caller]
    pub fn get(&self, row: usize, col: usize) -> i16 {
        self.data[self.index(row, col)]
    }

    /// Set the sample at the given row and column.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows()` or `col >= cols()`.
    #[track_caller]
    pub fn set(&mut self, row: usize, col: usize, value: i16) {
        let idx = self.index(row, col);
        self.data[idx] = value;
    }

    /// Get the sample at the given row and column, or `None` if the index is
    /// outside the grid.
    pub fn try_get(&self, row: usize, col: usize) -> Option<i16> {
        if row < self.rows() && col < self.cols() {
            Some(self.data[row * self.cols() + col])
        } else {
            None
        }
    }

    /// Get one row of the grid as a slice.
    ///
    /// # Errors
    ///
    /// If the row index is out of bounds, an error is returned.
    pub fn row(&self, row: usize) -> Result<&[i16], GridError> {
        if row >= self.rows() {
            return Err(GridError::RowIndexOutOfBounds(row, self.rows()));
        }
        let start = row * self.cols();
        Ok(&self.data[start..start + self.cols()])
    }

    /// Get the samples of the grid in row-major order.
    pub fn as_slice(&self) -> &[i16] {
        &self.data
    }

    /// Get the samples of the grid in row-major order as a mutable slice.
    pub fn as_slice_mut(&mut self) -> &mut [i16] {
        &mut self.data
    }

    /// Consume the grid and return its samples in row-major order.
    pub fn into_vec(self) -> Vec<i16> {
        self.data
    }

    #[track_caller]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows() && col < self.cols(),
            "index ({row}, {col}) out of bounds for grid with {} rows and {} cols",
            self.rows(),
            self.cols()
        );
        row * self.cols() + col
    }
}
