use dem_grid::GridSize;

/// Resolution of a square SRTM `.hgt` tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SrtmResolution {
    /// 1 arc-second (~30 m) tiles of 3601x3601 samples.
    Srtm1,
    /// 3 arc-second (~90 m) tiles of 1201x1201 samples.
    Srtm3,
}

impl SrtmResolution {
    /// Number of samples along one side of the tile.
    pub fn side(&self) -> usize {
        match self {
            SrtmResolution::Srtm1 => 3601,
            SrtmResolution::Srtm3 => 1201,
        }
    }

    /// Size of the tile.
    pub fn size(&self) -> GridSize {
        GridSize {
            width: self.side(),
            height: self.side(),
        }
    }

    /// Infer the resolution from the number of samples in a tile.
    ///
    /// # Example
    ///
    /// ```
    /// use dem_io::SrtmResolution;
    ///
    /// assert_eq!(SrtmResolution::from_sample_count(3601 * 3601), Some(SrtmResolution::Srtm1));
    /// assert_eq!(SrtmResolution::from_sample_count(1201 * 1201), Some(SrtmResolution::Srtm3));
    /// assert_eq!(SrtmResolution::from_sample_count(1000), None);
    /// ```
    pub fn from_sample_count(num_samples: usize) -> Option<Self> {
        [SrtmResolution::Srtm1, SrtmResolution::Srtm3]
            .into_iter()
            .find(|res| res.side() * res.side() == num_samples)
    }
}
