use std::path::{Path, PathBuf};

use dem_grid::GridSize;

use crate::error::IoError;

/// A key of a ROI-PAC `.dem.rsc` resource file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RscField {
    /// Number of columns.
    Width,
    /// Number of rows.
    FileLength,
    /// Column spacing.
    XStep,
    /// Row spacing.
    YStep,
    /// Position of the first column.
    XFirst,
    /// Position of the first row.
    YFirst,
    /// Unit of the column axis.
    XUnit,
    /// Unit of the row axis.
    YUnit,
    /// Elevation offset.
    ZOffset,
    /// Elevation scale.
    ZScale,
    /// Projection name.
    Projection,
}

impl RscField {
    /// Every recognised field, in lookup order.
    pub const ALL: [RscField; 11] = [
        RscField::Width,
        RscField::FileLength,
        RscField::XStep,
        RscField::YStep,
        RscField::XFirst,
        RscField::YFirst,
        RscField::XUnit,
        RscField::YUnit,
        RscField::ZOffset,
        RscField::ZScale,
        RscField::Projection,
    ];

    /// The key as written in the file.
    pub fn key(&self) -> &'static str {
        match self {
            RscField::Width => "WIDTH",
            RscField::FileLength => "FILE_LENGTH",
            RscField::XStep => "X_STEP",
            RscField::YStep => "Y_STEP",
            RscField::XFirst => "X_FIRST",
            RscField::YFirst => "Y_FIRST",
            RscField::XUnit => "X_UNIT",
            RscField::YUnit => "Y_UNIT",
            RscField::ZOffset => "Z_OFFSET",
            RscField::ZScale => "Z_SCALE",
            RscField::Projection => "PROJECTION",
        }
    }

    fn validate(&self, value: &str) -> bool {
        match self {
            RscField::Width | RscField::FileLength => value.parse::<usize>().is_ok(),
            RscField::ZOffset | RscField::ZScale => value.parse::<i64>().is_ok(),
            RscField::XStep | RscField::YStep | RscField::XFirst | RscField::YFirst => {
                value.parse::<f64>().is_ok()
            }
            RscField::XUnit | RscField::YUnit | RscField::Projection => true,
        }
    }
}

/// Contents of a `.dem.rsc` file.
///
/// Fields keep the order in which they first appear in the file and their
/// values are kept as written, so formatting reproduces unchanged fields
/// verbatim.
///
/// Example file:
///
/// ```text
/// WIDTH         10801
/// FILE_LENGTH   7201
/// X_FIRST       -157.0
/// Y_FIRST       21.0
/// X_STEP        0.000277777777
/// Y_STEP        -0.000277777777
/// X_UNIT        degrees
/// Y_UNIT        degrees
/// Z_OFFSET      0
/// Z_SCALE       1
/// PROJECTION    LL
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DemRsc {
    fields: Vec<(RscField, String)>,
}

impl DemRsc {
    /// Get the raw value of a field.
    pub fn get(&self, field: RscField) -> Option<&str> {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, value)| value.as_str())
    }

    /// Set a field, keeping its position if it is already present.
    pub fn set(&mut self, field: RscField, value: impl Into<String>) {
        let value = value.into();
        match self.fields.iter_mut().find(|(f, _)| *f == field) {
            Some(entry) => entry.1 = value,
            None => self.fields.push((field, value)),
        }
    }

    /// Iterate over the fields in file order.
    pub fn iter(&self) -> impl Iterator<Item = (RscField, &str)> {
        self.fields.iter().map(|(f, value)| (*f, value.as_str()))
    }

    /// Grid size described by `WIDTH` and `FILE_LENGTH`.
    ///
    /// # Errors
    ///
    /// Returns an error if either field is missing.
    pub fn size(&self) -> Result<GridSize, IoError> {
        Ok(GridSize {
            width: self.get_usize(RscField::Width)?,
            height: self.get_usize(RscField::FileLength)?,
        })
    }

    fn get_usize(&self, field: RscField) -> Result<usize, IoError> {
        let value = self
            .get(field)
            .ok_or(IoError::MissingRscField(field.key()))?;
        value
            .parse()
            .map_err(|_| IoError::InvalidRscField(field.key(), value.to_string()))
    }

    fn get_f64(&self, field: RscField) -> Result<f64, IoError> {
        let value = self
            .get(field)
            .ok_or(IoError::MissingRscField(field.key()))?;
        value
            .parse()
            .map_err(|_| IoError::InvalidRscField(field.key(), value.to_string()))
    }

    /// Describe the same area upsampled by `rate`.
    ///
    /// `WIDTH` and `FILE_LENGTH` become `1 + (n - 1) * rate`, `X_STEP` and
    /// `Y_STEP` are divided by `rate` and written with 12 decimals. Other
    /// fields are copied.
    ///
    /// # Errors
    ///
    /// Returns an error if `rate` is zero, a size field is zero or does not
    /// fit in memory, or a size or step field can not be parsed.
    pub fn upsampled(&self, rate: usize) -> Result<DemRsc, IoError> {
        if rate == 0 {
            return Err(IoError::InvalidRscField("rate", rate.to_string()));
        }

        let mut up = self.clone();
        for (field, value) in self.fields.iter() {
            match field {
                RscField::Width | RscField::FileLength => {
                    let n = self.get_usize(*field)?;
                    let up_n = n
                        .checked_sub(1)
                        .and_then(|n| n.checked_mul(rate))
                        .and_then(|n| n.checked_add(1))
                        .ok_or_else(|| IoError::InvalidRscField(field.key(), value.clone()))?;
                    up.set(*field, up_n.to_string());
                }
                RscField::XStep | RscField::YStep => {
                    let step = self.get_f64(*field)? / rate as f64;
                    up.set(*field, format!("{step:.12}"));
                }
                _ => {}
            }
        }

        Ok(up)
    }

    fn format_padded(&self, pad: usize) -> String {
        self.fields
            .iter()
            .map(|(field, value)| format!("{:<pad$}{}\n", field.key(), value))
            .collect()
    }
}

/// Path of the resource file that describes `file_path`.
///
/// `elevation.dem` is described by `elevation.dem.rsc`; a path already ending
/// in `.rsc` is returned unchanged.
pub fn rsc_path(file_path: impl AsRef<Path>) -> PathBuf {
    let file_path = file_path.as_ref();
    let is_rsc = file_path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("rsc"));
    if is_rsc {
        file_path.to_path_buf()
    } else {
        let mut name = file_path.as_os_str().to_owned();
        name.push(".rsc");
        PathBuf::from(name)
    }
}

/// Parse the text of a `.dem.rsc` file.
///
/// Lines starting with a known key contribute their second whitespace
/// separated token; other lines are ignored. A key seen twice keeps its first
/// position and its last value.
///
/// # Errors
///
/// Returns an error if a known key has no value or a value of the wrong type.
///
/// # Example
///
/// ```
/// use dem_grid::GridSize;
/// use dem_io::rsc::{parse_dem_rsc, RscField};
///
/// let rsc = parse_dem_rsc("WIDTH         10801\nFILE_LENGTH   7201\n").unwrap();
/// assert_eq!(rsc.get(RscField::Width), Some("10801"));
/// assert_eq!(rsc.size().unwrap(), GridSize::from([10801, 7201]));
/// ```
pub fn parse_dem_rsc(text: &str) -> Result<DemRsc, IoError> {
    let mut rsc = DemRsc::default();
    for line in text.lines() {
        let Some(field) = RscField::ALL
            .into_iter()
            .find(|field| line.starts_with(field.key()))
        else {
            continue;
        };

        let value = line
            .split_whitespace()
            .nth(1)
            .ok_or_else(|| IoError::InvalidRscField(field.key(), String::new()))?;
        if !field.validate(value) {
            return Err(IoError::InvalidRscField(field.key(), value.to_string()));
        }
        rsc.set(field, value);
    }
    Ok(rsc)
}

/// Read and parse a `.dem.rsc` file.
///
/// # Arguments
///
/// * `file_path` - The `.rsc` file, or the `.dem` file it describes.
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable or malformed.
pub fn load_dem_rsc(file_path: impl AsRef<Path>) -> Result<DemRsc, IoError> {
    let rsc_file = rsc_path(file_path);
    if !rsc_file.exists() {
        return Err(IoError::FileDoesNotExist(rsc_file));
    }

    let text = std::fs::read_to_string(&rsc_file)?;
    let rsc = parse_dem_rsc(&text)?;
    log::info!("read resource file {}", rsc_file.display());

    Ok(rsc)
}

/// Format the fields as `.dem.rsc` text, keys padded to 14 columns.
pub fn format_dem_rsc(rsc: &DemRsc) -> String {
    rsc.format_padded(14)
}

/// Format the `.dem.rsc` text of the grid upsampled by `rate`, keys padded to
/// 13 columns.
///
/// # Example
///
/// ```
/// use dem_io::rsc::{parse_dem_rsc, upsample_dem_rsc};
///
/// let rsc = parse_dem_rsc("WIDTH 3601\nFILE_LENGTH 3601\nX_STEP 0.000277777778\n").unwrap();
/// let text = upsample_dem_rsc(&rsc, 2).unwrap();
/// assert_eq!(text, "WIDTH        7201\nFILE_LENGTH  7201\nX_STEP       0.000138888889\n");
/// ```
///
/// # Errors
///
/// See [`DemRsc::upsampled`].
pub fn upsample_dem_rsc(rsc: &DemRsc, rate: usize) -> Result<String, IoError> {
    Ok(rsc.upsampled(rate)?.format_padded(13))
}

/// Write `.dem.rsc` text next to `file_path`.
///
/// # Errors
///
/// Returns an error if the file can not be written.
pub fn write_dem_rsc(file_path: impl AsRef<Path>, text: &str) -> Result<(), IoError> {
    let rsc_file = rsc_path(file_path);
    std::fs::write(&rsc_file, text)?;
    log::info!("wrote resource file {}", rsc_file.display());
    Ok(())
}
