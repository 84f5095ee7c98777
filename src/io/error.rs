//! Error types for map generation, classification and layout I/O

use std::fmt;
use std::path::PathBuf;

/// Main error type for all structural failures
///
/// Growth-time rejections during path generation are not errors; they end a
/// single path and are reported through the generation outcome instead.
#[derive(Debug)]
pub enum MapError {
    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Input rows differ in length
    NonRectangular {
        /// Index of the first row with a different length
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        found: usize,
    },

    /// Grid dimension outside the accepted range
    DimensionOutOfRange {
        /// `"width"` or `"height"`
        axis: &'static str,
        /// Provided dimension
        value: usize,
        /// Smallest accepted value
        min: usize,
        /// Largest accepted value
        max: usize,
    },

    /// Cell value not allowed in the current mode
    InvalidCell {
        /// Column of the cell
        x: usize,
        /// Row of the cell
        y: usize,
        /// Code found at the cell
        value: String,
    },

    /// Layout contains a string that is not a tile code
    UnknownCode {
        /// Column of the cell
        x: usize,
        /// Row of the cell
        y: usize,
        /// The unrecognised string
        code: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Layout file could not be parsed or written as JSON
    Json {
        /// Path of the layout file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::NonRectangular {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Row {row} has inconsistent length: expected {expected}, got {found}"
                )
            }
            Self::DimensionOutOfRange {
                axis,
                value,
                min,
                max,
            } => {
                write!(f, "Map {axis} {value} is outside the range {min}..={max}")
            }
            Self::InvalidCell { x, y, value } => {
                write!(
                    f,
                    "Cell ({x}, {y}) has value '{value}'; only '0' and '1' are allowed in context-aware mode"
                )
            }
            Self::UnknownCode { x, y, code } => {
                write!(f, "Cell ({x}, {y}) has unknown tile code '{code}'")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Json { path, source } => {
                write!(f, "Invalid layout JSON in '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, MapError>;

impl From<std::io::Error> for MapError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MapError {
    MapError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Reject a dimension outside `min..=max`
///
/// # Errors
///
/// Returns [`MapError::DimensionOutOfRange`] when `value` is out of range
pub const fn check_dimension(axis: &'static str, value: usize, min: usize, max: usize) -> Result<()> {
    if value < min || value > max {
        Err(MapError::DimensionOutOfRange {
            axis,
            value,
            min,
            max,
        })
    } else {
        Ok(())
    }
}
