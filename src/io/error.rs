//! Error types shared by the overlay core and the batch driver

use std::fmt;
use std::path::PathBuf;

/// Main error type for all overlay operations
#[derive(Debug)]
pub enum OverlayError {
    /// Images supplied to one operation differ in width or height
    ///
    /// Fatal to the call that raised it; no output grid is produced.
    DimensionMismatch {
        /// Operation that rejected its inputs
        operation: &'static str,
        /// Dimensions of the first input (width, height)
        expected: (usize, usize),
        /// Dimensions of the offending input (width, height)
        found: (usize, usize),
    },

    /// A distance field image needed to pair a slice does not exist
    MissingInput {
        /// Slice index taken from the original file name
        slice: String,
        /// Path that was expected to hold the field image
        path: PathBuf,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to decode an image from disk
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to encode an image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
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
}

impl OverlayError {
    /// Whether the batch driver may skip the slice and continue
    ///
    /// Per-slice input problems are recoverable at the batch level; file
    /// system and export failures are not.
    pub const fn is_slice_local(&self) -> bool {
        matches!(
            self,
            Self::DimensionMismatch { .. } | Self::MissingInput { .. } | Self::ImageLoad { .. }
        )
    }
}

impl fmt::Display for OverlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch {
                operation,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Dimension mismatch in {operation}: expected {}x{}, found {}x{}",
                    expected.0, expected.1, found.0, found.1
                )
            }
            Self::MissingInput { slice, path } => {
                write!(
                    f,
                    "Missing input for slice {slice}: '{}' does not exist",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
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
        }
    }
}

impl std::error::Error for OverlayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for overlay results
pub type Result<T> = std::result::Result<T, OverlayError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> OverlayError {
    OverlayError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Wrap an I/O error with the path and operation that produced it
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> OverlayError {
    OverlayError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
