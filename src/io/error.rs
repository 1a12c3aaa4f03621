//! Error types for configuration, generation and PNG export

use crate::io::configuration::MAX_GRID_SIZE;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all identicon operations
#[derive(Debug)]
pub enum IdenticonError {
    /// Input string was empty
    InvalidInput,

    /// Image size must be a positive pixel count
    InvalidSize {
        /// Rejected size
        value: i64,
    },

    /// Grid size must be a positive odd cell count within the supported bound
    InvalidGridSize {
        /// Rejected grid size
        value: i64,
    },

    /// Background color was not supplied
    InvalidColor,

    /// Color strategy was not supplied
    InvalidColorStrategy,

    /// Padding fraction outside `[0, 0.5)`
    InvalidPadding {
        /// Rejected padding fraction
        value: f64,
    },

    /// Minimum filled-cell count was negative
    InvalidMinPoints {
        /// Rejected minimum
        value: i64,
    },

    /// No destination was supplied for the encoded image
    NilSink,

    /// Failed to encode or save the generated image
    ImageExport {
        /// Destination of the export
        path: PathBuf,
        /// Underlying image encoding error
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

impl fmt::Display for IdenticonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "Invalid input: empty string"),
            Self::InvalidSize { value } => {
                write!(f, "Invalid size {value}: must be a positive pixel count")
            }
            Self::InvalidGridSize { value } => {
                write!(
                    f,
                    "Invalid grid size {value}: must be a positive odd number up to {MAX_GRID_SIZE}"
                )
            }
            Self::InvalidColor => write!(f, "Invalid color: no background color provided"),
            Self::InvalidColorStrategy => write!(f, "Invalid color strategy: no strategy provided"),
            Self::InvalidPadding { value } => {
                write!(f, "Invalid padding {value}: must be in [0, 0.5)")
            }
            Self::InvalidMinPoints { value } => {
                write!(f, "Invalid min points {value}: must not be negative")
            }
            Self::NilSink => write!(f, "No output sink provided"),
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

impl std::error::Error for IdenticonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for identicon results
pub type Result<T> = std::result::Result<T, IdenticonError>;

impl From<image::ImageError> for IdenticonError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<stream>"),
            source: err,
        }
    }
}
