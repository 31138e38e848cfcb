//! Error types for analysis operations
//!
//! Only the entry boundary can fail: a missing or malformed buffer, a file
//! that cannot be decoded, or a report that cannot be written. Heuristic
//! stages never error; an inconclusive heuristic degrades to an empty or
//! default value instead.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all analysis operations
#[derive(Debug)]
pub enum AnalysisError {
    /// Failed to decode a source image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Analysis was requested without a decoded buffer
    ///
    /// Raised at the pipeline entry when the upstream decoder produced
    /// nothing. The pipeline fails fast rather than analyzing a phantom
    /// image.
    MissingImage,

    /// Buffer dimensions or sample data do not describe a valid image
    InvalidBuffer {
        /// Declared buffer width
        width: u32,
        /// Declared buffer height
        height: u32,
        /// Description of what's wrong with the buffer
        reason: &'static str,
    },

    /// Analyzer parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to serialize an analysis report
    ReportExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying serialization error
        source: serde_json::Error,
    },

    /// Failed to save a debug image to disk
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

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::MissingImage => {
                write!(f, "No decoded image was supplied for analysis")
            }
            Self::InvalidBuffer {
                width,
                height,
                reason,
            } => {
                write!(f, "Invalid {width}x{height} pixel buffer: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ReportExport { path, source } => {
                write!(
                    f,
                    "Failed to export report to '{}': {source}",
                    path.display()
                )
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

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::ReportExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for analysis results
pub type Result<T> = std::result::Result<T, AnalysisError>;

impl From<image::ImageError> for AnalysisError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for AnalysisError {
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
) -> AnalysisError {
    AnalysisError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid buffer error
pub const fn invalid_buffer(width: u32, height: u32, reason: &'static str) -> AnalysisError {
    AnalysisError::InvalidBuffer {
        width,
        height,
        reason,
    }
}

/// Create a generic I/O error for path handling failures
pub fn io_error(msg: &str) -> AnalysisError {
    AnalysisError::InvalidParameter {
        parameter: "path",
        value: String::new(),
        reason: msg.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let buffer_err = invalid_buffer(0, 240, "width must be non-zero");
        assert_eq!(
            buffer_err.to_string(),
            "Invalid 0x240 pixel buffer: width must be non-zero"
        );

        let parameter_err = invalid_parameter("seed_stride", &0, &"must be positive");
        assert_eq!(
            parameter_err.to_string(),
            "Invalid parameter 'seed_stride' = '0': must be positive"
        );

        assert_eq!(
            AnalysisError::MissingImage.to_string(),
            "No decoded image was supplied for analysis"
        );
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error as _;

        let err = AnalysisError::FileSystem {
            path: PathBuf::from("out/report.json"),
            operation: "create directory",
            source: std::io::Error::other("disk full"),
        };
        assert!(err.source().is_some());
        assert!(AnalysisError::MissingImage.source().is_none());
    }
}
