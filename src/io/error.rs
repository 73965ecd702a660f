//! Error types for layout generation operations
//!
//! Contradictions are not errors: they are data-level outcomes handled by
//! the contradiction policy and surfaced as events. Everything here is a
//! genuine failure surfaced to the caller before or outside of stepping.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all layout operations
#[derive(Debug)]
pub enum LayoutError {
    /// Catalog empty or malformed at build time
    InvalidCatalog {
        /// Description of what is wrong with the catalog
        reason: String,
    },

    /// Grid dimensions unusable for generation
    InvalidDimensions {
        /// Requested grid width
        width: usize,
        /// Requested grid height
        height: usize,
    },

    /// Catalog file line could not be parsed
    CatalogParse {
        /// Path to the catalog file
        path: PathBuf,
        /// One-based line number of the offending entry
        line: usize,
        /// Explanation of the syntax problem
        reason: String,
    },

    /// Failed to save a rendered layout to disk
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

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCatalog { reason } => {
                write!(f, "Invalid tile catalog: {reason}")
            }
            Self::InvalidDimensions { width, height } => {
                write!(
                    f,
                    "Invalid grid dimensions {width}x{height}: both must be positive"
                )
            }
            Self::CatalogParse { path, line, reason } => {
                write!(
                    f,
                    "Failed to parse catalog '{}' line {line}: {reason}",
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

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LayoutError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for layout results
pub type Result<T> = std::result::Result<T, LayoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_error_display() {
        let err = LayoutError::InvalidDimensions {
            width: 0,
            height: 5,
        };
        let message = err.to_string();
        assert!(message.contains("0x5"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = LayoutError::from(io);
        match err {
            LayoutError::FileSystem { operation, .. } => assert_eq!(operation, "unknown"),
            _ => unreachable!("Expected FileSystem error type"),
        }
    }
}
