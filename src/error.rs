//! Error types for bench-viz

use std::path::PathBuf;
use thiserror::Error;

/// Report error type
#[derive(Error, Debug)]
pub enum Error {
    /// Input file missing or unreadable, or output not writable
    #[error("IO error on {}: {source}", path.display())]
    Io {
        /// File the operation was acting on
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// A required header column is absent from a CSV input
    #[error("missing column `{column}` in {}", path.display())]
    MissingColumn {
        /// CSV file that was read
        path: PathBuf,
        /// Name of the absent column
        column: &'static str,
    },

    /// Malformed CSV content
    #[error("CSV error in {}: {source}", path.display())]
    Csv {
        /// CSV file that was read
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: csv::Error,
    },

    /// Variant identifier without display metadata
    #[error("unknown variant: {0}")]
    UnknownVariant(String),

    /// Chart rendering failure
    #[error("plot error: {0}")]
    Plot(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Error::Csv {
            path: path.into(),
            source,
        }
    }
}

// plotters reports backend failures through a generic error type, so they are
// flattened into a message here.
impl<E> From<plotters::drawing::DrawingAreaErrorKind<E>> for Error
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        Error::Plot(err.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_message() {
        let err = Error::MissingColumn {
            path: PathBuf::from("build/sort_results.csv"),
            column: "RadixSort",
        };
        assert_eq!(
            err.to_string(),
            "missing column `RadixSort` in build/sort_results.csv"
        );
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = Error::io(
            "nope.csv",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.to_string().contains("nope.csv"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
