//! Error type for operations, file I/O and the command line

use std::path::PathBuf;

use smat_core::SmatError;
use thiserror::Error;

/// Result type alias using smat's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the `smat` crate
#[derive(Error, Debug)]
pub enum Error {
    /// Parsing, shape or arithmetic failure from the matrix core
    #[error(transparent)]
    Matrix(#[from] SmatError),

    /// Reading or writing a matrix file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Operation name not recognised
    #[error("Unknown operation '{0}' (expected add, subtract or multiply)")]
    UnknownOperation(String),

    /// Unknown multiplication strategy name
    #[error("Unknown multiply strategy '{0}' (expected column-scan or row-indexed)")]
    UnknownStrategy(String),

    #[cfg(feature = "serde")]
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
