//! Dimension header of the sparse matrix text format
//!
//! Every document starts with a `rows=<n>` line followed by a `cols=<m>`
//! line.

use core::fmt;

use super::constants::{COLS_KEY, ROWS_KEY};
use crate::validation::parse_header;
use crate::{Result, SmatError};

/// Parsed `rows=` / `cols=` header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    pub nrows: usize,
    pub ncols: usize,
}

impl Header {
    pub const fn new(nrows: usize, ncols: usize) -> Self {
        Self { nrows, ncols }
    }

    /// Parse the two header lines
    ///
    /// Each line is passed with its 1-based line number for diagnostics.
    /// A negative value fails with [`SmatError::InvalidDimension`].
    pub fn parse(rows_line: (usize, &str), cols_line: (usize, &str)) -> Result<Self> {
        let rows = parse_header(rows_line.1, ROWS_KEY)
            .map_err(|reason| SmatError::malformed(rows_line.0, rows_line.1, reason))?;
        let cols = parse_header(cols_line.1, COLS_KEY)
            .map_err(|reason| SmatError::malformed(cols_line.0, cols_line.1, reason))?;
        Self::try_from_signed(rows, cols)
    }

    /// Convert signed dimensions, rejecting negative values
    pub fn try_from_signed(rows: i64, cols: i64) -> Result<Self> {
        match (usize::try_from(rows), usize::try_from(cols)) {
            (Ok(nrows), Ok(ncols)) => Ok(Self { nrows, ncols }),
            _ => Err(SmatError::InvalidDimension { rows, cols }),
        }
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{ROWS_KEY}{}\n{COLS_KEY}{}", self.nrows, self.ncols)
    }
}
