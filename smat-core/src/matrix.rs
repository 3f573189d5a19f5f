//! Coordinate-keyed sparse matrix container

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use hashbrown::HashMap;

use crate::format::{self, Header, ParseOptions};
use crate::validation::validate_entry_bounds;
use crate::{MatrixElement, Result, SmatError};

/// Sparse matrix storing only non-zero entries keyed by `(row, col)`
///
/// Dimensions are fixed at construction. Coordinates are not checked
/// against them unless asked for (see [`SparseMatrix::check_bounds`]), so
/// any `(row, col)` may be written and reading an absent one yields zero.
#[derive(Clone)]
pub struct SparseMatrix<T: MatrixElement = i64> {
    nrows: usize,
    ncols: usize,
    entries: HashMap<(usize, usize), T>,
}

impl<T: MatrixElement> SparseMatrix<T> {
    /// Create an empty matrix with the given dimensions
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            entries: HashMap::new(),
        }
    }

    /// Create an empty matrix from signed dimensions
    ///
    /// Fails with [`SmatError::InvalidDimension`] if either is negative.
    pub fn try_new(nrows: i64, ncols: i64) -> Result<Self> {
        let header = Header::try_from_signed(nrows, ncols)?;
        Ok(Self::new(header.nrows, header.ncols))
    }

    /// Build a matrix by writing each triple in order
    pub fn from_entries<I>(nrows: usize, ncols: usize, entries: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::new(nrows, ncols);
        for (row, col, value) in entries {
            matrix.set_element(row, col, value);
        }
        matrix
    }

    /// Parse a matrix from its text form
    pub fn parse(text: &str) -> Result<Self> {
        format::parse_matrix(text, &ParseOptions::default())
    }

    /// Parse a matrix from its text form with explicit options
    pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Self> {
        format::parse_matrix(text, options)
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Get matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Number of stored (non-zero) entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entry is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the value at `(row, col)`, or zero if nothing is stored there
    pub fn get_element(&self, row: usize, col: usize) -> T {
        self.entries.get(&(row, col)).copied().unwrap_or(T::ZERO)
    }

    /// Write `value` at `(row, col)`
    ///
    /// Writing zero removes any stored entry at that coordinate.
    pub fn set_element(&mut self, row: usize, col: usize, value: T) {
        if value.is_zero() {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
    }

    /// Iterate over stored entries as `(row, col, value)` triples
    ///
    /// Every value is non-zero. The order is unspecified and may change
    /// after the matrix is mutated.
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.entries
            .iter()
            .map(|(&(row, col), &value)| (row, col, value))
    }

    /// Snapshot of all entries sorted by row, then column
    pub fn sorted_entries(&self) -> Vec<(usize, usize, T)> {
        let mut entries: Vec<_> = self.entries().collect();
        entries.sort_unstable_by_key(|&(row, col, _)| (row, col));
        entries
    }

    /// Returns `true` if any stored entry lies outside the dimensions
    pub fn contains_out_of_bounds(&self) -> bool {
        self.check_bounds().is_err()
    }

    /// Check that every stored entry lies inside the dimensions
    ///
    /// Reports the first offending entry in row-major order.
    pub fn check_bounds(&self) -> Result<()> {
        let mut offending = self
            .entries
            .keys()
            .filter(|&&(row, col)| row >= self.nrows || col >= self.ncols)
            .copied()
            .collect::<Vec<_>>();
        offending.sort_unstable();
        match offending.first() {
            Some(&(row, col)) => validate_entry_bounds(row, col, self.nrows, self.ncols),
            None => Ok(()),
        }
    }

    pub fn header(&self) -> Header {
        Header::new(self.nrows, self.ncols)
    }

    /// Serialize to the text form, entries in [`entries`](Self::entries) order
    pub fn serialize(&self) -> String {
        format::to_text(self.header(), self.entries())
    }

    /// Serialize to the text form with entries sorted row-major
    pub fn serialize_sorted(&self) -> String {
        format::to_text(self.header(), self.sorted_entries())
    }

    /// Write the text form into any formatter sink
    pub fn write_to<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        format::write_matrix(out, self.header(), self.entries())
    }
}

impl<T: MatrixElement> PartialEq for SparseMatrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions() == other.dimensions() && self.entries == other.entries
    }
}

impl<T: MatrixElement> Eq for SparseMatrix<T> {}

impl<T: MatrixElement> fmt::Debug for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SparseMatrix")
            .field("nrows", &self.nrows)
            .field("ncols", &self.ncols)
            .field("entries", &self.sorted_entries())
            .finish()
    }
}

impl<T: MatrixElement> fmt::Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

impl<T: MatrixElement> FromStr for SparseMatrix<T> {
    type Err = SmatError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Wire shape: dimensions plus a row-major entry list
    #[derive(Serialize, Deserialize)]
    struct MatrixRepr<T> {
        rows: usize,
        cols: usize,
        entries: Vec<(usize, usize, T)>,
    }

    impl<T: MatrixElement + Serialize> Serialize for SparseMatrix<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
            MatrixRepr {
                rows: self.nrows,
                cols: self.ncols,
                entries: self.sorted_entries(),
            }
            .serialize(serializer)
        }
    }

    impl<'de, T: MatrixElement + Deserialize<'de>> Deserialize<'de> for SparseMatrix<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
            let repr = MatrixRepr::<T>::deserialize(deserializer)?;
            Ok(SparseMatrix::from_entries(repr.rows, repr.cols, repr.entries))
        }
    }
}
