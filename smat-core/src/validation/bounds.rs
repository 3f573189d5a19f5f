//! Coordinate bounds validation
//!
//! Matrices accept any coordinate by default; these checks back the opt-in
//! strict mode of the parser and [`SparseMatrix::check_bounds`].
//!
//! [`SparseMatrix::check_bounds`]: crate::SparseMatrix::check_bounds

use crate::SmatError;

/// Validate that `(row, col)` lies inside an `nrows x ncols` matrix
pub const fn validate_entry_bounds(
    row: usize,
    col: usize,
    nrows: usize,
    ncols: usize,
) -> Result<(), SmatError> {
    if row >= nrows || col >= ncols {
        return Err(SmatError::IndexOutOfBounds {
            row,
            col,
            nrows,
            ncols,
        });
    }
    Ok(())
}
