//! File I/O for text matrix files
//!
//! Reads and writes matrices in the `rows=`/`cols=` text format.

use std::fs;
use std::path::Path;

use smat_core::{MatrixElement, ParseOptions, SparseMatrix};

use crate::{Error, Result};

/// Read and parse a matrix file
pub fn load_matrix<T: MatrixElement, P: AsRef<Path>>(path: P) -> Result<SparseMatrix<T>> {
    load_matrix_with(path, &ParseOptions::default())
}

/// Read and parse a matrix file with explicit parse options
pub fn load_matrix_with<T: MatrixElement, P: AsRef<Path>>(
    path: P,
    options: &ParseOptions,
) -> Result<SparseMatrix<T>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let matrix = SparseMatrix::parse_with(&text, options)?;

    log::debug!(
        "Loaded {}x{} matrix with {} non-zeros from {}",
        matrix.nrows(),
        matrix.ncols(),
        matrix.nnz(),
        path.display()
    );
    Ok(matrix)
}

/// Serialize a matrix and write it to `path`
///
/// Entries are written row-major so the file is deterministic. The last
/// line carries no trailing newline.
pub fn save_matrix<T: MatrixElement, P: AsRef<Path>>(matrix: &SparseMatrix<T>, path: P) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, matrix.serialize_sorted()).map_err(|e| Error::io(path, e))?;

    log::info!(
        "Written matrix {}x{} with {} non-zeros to {}",
        matrix.nrows(),
        matrix.ncols(),
        matrix.nnz(),
        path.display()
    );
    Ok(())
}
