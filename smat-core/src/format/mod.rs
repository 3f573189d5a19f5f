//! Text format definitions for sparse matrices
//!
//! ```text
//! rows=<non-negative integer>
//! cols=<non-negative integer>
//! (<row>, <col>, <signed integer>)
//! ...
//! ```
//!
//! Lines are trimmed before matching and blank lines are ignored anywhere in
//! the document. Repeated coordinates are allowed; the last one wins.

pub mod constants;
pub mod header;

use alloc::string::String;
use core::fmt::{self, Write};

pub use header::Header;

use crate::validation::{parse_entry, validate_entry_bounds};
use crate::{MatrixElement, Result, SmatError, SparseMatrix};
use constants::{ENTRY_CLOSE, ENTRY_OPEN, FIELD_SEPARATOR};

/// Options controlling how text is parsed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject entries outside the declared dimensions
    pub strict_bounds: bool,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable bounds checking of entry coordinates
    pub fn with_strict_bounds(mut self, strict_bounds: bool) -> Self {
        self.strict_bounds = strict_bounds;
        self
    }
}

/// Parse a matrix from its text form
pub fn parse_matrix<T: MatrixElement>(text: &str, options: &ParseOptions) -> Result<SparseMatrix<T>> {
    // 1-based line numbers of the non-blank lines
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let total_lines = text.lines().count();
    let rows_line = lines
        .next()
        .ok_or_else(|| SmatError::malformed(total_lines + 1, "", "missing `rows=` header"))?;
    let cols_line = lines
        .next()
        .ok_or_else(|| SmatError::malformed(total_lines + 1, "", "missing `cols=` header"))?;
    let header = Header::parse(rows_line, cols_line)?;

    let mut matrix = SparseMatrix::new(header.nrows, header.ncols);
    for (line_number, line) in lines {
        let (row, col, value) =
            parse_entry::<T>(line).map_err(|reason| SmatError::malformed(line_number, line, reason))?;
        if options.strict_bounds {
            validate_entry_bounds(row, col, header.nrows, header.ncols)?;
        }
        matrix.set_element(row, col, value);
    }

    Ok(matrix)
}

/// Write the header followed by one line per entry, in the given order
pub fn write_matrix<T, W, I>(out: &mut W, header: Header, entries: I) -> fmt::Result
where
    T: MatrixElement,
    W: Write,
    I: IntoIterator<Item = (usize, usize, T)>,
{
    write!(out, "{header}")?;
    for (row, col, value) in entries {
        write!(
            out,
            "\n{ENTRY_OPEN}{row}{FIELD_SEPARATOR}{col}{FIELD_SEPARATOR}{value}{ENTRY_CLOSE}"
        )?;
    }
    Ok(())
}

/// Serialize the header and entries into a new string
pub fn to_text<T, I>(header: Header, entries: I) -> String
where
    T: MatrixElement,
    I: IntoIterator<Item = (usize, usize, T)>,
{
    let mut out = String::new();
    // Writing into a String cannot fail
    write_matrix(&mut out, header, entries).ok();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "rows=3\ncols=3\n(0, 0, 1)\n(1, 2, 2)\n(2, 1, 3)\n";

    #[test]
    fn test_parse_sample() {
        let m: SparseMatrix = parse_matrix(SAMPLE, &ParseOptions::default()).unwrap();
        assert_eq!(m.dimensions(), (3, 3));
        assert_eq!(m.nnz(), 3);
        assert_eq!(m.get_element(1, 2), 2);
        assert_eq!(m.get_element(0, 1), 0);
    }

    #[test]
    fn test_blank_lines_and_surrounding_whitespace() {
        let text = "\n\n  rows=2  \n\n\tcols=2\n\n (0, 1, -4) \n\n\n(1,0,9)\r\n";
        let m: SparseMatrix = parse_matrix(text, &ParseOptions::default()).unwrap();
        assert_eq!(m.get_element(0, 1), -4);
        assert_eq!(m.get_element(1, 0), 9);
        assert_eq!(m.nnz(), 2);
    }

    #[test]
    fn test_duplicate_coordinates_last_write_wins() {
        let text = "rows=2\ncols=2\n(0, 0, 1)\n(0, 0, 7)";
        let m: SparseMatrix = parse_matrix(text, &ParseOptions::default()).unwrap();
        assert_eq!(m.get_element(0, 0), 7);
        assert_eq!(m.nnz(), 1);

        // A later zero erases the earlier value
        let text = "rows=2\ncols=2\n(0, 0, 1)\n(0, 0, 0)";
        let m: SparseMatrix = parse_matrix(text, &ParseOptions::default()).unwrap();
        assert!(m.is_empty());
    }

    #[test]
    fn test_missing_rows_header() {
        let err = parse_matrix::<i64>("cols=3\n(0, 0, 1)", &ParseOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            SmatError::MalformedInput { line_number: 1, .. }
        ));
    }

    #[test]
    fn test_empty_text() {
        let err = parse_matrix::<i64>("\n  \n", &ParseOptions::default()).unwrap_err();
        assert!(matches!(err, SmatError::MalformedInput { .. }));
    }

    #[test]
    fn test_entry_missing_value_reports_line() {
        let text = "rows=3\ncols=3\n(0, 0, 1)\n\n(1,2)";
        let err = parse_matrix::<i64>(text, &ParseOptions::default()).unwrap_err();
        match err {
            SmatError::MalformedInput {
                line_number, line, ..
            } => {
                assert_eq!(line_number, 5);
                assert_eq!(line, "(1,2)");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_out_of_bounds_is_permissive_by_default() {
        let text = "rows=2\ncols=2\n(5, 9, 1)";
        let m: SparseMatrix = parse_matrix(text, &ParseOptions::default()).unwrap();
        assert_eq!(m.get_element(5, 9), 1);

        let strict = ParseOptions::new().with_strict_bounds(true);
        assert_eq!(
            parse_matrix::<i64>(text, &strict),
            Err(SmatError::IndexOutOfBounds {
                row: 5,
                col: 9,
                nrows: 2,
                ncols: 2
            })
        );
    }

    #[test]
    fn test_to_text() {
        let text = to_text(Header::new(2, 3), [(0, 2, 5i64), (1, 0, -1)]);
        assert_eq!(text, "rows=2\ncols=3\n(0, 2, 5)\n(1, 0, -1)");
        assert_eq!(to_text::<i64, _>(Header::new(0, 0), []), "rows=0\ncols=0");
    }
}
