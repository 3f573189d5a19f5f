//! Error types for sparse matrix operations

use alloc::string::String;
use core::fmt;

/// Errors that can occur while building, parsing or combining matrices
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmatError {
    /// Negative row or column count at construction
    InvalidDimension { rows: i64, cols: i64 },
    /// Header or entry line does not match the text format
    MalformedInput {
        /// 1-based line number in the source text
        line_number: usize,
        /// The offending line, trimmed
        line: String,
        reason: &'static str,
    },
    /// Operand shapes are incompatible for the requested operation
    DimensionMismatch {
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Entry lies outside the declared dimensions (strict parsing only)
    IndexOutOfBounds {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },
    /// Element arithmetic overflowed while producing the entry at (row, col)
    ValueOverflow { row: usize, col: usize },
}

/// Coarse classification of [`SmatError`] values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller supplied bad text or bad dimensions
    Input,
    /// Operand shapes do not line up
    Shape,
    /// Element type could not hold a result
    Arithmetic,
}

impl SmatError {
    /// Build a `MalformedInput` error for a source line
    pub fn malformed(line_number: usize, line: &str, reason: &'static str) -> Self {
        SmatError::MalformedInput {
            line_number,
            line: String::from(line),
            reason,
        }
    }

    /// Classify this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            SmatError::InvalidDimension { .. }
            | SmatError::MalformedInput { .. }
            | SmatError::IndexOutOfBounds { .. } => ErrorCategory::Input,
            SmatError::DimensionMismatch { .. } => ErrorCategory::Shape,
            SmatError::ValueOverflow { .. } => ErrorCategory::Arithmetic,
        }
    }
}

impl fmt::Display for SmatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SmatError::InvalidDimension { rows, cols } => {
                write!(f, "Invalid matrix dimensions {rows}x{cols}")
            }
            SmatError::MalformedInput {
                line_number,
                line,
                reason,
            } => write!(f, "Malformed input at line {line_number} ({reason}): {line:?}"),
            SmatError::DimensionMismatch {
                operation,
                left,
                right,
            } => write!(
                f,
                "Dimension mismatch for {operation}: {}x{} vs {}x{}",
                left.0, left.1, right.0, right.1
            ),
            SmatError::IndexOutOfBounds {
                row,
                col,
                nrows,
                ncols,
            } => write!(
                f,
                "Entry ({row}, {col}) out of bounds for {nrows}x{ncols} matrix"
            ),
            SmatError::ValueOverflow { row, col } => {
                write!(f, "Value overflow at ({row}, {col})")
            }
        }
    }
}

impl core::error::Error for SmatError {}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, SmatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_offending_line() {
        let err = SmatError::malformed(4, "(1,2)", "expected (row, col, value)");
        let msg = err.to_string();
        assert!(msg.contains("line 4"));
        assert!(msg.contains("(1,2)"));
    }

    #[test]
    fn test_category() {
        assert_eq!(
            SmatError::InvalidDimension { rows: -1, cols: 2 }.category(),
            ErrorCategory::Input
        );
        assert_eq!(
            SmatError::DimensionMismatch {
                operation: "add",
                left: (1, 2),
                right: (2, 1),
            }
            .category(),
            ErrorCategory::Shape
        );
        assert_eq!(
            SmatError::ValueOverflow { row: 0, col: 0 }.category(),
            ErrorCategory::Arithmetic
        );
    }
}
