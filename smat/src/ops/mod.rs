//! Matrix Operations Module
//!
//! Pure functions over two borrowed matrices; each returns a freshly built
//! result and never mutates its inputs.

pub mod ewise;
pub mod matmul;

use std::fmt;
use std::str::FromStr;

use smat_core::{MatrixElement, SmatError, SparseMatrix};

use crate::config::OpsConfig;
use crate::Error;

pub use ewise::{add, subtract};
pub use matmul::{multiply, multiply_with};

/// The arithmetic operations offered to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    /// Short name used in result file names
    pub fn short_name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "sub",
            Operation::Multiply => "mul",
        }
    }

    /// Menu label for interactive selection
    pub fn label(self) -> &'static str {
        match self {
            Operation::Add => "Addition",
            Operation::Subtract => "Subtraction",
            Operation::Multiply => "Multiplication",
        }
    }

    /// Run this operation on `a` and `b`
    pub fn apply<T: MatrixElement>(
        self,
        a: &SparseMatrix<T>,
        b: &SparseMatrix<T>,
        config: &OpsConfig,
    ) -> smat_core::Result<SparseMatrix<T>> {
        match self {
            Operation::Add => add(a, b),
            Operation::Subtract => subtract(a, b),
            Operation::Multiply => multiply_with(a, b, config.multiply_strategy),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for Operation {
    type Err = Error;

    /// Accepts full names, short names and the menu numbers `1`-`3`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "add" | "addition" => Ok(Operation::Add),
            "2" | "sub" | "subtract" | "subtraction" => Ok(Operation::Subtract),
            "3" | "mul" | "multiply" | "multiplication" => Ok(Operation::Multiply),
            _ => Err(Error::UnknownOperation(s.trim().to_string())),
        }
    }
}

/// Fail with `DimensionMismatch` unless `a` and `b` share a shape
pub(crate) fn ensure_same_shape<T: MatrixElement>(
    operation: &'static str,
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
) -> smat_core::Result<()> {
    if a.dimensions() != b.dimensions() {
        return Err(SmatError::DimensionMismatch {
            operation,
            left: a.dimensions(),
            right: b.dimensions(),
        });
    }
    Ok(())
}
