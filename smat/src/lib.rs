//! smat - Sparse Matrix Arithmetic
//!
//! Addition, subtraction and multiplication of sparse integer matrices
//! stored in a small text format, on top of the `smat-core` container.
//!
//! ## Architecture
//!
//! - **smat-core**: container, element trait, text format and validation (no I/O)
//! - **smat**: arithmetic, configuration, file I/O and the `smat` command line
//!
//! ## Quick Start
//!
//! ```rust
//! use smat::{ops, SparseMatrix};
//!
//! fn example() -> Result<(), smat::Error> {
//!     let a: SparseMatrix = "rows=1\ncols=2\n(0, 0, 1)\n(0, 1, 2)".parse()?;
//!     let b: SparseMatrix = "rows=2\ncols=1\n(0, 0, 3)\n(1, 0, 4)".parse()?;
//!
//!     let c = ops::multiply(&a, &b)?;
//!     assert_eq!(c.get_element(0, 0), 11);
//!     println!("{}", c.serialize());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

// Re-export core abstractions
pub use smat_core::{
    ErrorCategory, Header, MatrixElement, ParseOptions, SmatError, SparseMatrix,
};

pub mod config;
pub mod error;
pub mod io;
pub mod job;
pub mod ops;

pub use config::{FileConfig, MultiplyStrategy, OpsConfig};
pub use error::{Error, Result};
pub use io::{load_matrix, load_matrix_with, save_matrix};
pub use job::Job;
pub use ops::{add, multiply, multiply_with, subtract, Operation};
