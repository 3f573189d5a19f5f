#![cfg_attr(not(test), no_std)]

//! smat-core - Sparse Matrix Container and Text Format
//!
//! This crate provides the coordinate-keyed sparse matrix container, the
//! element trait, and the parser/serializer for the `rows=`/`cols=` text
//! format. Arithmetic lives in the `smat` crate.

extern crate alloc;

pub mod error;
pub mod format;
pub mod matrix;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::{Header, ParseOptions};
pub use matrix::SparseMatrix;
pub use traits::*;
