//! Load two matrix files, combine them, and save the result

use std::path::PathBuf;

use smat_core::{ParseOptions, SparseMatrix};

use crate::config::OpsConfig;
use crate::io::{load_matrix_with, save_matrix};
use crate::ops::Operation;
use crate::Result;

/// One file-to-file operation
#[derive(Debug, Clone)]
pub struct Job {
    pub operation: Operation,
    pub left: PathBuf,
    pub right: PathBuf,
    pub output: PathBuf,
    pub ops: OpsConfig,
    pub parse: ParseOptions,
}

impl Job {
    pub fn new(
        operation: Operation,
        left: impl Into<PathBuf>,
        right: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            operation,
            left: left.into(),
            right: right.into(),
            output: output.into(),
            ops: OpsConfig::default(),
            parse: ParseOptions::default(),
        }
    }

    pub fn with_ops_config(mut self, ops: OpsConfig) -> Self {
        self.ops = ops;
        self
    }

    pub fn with_parse_options(mut self, parse: ParseOptions) -> Self {
        self.parse = parse;
        self
    }

    /// Run the job, returning the result that was written
    ///
    /// Nothing is written if loading or the operation fails.
    pub fn run(&self) -> Result<SparseMatrix> {
        let a = load_matrix_with(&self.left, &self.parse)?;
        let b = load_matrix_with(&self.right, &self.parse)?;

        let result = self.operation.apply(&a, &b, &self.ops)?;
        save_matrix(&result, &self.output)?;
        Ok(result)
    }
}
