//! Configuration for arithmetic and for locating matrix files

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::ops::Operation;
use crate::Error;

/// Algorithm used by [`multiply`](crate::ops::multiply)
///
/// Both strategies produce identical results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MultiplyStrategy {
    /// For every entry of the left operand, probe every column of the
    /// matching right-hand row. Cost `O(nnz(a) * b.ncols)`.
    ColumnScan,
    /// Index the right operand by row once, then visit only its non-zeros.
    #[default]
    RowIndexed,
}

impl MultiplyStrategy {
    pub fn name(self) -> &'static str {
        match self {
            MultiplyStrategy::ColumnScan => "column-scan",
            MultiplyStrategy::RowIndexed => "row-indexed",
        }
    }
}

impl fmt::Display for MultiplyStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MultiplyStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "column-scan" | "column_scan" | "scan" => Ok(MultiplyStrategy::ColumnScan),
            "row-indexed" | "row_indexed" | "indexed" => Ok(MultiplyStrategy::RowIndexed),
            other => Err(Error::UnknownStrategy(other.to_string())),
        }
    }
}

/// Configuration for matrix operations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpsConfig {
    /// Multiplication algorithm
    pub multiply_strategy: MultiplyStrategy,
}

impl OpsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the multiplication algorithm
    pub fn with_multiply_strategy(mut self, strategy: MultiplyStrategy) -> Self {
        self.multiply_strategy = strategy;
        self
    }
}

/// Default locations of input and output files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileConfig {
    /// Directory holding the default `matrix1.txt` / `matrix2.txt`
    pub input_dir: PathBuf,
    /// Directory receiving `output_<op>.txt`
    pub output_dir: PathBuf,
}

impl FileConfig {
    pub const LEFT_FILE: &'static str = "matrix1.txt";
    pub const RIGHT_FILE: &'static str = "matrix2.txt";

    /// Set the directory of the default input files
    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = dir.into();
        self
    }

    /// Set the directory result files are written to
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Default path of the left operand
    pub fn left_path(&self) -> PathBuf {
        self.input_dir.join(Self::LEFT_FILE)
    }

    /// Default path of the right operand
    pub fn right_path(&self) -> PathBuf {
        self.input_dir.join(Self::RIGHT_FILE)
    }

    /// Default result path for an operation, e.g. `output_mul.txt`
    pub fn output_path(&self, operation: Operation) -> PathBuf {
        self.output_dir
            .join(format!("output_{}.txt", operation.short_name()))
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            input_dir: Path::new("sample_inputs").to_path_buf(),
            output_dir: PathBuf::from("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_from_str() {
        assert_eq!(
            "column-scan".parse::<MultiplyStrategy>().unwrap(),
            MultiplyStrategy::ColumnScan
        );
        assert_eq!(
            " Row_Indexed ".parse::<MultiplyStrategy>().unwrap(),
            MultiplyStrategy::RowIndexed
        );
        assert!(matches!(
            "dense".parse::<MultiplyStrategy>(),
            Err(Error::UnknownStrategy(_))
        ));
    }

    #[test]
    fn test_ops_config_builder() {
        assert_eq!(OpsConfig::default().multiply_strategy, MultiplyStrategy::RowIndexed);
        let config = OpsConfig::new().with_multiply_strategy(MultiplyStrategy::ColumnScan);
        assert_eq!(config.multiply_strategy, MultiplyStrategy::ColumnScan);
    }

    #[test]
    fn test_file_config_paths() {
        let config = FileConfig::default()
            .with_input_dir("data")
            .with_output_dir("out");
        assert_eq!(config.left_path(), Path::new("data/matrix1.txt"));
        assert_eq!(config.right_path(), Path::new("data/matrix2.txt"));
        assert_eq!(
            config.output_path(Operation::Subtract),
            Path::new("out/output_sub.txt")
        );
        assert_eq!(
            FileConfig::default().output_path(Operation::Add),
            Path::new("./output_add.txt")
        );
    }
}
