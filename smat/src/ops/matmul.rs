//! Matrix Multiplication
//!
//! C = A * B with C of shape (A.nrows, B.ncols). Two strategies with the
//! same output:
//! - column scan: for each entry (r, k, a) of A probe B(k, j) for every
//!   column j of B. Sparse over A, dense over the columns of B.
//! - row indexed: group B's entries by row once, then for each entry of A
//!   visit only the non-zeros of row k of B.
//!
//! Cell sums are accumulated in `i128` and narrowed back to the element
//! type once complete.

use hashbrown::HashMap;
use smat_core::{MatrixElement, Result, SmatError, SparseMatrix};

use crate::config::MultiplyStrategy;

/// Matrix multiplication with the default strategy
///
/// Fails with `DimensionMismatch` unless `a.ncols() == b.nrows()`.
pub fn multiply<T: MatrixElement>(
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
) -> Result<SparseMatrix<T>> {
    multiply_with(a, b, MultiplyStrategy::default())
}

/// Matrix multiplication with an explicit strategy
pub fn multiply_with<T: MatrixElement>(
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
    strategy: MultiplyStrategy,
) -> Result<SparseMatrix<T>> {
    if a.ncols() != b.nrows() {
        return Err(SmatError::DimensionMismatch {
            operation: "multiply",
            left: a.dimensions(),
            right: b.dimensions(),
        });
    }

    log::debug!(
        "multiply {}x{} * {}x{} ({strategy}): nnz(a)={}, nnz(b)={}",
        a.nrows(),
        a.ncols(),
        b.nrows(),
        b.ncols(),
        a.nnz(),
        b.nnz()
    );

    let result = match strategy {
        MultiplyStrategy::ColumnScan => column_scan(a, b)?,
        MultiplyStrategy::RowIndexed => row_indexed(a, b)?,
    };

    log::trace!("multiply result nnz={}", result.nnz());
    Ok(result)
}

/// Running sums per result cell, kept wide so that intermediate overflow of
/// the element type does not depend on the order entries are visited in
type Accumulator = HashMap<(usize, usize), i128>;

fn column_scan<T: MatrixElement>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    let mut sums = Accumulator::new();

    for (row_a, col_a, val_a) in a.entries() {
        for col_b in 0..b.ncols() {
            let val_b = b.get_element(col_a, col_b);
            if !val_b.is_zero() {
                accumulate(&mut sums, row_a, col_b, val_a, val_b)?;
            }
        }
    }

    narrow_into(sums, a.nrows(), b.ncols())
}

fn row_indexed<T: MatrixElement>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    let mut rows_of_b: HashMap<usize, Vec<(usize, T)>> = HashMap::with_capacity(b.nrows().min(b.nnz()));
    for (row, col, value) in b.entries() {
        rows_of_b.entry(row).or_default().push((col, value));
    }
    log::trace!("indexed {} non-empty rows of right operand", rows_of_b.len());

    let mut sums = Accumulator::new();

    for (row_a, col_a, val_a) in a.entries() {
        let Some(row_b) = rows_of_b.get(&col_a) else {
            continue;
        };
        for &(col_b, val_b) in row_b {
            // Entries of B beyond its declared columns never contribute
            if col_b < b.ncols() {
                accumulate(&mut sums, row_a, col_b, val_a, val_b)?;
            }
        }
    }

    narrow_into(sums, a.nrows(), b.ncols())
}

/// sums[row, col] += lhs * rhs in the wide type
fn accumulate<T: MatrixElement>(
    sums: &mut Accumulator,
    row: usize,
    col: usize,
    lhs: T,
    rhs: T,
) -> Result<()> {
    let overflow = SmatError::ValueOverflow { row, col };
    let product = lhs.widen().checked_mul(rhs.widen()).ok_or(overflow.clone())?;
    let sum = sums.entry((row, col)).or_insert(0);
    *sum = sum.checked_add(product).ok_or(overflow)?;
    Ok(())
}

/// Build the result from the final sums, dropping zeros
///
/// A sum outside the element range fails with `ValueOverflow`; the reported
/// cell is the first such one in row-major order.
fn narrow_into<T: MatrixElement>(sums: Accumulator, nrows: usize, ncols: usize) -> Result<SparseMatrix<T>> {
    let mut result = SparseMatrix::new(nrows, ncols);
    let mut overflowed: Option<(usize, usize)> = None;

    for ((row, col), sum) in sums {
        match T::narrow(sum) {
            Some(value) => result.set_element(row, col, value),
            None => {
                if overflowed.map_or(true, |first| (row, col) < first) {
                    overflowed = Some((row, col));
                }
            }
        }
    }

    match overflowed {
        Some((row, col)) => Err(SmatError::ValueOverflow { row, col }),
        None => Ok(result),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRATEGIES: [MultiplyStrategy; 2] =
        [MultiplyStrategy::ColumnScan, MultiplyStrategy::RowIndexed];

    #[test]
    fn test_row_times_column() {
        let a = SparseMatrix::from_entries(1, 2, [(0, 0, 1i64), (0, 1, 2)]);
        let b = SparseMatrix::from_entries(2, 1, [(0, 0, 3i64), (1, 0, 4)]);

        for strategy in STRATEGIES {
            let c = multiply_with(&a, &b, strategy).unwrap();
            assert_eq!(c.dimensions(), (1, 1));
            assert_eq!(c.sorted_entries(), vec![(0, 0, 11)]);
        }
    }

    #[test]
    fn test_result_shape() {
        let a = SparseMatrix::from_entries(2, 3, [(1, 2, 2i64)]);
        let b = SparseMatrix::from_entries(3, 4, [(2, 3, 5i64)]);
        let c = multiply(&a, &b).unwrap();
        assert_eq!(c.dimensions(), (2, 4));
        assert_eq!(c.sorted_entries(), vec![(1, 3, 10)]);
    }

    #[test]
    fn test_products_that_cancel_are_pruned() {
        // [1 1] * [[2], [-2]] = [0]
        let a = SparseMatrix::from_entries(1, 2, [(0, 0, 1i64), (0, 1, 1)]);
        let b = SparseMatrix::from_entries(2, 1, [(0, 0, 2i64), (1, 0, -2)]);

        for strategy in STRATEGIES {
            let c = multiply_with(&a, &b, strategy).unwrap();
            assert!(c.is_empty());
        }
    }

    #[test]
    fn test_dimension_mismatch() {
        let a: SparseMatrix = SparseMatrix::new(2, 3);
        let b: SparseMatrix = SparseMatrix::new(2, 3);
        for strategy in STRATEGIES {
            assert_eq!(
                multiply_with(&a, &b, strategy),
                Err(SmatError::DimensionMismatch {
                    operation: "multiply",
                    left: (2, 3),
                    right: (2, 3)
                })
            );
        }
    }

    #[test]
    fn test_overflow_is_an_error() {
        let a = SparseMatrix::from_entries(1, 1, [(0, 0, i32::MAX)]);
        let b = SparseMatrix::from_entries(1, 1, [(0, 0, 2i32)]);
        for strategy in STRATEGIES {
            assert_eq!(
                multiply_with(&a, &b, strategy),
                Err(SmatError::ValueOverflow { row: 0, col: 0 })
            );
        }
    }

    #[test]
    fn test_partial_sums_may_leave_element_range() {
        // 100 + 100 - 100 = 100 fits in i8 whatever order the terms arrive in
        let b = SparseMatrix::from_entries(3, 1, [(0, 0, 1i8), (1, 0, 1), (2, 0, 1)]);
        let orders = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];
        let values = [100i8, 100, -100];

        for order in orders {
            let a = SparseMatrix::from_entries(1, 3, order.map(|col| (0, col, values[col])));
            for strategy in STRATEGIES {
                let c = multiply_with(&a, &b, strategy).unwrap();
                assert_eq!(c.sorted_entries(), vec![(0, 0, 100)]);
            }
        }
    }

    #[test]
    fn test_overflow_reports_first_cell() {
        let a = SparseMatrix::from_entries(2, 1, [(0, 0, 100i8), (1, 0, 100)]);
        let b = SparseMatrix::from_entries(1, 2, [(0, 0, 1i8), (0, 1, 2)]);
        for strategy in STRATEGIES {
            assert_eq!(
                multiply_with(&a, &b, strategy),
                Err(SmatError::ValueOverflow { row: 0, col: 1 })
            );
        }
    }

    #[test]
    fn test_strategies_ignore_out_of_range_columns_alike() {
        // B carries an entry beyond its declared column count
        let a = SparseMatrix::from_entries(1, 1, [(0, 0, 2i64)]);
        let b = SparseMatrix::from_entries(1, 1, [(0, 0, 3i64), (0, 5, 7)]);

        let scan = multiply_with(&a, &b, MultiplyStrategy::ColumnScan).unwrap();
        let indexed = multiply_with(&a, &b, MultiplyStrategy::RowIndexed).unwrap();
        assert_eq!(scan, indexed);
        assert_eq!(indexed.sorted_entries(), vec![(0, 0, 6)]);
    }
}
