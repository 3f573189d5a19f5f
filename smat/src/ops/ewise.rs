//! Element-wise Operations
//!
//! Operations:
//! - add: C = A + B
//! - subtract: C = A - B
//!
//! Both copy A into a fresh result and fold every entry of B into it, so the
//! cost follows nnz(A) + nnz(B) and never the dense shape. Sums that cancel
//! are dropped by `set_element`.

use smat_core::{MatrixElement, Result, SmatError, SparseMatrix};

use super::ensure_same_shape;

/// Element-wise addition: C = A + B
///
/// Fails with `DimensionMismatch` unless both operands have the same shape.
pub fn add<T: MatrixElement>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    ensure_same_shape("add", a, b)?;
    log::debug!(
        "add {}x{}: nnz(a)={}, nnz(b)={}",
        a.nrows(),
        a.ncols(),
        a.nnz(),
        b.nnz()
    );
    combine(a, b, T::checked_add)
}

/// Element-wise subtraction: C = A - B
///
/// Fails with `DimensionMismatch` unless both operands have the same shape.
pub fn subtract<T: MatrixElement>(
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
) -> Result<SparseMatrix<T>> {
    ensure_same_shape("subtract", a, b)?;
    log::debug!(
        "subtract {}x{}: nnz(a)={}, nnz(b)={}",
        a.nrows(),
        a.ncols(),
        a.nnz(),
        b.nnz()
    );
    combine(a, b, T::checked_sub)
}

/// Copy `a`, then fold each entry of `b` into the running value with `op`
fn combine<T, F>(a: &SparseMatrix<T>, b: &SparseMatrix<T>, op: F) -> Result<SparseMatrix<T>>
where
    T: MatrixElement,
    F: Fn(T, T) -> Option<T>,
{
    let mut result = SparseMatrix::from_entries(a.nrows(), a.ncols(), a.entries());

    for (row, col, value) in b.entries() {
        let current = result.get_element(row, col);
        let next = op(current, value).ok_or(SmatError::ValueOverflow { row, col })?;
        result.set_element(row, col, next);
    }

    log::trace!("element-wise result nnz={}", result.nnz());
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> (SparseMatrix, SparseMatrix) {
        let a = SparseMatrix::from_entries(3, 3, [(0, 0, 1), (1, 2, 2), (2, 1, 3)]);
        let b = SparseMatrix::from_entries(3, 3, [(0, 0, 5), (1, 2, -2)]);
        (a, b)
    }

    #[test]
    fn test_add_cancels_to_zero() {
        let (a, b) = scenario();
        let c = add(&a, &b).unwrap();
        assert_eq!(c.dimensions(), (3, 3));
        assert_eq!(c.sorted_entries(), vec![(0, 0, 6), (2, 1, 3)]);
    }

    #[test]
    fn test_subtract() {
        let (a, b) = scenario();
        let c = subtract(&a, &b).unwrap();
        assert_eq!(c.sorted_entries(), vec![(0, 0, -4), (1, 2, 4), (2, 1, 3)]);
    }

    #[test]
    fn test_inputs_are_untouched() {
        let (a, b) = scenario();
        let (a0, b0) = (a.clone(), b.clone());
        add(&a, &b).unwrap();
        subtract(&a, &b).unwrap();
        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }

    #[test]
    fn test_shape_mismatch() {
        let a: SparseMatrix = SparseMatrix::new(2, 3);
        let b: SparseMatrix = SparseMatrix::new(3, 2);
        assert!(matches!(
            add(&a, &b),
            Err(SmatError::DimensionMismatch {
                operation: "add",
                left: (2, 3),
                right: (3, 2)
            })
        ));
        assert!(matches!(
            subtract(&a, &b),
            Err(SmatError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_overflow_is_an_error() {
        let a = SparseMatrix::from_entries(1, 1, [(0, 0, i8::MAX)]);
        let b = SparseMatrix::from_entries(1, 1, [(0, 0, 1i8)]);
        assert_eq!(add(&a, &b), Err(SmatError::ValueOverflow { row: 0, col: 0 }));

        let c = SparseMatrix::from_entries(1, 1, [(0, 0, i8::MIN)]);
        assert!(subtract(&c, &b).is_err());
    }

    #[test]
    fn test_subtract_from_empty_negates() {
        let a: SparseMatrix = SparseMatrix::new(2, 2);
        let b = SparseMatrix::from_entries(2, 2, [(1, 0, 9i64)]);
        assert_eq!(subtract(&a, &b).unwrap().sorted_entries(), vec![(1, 0, -9)]);
    }
}
