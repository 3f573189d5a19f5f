//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as matrix elements.

use core::fmt::{Debug, Display};
use core::hash::Hash;
use core::str::FromStr;

/// Trait for types that can be stored as matrix elements
///
/// Elements are signed integers. Arithmetic is checked so that callers can
/// turn an overflow into an error instead of a wrapped value.
pub trait MatrixElement: Copy + PartialEq + Eq + Hash + Debug + Display + FromStr {
    /// The additive identity; never stored in a matrix
    const ZERO: Self;

    /// Returns `true` if this is the additive identity
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn checked_sub(self, rhs: Self) -> Option<Self>;

    fn checked_mul(self, rhs: Self) -> Option<Self>;

    fn checked_neg(self) -> Option<Self>;

    /// Lossless conversion into the accumulator type used by multiplication
    fn widen(self) -> i128;

    /// Converts an accumulated value back, or `None` if it is out of range
    fn narrow(wide: i128) -> Option<Self>;
}

macro_rules! impl_matrix_element {
    ($($t:ty),* $(,)?) => {
        $(
            impl MatrixElement for $t {
                const ZERO: Self = 0;

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }

                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_sub(self, rhs)
                }

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_mul(self, rhs)
                }

                fn checked_neg(self) -> Option<Self> {
                    <$t>::checked_neg(self)
                }

                fn widen(self) -> i128 {
                    self as i128
                }

                fn narrow(wide: i128) -> Option<Self> {
                    <$t>::try_from(wide).ok()
                }
            }
        )*
    };
}

impl_matrix_element!(i8, i16, i32, i64, i128, isize);
