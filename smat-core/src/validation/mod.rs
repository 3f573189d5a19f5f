//! Validation utilities for the sparse matrix text format
//!
//! This module contains pure validation functions with no I/O dependencies.

pub mod bounds;
pub mod parsing;

pub use bounds::validate_entry_bounds;
pub use parsing::{parse_entry, parse_header};
