//! Parsing utilities for the sparse matrix text format
//!
//! Pure line-level parsers with no I/O. Failures are reported as a short
//! reason string; the caller attaches the line number and line text.

use crate::format::constants::{COLS_KEY, ENTRY_CLOSE, ENTRY_OPEN, ROWS_KEY};
use crate::MatrixElement;

/// Reason attached to a line that failed to parse
pub type Reason = &'static str;

/// Parse a header line of the form `rows=<integer>` or `cols=<integer>`
///
/// Whitespace between `=` and the number is allowed. The value is returned
/// signed so that a negative dimension can be reported as such.
pub fn parse_header(line: &str, key: &str) -> Result<i64, Reason> {
    let value = line.strip_prefix(key).ok_or(match key {
        ROWS_KEY => "expected `rows=<integer>` header",
        COLS_KEY => "expected `cols=<integer>` header",
        _ => "expected header",
    })?;
    parse_signed::<i64>(value.trim_start())
}

/// Parse an entry line of the form `(<row>, <col>, <value>)`
///
/// Whitespace is only allowed after each comma; row and column are
/// non-negative integers and the value may carry a leading `-`.
pub fn parse_entry<T: MatrixElement>(line: &str) -> Result<(usize, usize, T), Reason> {
    let inner = line
        .strip_prefix(ENTRY_OPEN)
        .and_then(|rest| rest.strip_suffix(ENTRY_CLOSE))
        .ok_or("expected `(row, col, value)`")?;

    let mut fields = inner.split(',');
    let (Some(row), Some(col), Some(value), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err("expected three comma-separated fields");
    };

    let row = parse_usize(row)?;
    let col = parse_usize(col.trim_start())?;
    let value = parse_signed::<T>(value.trim_start())?;
    Ok((row, col, value))
}

/// Parse a non-empty run of ASCII digits into a usize
///
/// Signs and whitespace are rejected.
pub fn parse_usize(s: &str) -> Result<usize, Reason> {
    if s.is_empty() {
        return Err("missing index");
    }

    let mut result: usize = 0;
    for byte in s.bytes() {
        if !byte.is_ascii_digit() {
            return Err("index must be a non-negative integer");
        }

        let digit = (byte - b'0') as usize;
        result = result
            .checked_mul(10)
            .and_then(|r| r.checked_add(digit))
            .ok_or("index too large")?;
    }

    Ok(result)
}

/// Parse an optionally negative run of ASCII digits into an element
pub fn parse_signed<T: MatrixElement>(s: &str) -> Result<T, Reason> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() {
        return Err("missing integer");
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err("expected an integer");
    }
    s.parse::<T>().map_err(|_| "integer out of range")
}
