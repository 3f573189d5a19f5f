//! Tokens of the sparse matrix text format

/// Prefix of the first header line
pub const ROWS_KEY: &str = "rows=";

/// Prefix of the second header line
pub const COLS_KEY: &str = "cols=";

/// Opening token of an entry line
pub const ENTRY_OPEN: char = '(';

/// Closing token of an entry line
pub const ENTRY_CLOSE: char = ')';

/// Separator written between the fields of an entry line
pub const FIELD_SEPARATOR: &str = ", ";
