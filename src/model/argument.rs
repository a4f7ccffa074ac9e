//! Shared argument validation.
//!
//! Every public operation that accepts raw text (or a value whose type alone
//! cannot carry its invariant) reports a bad input through [`ArgumentError`].

use thiserror::Error;

/// An argument did not have the expected shape.
///
/// `name` is the logical name of the argument (e.g. `"customer id"`), never
/// its position. `row` is set when the value came from a line of a record
/// file.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid {name}{}: expected {expected}, got {found:?}", row_suffix(.row))]
pub struct ArgumentError {
    pub name: &'static str,
    pub expected: &'static str,
    pub found: String,
    pub row: Option<u64>,
}

impl ArgumentError {
    pub fn new(name: &'static str, expected: &'static str, found: impl Into<String>) -> Self {
        Self {
            name,
            expected,
            found: found.into(),
            row: None,
        }
    }

    /// Attributes the error to a 1-based line of a record file.
    pub fn at_row(mut self, row: u64) -> Self {
        self.row = Some(row);
        self
    }
}

fn row_suffix(row: &Option<u64>) -> String {
    row.map(|row| format!(" at row {row}")).unwrap_or_default()
}

/// Parses a non-negative decimal integer such as a record id.
pub(crate) fn parse_id(raw: &str, name: &'static str) -> Result<u32, ArgumentError> {
    let trimmed = raw.trim();
    // `u32::from_str` accepts a leading '+'
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ArgumentError::new(name, "a non-negative integer", raw));
    }
    trimmed
        .parse()
        .map_err(|_| ArgumentError::new(name, "a non-negative integer", raw))
}

/// Rejects empty or whitespace-only text.
pub(crate) fn require_text(raw: &str, name: &'static str) -> Result<(), ArgumentError> {
    if raw.trim().is_empty() {
        return Err(ArgumentError::new(name, "non-empty text", raw));
    }
    Ok(())
}
