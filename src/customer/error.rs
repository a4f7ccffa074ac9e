//! Error types for customer lookups.

use crate::model::ArgumentError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading customer records.
#[derive(Debug, Error)]
pub enum CustomerError {
    /// A customer field had the wrong shape.
    #[error(transparent)]
    InvalidArgument(#[from] ArgumentError),

    /// A persisted row could not be decoded into customer fields.
    #[error("Malformed customer record at row {row}: {reason}")]
    MalformedRecord { row: u64, reason: String },

    /// The customers file could not be opened.
    #[error("Cannot open customers file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The customers file is not readable as delimited text.
    #[error("Customers csv error: {0}")]
    Csv(#[from] csv::Error),
}
