//! Error types for order operations.

use crate::customer::CustomerError;
use crate::model::{ArgumentError, CustomerId};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Error)]
pub enum OrderError {
    /// An argument (or a raw field standing in for one) had the wrong shape.
    #[error(transparent)]
    InvalidArgument(#[from] ArgumentError),

    /// The product name is already on the order.
    #[error("Duplicate product: {0}")]
    DuplicateProduct(String),

    /// The product name is not on the order.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A persisted row could not be decoded into order fields.
    #[error("Malformed order record at row {row}: {reason}")]
    MalformedRecord { row: u64, reason: String },

    /// A persisted row refers to a customer that does not exist.
    #[error("Order record at row {row} refers to unknown {customer_id}")]
    UnknownCustomer { row: u64, customer_id: CustomerId },

    /// Resolving the customer failed.
    #[error("Customer lookup failed: {0}")]
    Customer(#[from] CustomerError),

    /// The orders file could not be opened.
    #[error("Cannot open orders file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The orders file is not readable as delimited text.
    #[error("Orders csv error: {0}")]
    Csv(#[from] csv::Error),
}
