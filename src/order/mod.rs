//! Order-specific logic: validated construction, totals, product mutation and
//! decoding of persisted rows.

pub mod entity;
pub mod error;
pub(crate) mod record;

pub use entity::{MAX_PRICE, SALES_TAX_RATE};
pub use error::*;
