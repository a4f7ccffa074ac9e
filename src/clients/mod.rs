//! Read-side clients over the backing record files.

pub mod customer_client;
pub mod mock;
pub mod order_client;
pub mod record_client;
mod source;

pub use customer_client::*;
pub use mock::*;
pub use order_client::*;
pub use record_client::*;
