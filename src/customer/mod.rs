//! Customer records, consumed by orders through their id.

pub mod error;
pub(crate) mod record;

pub use error::*;
