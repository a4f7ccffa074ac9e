//! Pure data structures: orders, customers and the shared argument error.

pub mod argument;
pub mod customer;
pub mod order;

pub use argument::ArgumentError;
pub use customer::*;
pub use order::*;
