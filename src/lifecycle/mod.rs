//! Runtime wiring: file locations, client construction and tracing setup.
//!
//! - [`DataConfig`] - Where the orders and customers files live
//! - [`OrderSystem`] - Builds the clients over those files
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod config;
pub mod order_system;
pub mod tracing;

pub use config::*;
pub use order_system::*;
pub use self::tracing::setup_tracing;
