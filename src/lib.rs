//! # Order Records
//!
//! > **Validated customer orders, loaded from flat delimited files.**
//!
//! An [`Order`](model::Order) is a set of purchased products with prices, a
//! link to a [`Customer`](model::Customer) and a
//! [`FulfillmentStatus`](model::FulfillmentStatus). Orders are built in memory
//! or reconstructed from rows of an orders file; nothing is ever written back.
//!
//! ## 🏗️ Design Notes
//!
//! ### 1. Invalid States Are Unrepresentable
//! Ids are `u32` newtypes, the status is a closed enum, and prices are
//! [`rust_decimal::Decimal`]. What the compiler cannot enforce (blank product
//! names, negative prices, raw text from a file) is checked once and reported
//! through [`ArgumentError`](model::ArgumentError).
//!
//! ### 2. Type-Safe Error Handling
//! Each resource has its own error enum ([`OrderError`](order::OrderError),
//! [`CustomerError`](customer::CustomerError)). A row that cannot be decoded is
//! an explicit [`MalformedRecord`](order::OrderError::MalformedRecord), never a
//! silently degraded order.
//!
//! ### 3. No Caching
//! Every `all`, `find` and `find_by_customer` call re-reads the file. Within a
//! single load, orders of the same customer share one `Arc<Customer>`.
//!
//! ### 4. Observability
//! `tracing` spans around every client operation. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: pure data (`Order`, `Customer`, ids, status, `ArgumentError`).
//! - [`order`]: construction, [`total`](model::Order::total), product mutation and row decoding.
//! - [`customer`]: customer row decoding and errors.
//! - [`clients`]: [`OrderClient`](clients::OrderClient), [`CustomerClient`](clients::CustomerClient),
//!   the [`RecordClient`](clients::RecordClient) trait and a mock customer lookup for tests.
//! - [`lifecycle`]: [`DataConfig`](lifecycle::DataConfig), [`OrderSystem`](lifecycle::OrderSystem), tracing setup.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Load ./data/orders.csv and ./data/customers.csv
//! RUST_LOG=info cargo run
//!
//! # Point at other files
//! ORDERS_CSV_PATH=/tmp/orders.csv CUSTOMERS_CSV_PATH=/tmp/customers.csv cargo run
//!
//! cargo test
//! ```

pub mod clients;
pub mod customer;
pub mod lifecycle;
pub mod model;
pub mod order;
