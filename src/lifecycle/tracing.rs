//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! ## What Gets Traced
//!
//! - **Loads**: each `all()` call is a span carrying the file path, with the
//!   number of records loaded at `info`
//! - **Rows**: every decoded row at `debug`, every rejected row at `warn`
//! - **Lookups**: `find` and `find_by_customer` spans with the requested id
//! - **Mutations**: products added to or removed from an order at `debug`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Load counts only
//! RUST_LOG=info cargo run
//!
//! # Every row and customer resolution
//! RUST_LOG=debug cargo run
//!
//! # Filter to the clients
//! RUST_LOG=order_records::clients=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug`, loading the bundled `data/` files (8 orders, 5
//! customers) starts and ends like this. The customers file is re-read once
//! per distinct customer:
//!
//! ```text
//! INFO Starting order system orders=./data/orders.csv customers=./data/customers.csv
//! DEBUG order_loading:all: Decoding order row row=1 path=./data/orders.csv
//! DEBUG order_loading:all: Resolving customer customer_id=customer_5 path=./data/orders.csv
//! INFO order_loading:all:find:all: Loaded customers count=5 id=CustomerId(5) path=./data/customers.csv
//! ...
//! DEBUG order_loading:all: Decoding order row row=8 path=./data/orders.csv
//! INFO order_loading:all: Loaded orders count=8 path=./data/orders.csv
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
