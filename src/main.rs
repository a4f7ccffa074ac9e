//! Demo: load the configured orders and customers and log what was found.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use order_records::clients::RecordClient;
use order_records::lifecycle::{setup_tracing, DataConfig, OrderSystem};
use tracing::{info, info_span, warn};

fn main() -> Result<(), String> {
    setup_tracing();

    let system = OrderSystem::new(DataConfig::from_env());

    let orders = {
        let _span = info_span!("order_loading").entered();
        system.order_client.all().map_err(|e| e.to_string())?
    };

    for order in &orders {
        info!(
            order_id = %order.id(),
            customer_id = %order.customer().id,
            status = %order.fulfillment_status(),
            products = order.products().len(),
            total = %order.total(),
            "Order"
        );
    }

    let Some(first) = orders.first() else {
        warn!("No orders found");
        return Ok(());
    };

    let customer_id = first.customer().id;
    let _span = info_span!("customer_orders", %customer_id).entered();
    match system
        .order_client
        .find_by_customer(customer_id)
        .map_err(|e| e.to_string())?
    {
        Some(found) => info!(count = found.len(), "Orders for customer"),
        None => warn!("Customer has no orders"),
    }

    info!("Done");
    Ok(())
}
