use crate::clients::{CustomerClient, OrderClient};
use crate::lifecycle::DataConfig;
use tracing::info;

/// Wires the clients over the configured record files.
///
/// # Example
///
/// ```no_run
/// use order_records::clients::RecordClient;
/// use order_records::lifecycle::{DataConfig, OrderSystem};
/// use order_records::model::CustomerId;
///
/// let system = OrderSystem::new(DataConfig::from_env());
/// for order in system.order_client.all()? {
///     println!("{} {}", order.id(), order.total());
/// }
/// let orders = system.order_client.find_by_customer(CustomerId(3))?;
/// # Ok::<(), order_records::order::OrderError>(())
/// ```
#[derive(Debug, Clone)]
pub struct OrderSystem {
    /// Client for the orders file; resolves customers through its own
    /// [`CustomerClient`].
    pub order_client: OrderClient<CustomerClient>,

    /// Client for the customers file.
    pub customer_client: CustomerClient,
}

impl OrderSystem {
    pub fn new(config: DataConfig) -> Self {
        info!(
            orders = %config.orders_path.display(),
            customers = %config.customers_path.display(),
            "Starting order system"
        );

        let customer_client = CustomerClient::new(config.customers_path);
        let order_client = OrderClient::new(config.orders_path, customer_client.clone());

        Self {
            order_client,
            customer_client,
        }
    }
}
