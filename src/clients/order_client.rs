use crate::clients::customer_client::{CustomerClient, CustomerLookup};
use crate::clients::record_client::RecordClient;
use crate::clients::source::{line_of, open_records};
use crate::model::{Customer, CustomerId, Order, OrderId};
use crate::order::record::OrderRow;
use crate::order::OrderError;
use csv::StringRecord;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Client for the orders file.
///
/// Every row is built through [`Order::new`], with its customer resolved via
/// the injected [`CustomerLookup`]. The file is opened and read in full on
/// every call.
#[derive(Debug, Clone)]
pub struct OrderClient<C = CustomerClient> {
    path: PathBuf,
    customers: C,
}

impl<C: CustomerLookup> OrderClient<C> {
    pub fn new(path: impl Into<PathBuf>, customers: C) -> Self {
        Self {
            path: path.into(),
            customers,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn customers(&self) -> &C {
        &self.customers
    }

    /// All orders placed by `customer_id`, in file order.
    ///
    /// Returns `None` rather than an empty list when the customer has no
    /// orders.
    #[instrument(skip(self))]
    pub fn find_by_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Option<Vec<Order>>, OrderError> {
        let orders: Vec<Order> = self
            .all()?
            .into_iter()
            .filter(|order| order.customer().id == customer_id)
            .collect();

        debug!(count = orders.len(), "Orders matched");
        Ok((!orders.is_empty()).then_some(orders))
    }

    fn decode_row(
        &self,
        row: u64,
        record: &StringRecord,
        resolved: &mut HashMap<CustomerId, Arc<Customer>>,
    ) -> Result<Order, OrderError> {
        let raw = OrderRow::from_record(row, record)?;
        let id = raw.id()?;
        let products = raw.products()?;
        let customer_id = raw.customer_id()?;

        let customer = match resolved.get(&customer_id) {
            Some(customer) => Arc::clone(customer),
            None => {
                debug!(%customer_id, "Resolving customer");
                let customer = self
                    .customers
                    .find_customer(customer_id)?
                    .ok_or(OrderError::UnknownCustomer { row, customer_id })?;
                resolved.insert(customer_id, Arc::clone(&customer));
                customer
            }
        };

        let status = raw.status()?;
        Order::new(id, products, customer, status)
    }
}

impl<C: CustomerLookup> RecordClient for OrderClient<C> {
    type Record = Order;
    type Id = OrderId;
    type Error = OrderError;

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn all(&self) -> Result<Vec<Order>, OrderError> {
        let mut reader = open_records(&self.path).map_err(|source| OrderError::Io {
            path: self.path.clone(),
            source,
        })?;

        // Each distinct customer is looked up once per load and shared.
        let mut resolved = HashMap::new();
        let mut orders = Vec::new();
        for record in reader.records() {
            let record = record?;
            let row = line_of(&record);
            debug!(row, "Decoding order row");

            let order = self
                .decode_row(row, &record, &mut resolved)
                .inspect_err(|e| warn!(row, error = %e, "Rejected order row"))?;
            orders.push(order);
        }

        info!(count = orders.len(), "Loaded orders");
        Ok(orders)
    }

    fn id_of(record: &Order) -> OrderId {
        record.id()
    }
}
