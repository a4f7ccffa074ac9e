use crate::clients::record_client::RecordClient;
use crate::clients::source::{line_of, open_records};
use crate::customer::record::CustomerRow;
use crate::customer::CustomerError;
use crate::model::{Customer, CustomerId};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, instrument};

const CUSTOMER_COLUMNS: usize = 6;

/// Resolves customer ids to customers.
///
/// This is the only thing [`OrderClient`](crate::clients::OrderClient) needs
/// from the customer side.
pub trait CustomerLookup {
    /// Returns the customer with this id, or `None` if there is none.
    fn find_customer(&self, id: CustomerId) -> Result<Option<Arc<Customer>>, CustomerError>;
}

/// Client for the customers file.
#[derive(Debug, Clone)]
pub struct CustomerClient {
    path: PathBuf,
}

impl CustomerClient {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordClient for CustomerClient {
    type Record = Customer;
    type Id = CustomerId;
    type Error = CustomerError;

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn all(&self) -> Result<Vec<Customer>, CustomerError> {
        let mut reader = open_records(&self.path).map_err(|source| CustomerError::Io {
            path: self.path.clone(),
            source,
        })?;

        let mut customers = Vec::new();
        for record in reader.records() {
            let record = record?;
            let row = line_of(&record);
            if record.len() != CUSTOMER_COLUMNS {
                return Err(CustomerError::MalformedRecord {
                    row,
                    reason: format!(
                        "expected {CUSTOMER_COLUMNS} fields, found {}",
                        record.len()
                    ),
                });
            }
            let raw: CustomerRow =
                record
                    .deserialize(None)
                    .map_err(|e| CustomerError::MalformedRecord {
                        row,
                        reason: e.to_string(),
                    })?;
            debug!(row, "Decoding customer row");
            let customer = Customer::try_from(raw).map_err(|err| match err {
                CustomerError::InvalidArgument(err) => {
                    CustomerError::InvalidArgument(err.at_row(row))
                }
                other => other,
            })?;
            customers.push(customer);
        }

        info!(count = customers.len(), "Loaded customers");
        Ok(customers)
    }

    fn id_of(record: &Customer) -> CustomerId {
        record.id
    }
}

impl CustomerLookup for CustomerClient {
    fn find_customer(&self, id: CustomerId) -> Result<Option<Arc<Customer>>, CustomerError> {
        Ok(self.find(id)?.map(Arc::new))
    }
}
