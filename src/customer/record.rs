//! Decoding of persisted customer rows: `id,email,street,city,state,zip`.

use super::CustomerError;
use crate::model::{Address, Customer, CustomerId};
use serde::Deserialize;

/// One customer row as it appears on disk.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CustomerRow {
    pub id: String,
    pub email: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl TryFrom<CustomerRow> for Customer {
    type Error = CustomerError;

    fn try_from(row: CustomerRow) -> Result<Self, Self::Error> {
        let id: CustomerId = row.id.parse()?;
        let address = Address {
            street: row.street,
            city: row.city,
            state: row.state,
            zip: row.zip,
        };
        Ok(Customer::new(id, row.email, address))
    }
}
