//! Decoding of persisted order rows.
//!
//! A row is `id,products,customer_id,status` with no header line. The
//! products field is `name:price` entries joined by `;`:
//!
//! ```text
//! 7,book:20.00;pen:1.00,3,paid
//! ```
//!
//! Every entry must split on its first `:` into a non-blank name and a
//! decimal price from 0 to [`MAX_PRICE`], and a name may appear only once.
//! Anything else is reported as [`OrderError::MalformedRecord`] rather than
//! degraded into a blank name or a zero price.
//!
//! Fields are decoded one at a time, in the order construction checks them:
//! id, products, customer, status. The caller resolves the customer between
//! [`OrderRow::products`] and [`OrderRow::status`].

use super::entity::{price_in_range, MAX_PRICE};
use super::OrderError;
use crate::model::{ArgumentError, CustomerId, FulfillmentStatus, OrderId, Products};
use csv::StringRecord;
use rust_decimal::Decimal;
use std::str::FromStr;

const COLUMNS: usize = 4;

/// The raw text fields of one order row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OrderRow {
    /// 1-based line number in the source file.
    pub row: u64,
    pub id: String,
    pub products: String,
    pub customer_id: String,
    pub status: String,
}

impl OrderRow {
    pub(crate) fn from_record(row: u64, record: &StringRecord) -> Result<Self, OrderError> {
        if record.len() != COLUMNS {
            return Err(OrderError::MalformedRecord {
                row,
                reason: format!("expected {COLUMNS} fields, found {}", record.len()),
            });
        }
        Ok(Self {
            row,
            id: record[0].to_string(),
            products: record[1].to_string(),
            customer_id: record[2].to_string(),
            status: record[3].to_string(),
        })
    }

    pub(crate) fn id(&self) -> Result<OrderId, OrderError> {
        self.field(&self.id)
    }

    pub(crate) fn products(&self) -> Result<Products, OrderError> {
        parse_products(&self.products).map_err(|reason| OrderError::MalformedRecord {
            row: self.row,
            reason,
        })
    }

    pub(crate) fn customer_id(&self) -> Result<CustomerId, OrderError> {
        self.field(&self.customer_id)
    }

    pub(crate) fn status(&self) -> Result<FulfillmentStatus, OrderError> {
        self.field(&self.status)
    }

    fn field<T>(&self, raw: &str) -> Result<T, OrderError>
    where
        T: FromStr<Err = ArgumentError>,
    {
        raw.parse::<T>().map_err(|err| err.at_row(self.row).into())
    }
}

fn parse_products(field: &str) -> Result<Products, String> {
    let mut products = Products::new();
    if field.trim().is_empty() {
        return Ok(products);
    }

    for entry in field.split(';') {
        let (name, price) = entry
            .split_once(':')
            .ok_or_else(|| format!("product entry {entry:?} has no ':' separator"))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(format!("product entry {entry:?} has a blank name"));
        }
        let price = Decimal::from_str(price.trim())
            .map_err(|_| format!("product entry {entry:?} has an unparsable price"))?;
        if price < Decimal::ZERO {
            return Err(format!("product entry {entry:?} has a negative price"));
        }
        if !price_in_range(price) {
            return Err(format!("product entry {entry:?} is priced above {MAX_PRICE}"));
        }
        if products.insert(name.to_string(), price).is_some() {
            return Err(format!("product {name:?} is listed more than once"));
        }
    }

    Ok(products)
}
