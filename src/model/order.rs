//! Order data types.
//!
//! Construction, total calculation and product mutation live in
//! [`crate::order`]; loading from the backing file lives in
//! [`OrderClient`](crate::clients::OrderClient).

use crate::model::{ArgumentError, Customer};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

impl FromStr for OrderId {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::model::argument::parse_id(s, "id").map(Self)
    }
}

/// Product name to unit price.
pub type Products = HashMap<String, Decimal>;

/// Where an order is in fulfillment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FulfillmentStatus {
    #[default]
    Pending,
    Paid,
    Processing,
    Shipped,
    Complete,
}

impl FulfillmentStatus {
    pub const ALL: [FulfillmentStatus; 5] = [
        Self::Pending,
        Self::Paid,
        Self::Processing,
        Self::Shipped,
        Self::Complete,
    ];

    /// The token used in the persisted row.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Complete => "complete",
        }
    }
}

impl Display for FulfillmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FulfillmentStatus {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == token)
            .ok_or_else(|| {
                ArgumentError::new(
                    "fulfillment_status",
                    "one of pending, paid, processing, shipped, complete",
                    s,
                )
            })
    }
}

/// Represents a customer order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub(crate) id: OrderId,
    pub(crate) products: Products,
    pub(crate) customer: Arc<Customer>,
    pub(crate) fulfillment_status: FulfillmentStatus,
}

impl Order {
    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn products(&self) -> &Products {
        &self.products
    }

    /// The customer this order belongs to, shared with every other order
    /// loaded for the same customer.
    pub fn customer(&self) -> &Arc<Customer> {
        &self.customer
    }

    pub fn fulfillment_status(&self) -> FulfillmentStatus {
        self.fulfillment_status
    }
}
