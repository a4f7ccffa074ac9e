use crate::model::ArgumentError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub u32);

impl From<u32> for CustomerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "customer_{}", self.0)
    }
}

impl FromStr for CustomerId {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::model::argument::parse_id(s, "customer id").map(Self)
    }
}

/// Postal address of a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// Represents a customer record.
///
/// Orders only ever look at [`Customer::id`]; the rest is carried for callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub email: String,
    pub address: Address,
}

impl Customer {
    /// Creates a new Customer instance.
    ///
    /// # Arguments
    /// * `id` - Identifier the order rows refer to
    /// * `email` - Contact email
    /// * `address` - Shipping address
    pub fn new(id: CustomerId, email: impl Into<String>, address: Address) -> Self {
        Self {
            id,
            email: email.into(),
            address,
        }
    }
}
