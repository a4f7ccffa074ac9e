//! Construction, totals and product mutation for [`Order`].

use super::OrderError;
use crate::model::argument::require_text;
use crate::model::{ArgumentError, Customer, FulfillmentStatus, Order, OrderId, Products};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use std::sync::Arc;
use tracing::debug;

/// Flat tax applied to the subtotal of every non-empty order.
pub const SALES_TAX_RATE: Decimal = dec!(0.075);

/// Highest price a single product may carry.
///
/// Bounding each price keeps the taxed subtotal of any order that fits in
/// memory far below `Decimal::MAX`, so [`Order::total`] cannot overflow.
pub const MAX_PRICE: Decimal = dec!(1000000000);

pub(crate) const PRICE_RANGE: &str = "a decimal from 0 to 1000000000";

pub(crate) fn price_in_range(price: Decimal) -> bool {
    price >= Decimal::ZERO && price <= MAX_PRICE
}

impl Order {
    /// Creates a new Order.
    ///
    /// # Arguments
    /// * `id` - Unique identifier
    /// * `products` - Product name to price; becomes the order's own working copy
    /// * `customer` - The customer placing the order
    /// * `fulfillment_status` - Initial status
    ///
    /// # Errors
    /// [`OrderError::InvalidArgument`] naming `products` when a product name is
    /// blank or a price is negative or above [`MAX_PRICE`].
    pub fn new(
        id: OrderId,
        products: Products,
        customer: Arc<Customer>,
        fulfillment_status: FulfillmentStatus,
    ) -> Result<Self, OrderError> {
        for (name, price) in &products {
            if name.trim().is_empty() {
                return Err(
                    ArgumentError::new("products", "non-empty product names", name.as_str()).into(),
                );
            }
            if !price_in_range(*price) {
                return Err(ArgumentError::new(
                    "products",
                    "prices from 0 to 1000000000",
                    format!("{name}:{price}"),
                )
                .into());
            }
        }

        Ok(Self {
            id,
            products,
            customer,
            fulfillment_status,
        })
    }

    /// Creates a new Order in the [`FulfillmentStatus::Pending`] state.
    pub fn pending(
        id: OrderId,
        products: Products,
        customer: Arc<Customer>,
    ) -> Result<Self, OrderError> {
        Self::new(id, products, customer, FulfillmentStatus::default())
    }

    /// Tax-inclusive total, rounded half-up to cents.
    ///
    /// An order with no products totals exactly zero.
    pub fn total(&self) -> Decimal {
        if self.products.is_empty() {
            return Decimal::ZERO;
        }
        let subtotal: Decimal = self.products.values().sum();
        (subtotal + subtotal * SALES_TAX_RATE)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Adds a product at the given price.
    ///
    /// # Errors
    /// - [`OrderError::InvalidArgument`] for a blank name, then for a price
    ///   outside `0..=MAX_PRICE`
    /// - [`OrderError::DuplicateProduct`] if the name is already on the order
    pub fn add_product(&mut self, name: impl Into<String>, price: Decimal) -> Result<(), OrderError> {
        let name = name.into();
        require_text(&name, "product name")?;
        if !price_in_range(price) {
            return Err(ArgumentError::new("price", PRICE_RANGE, price.to_string()).into());
        }
        if self.products.contains_key(&name) {
            return Err(OrderError::DuplicateProduct(name));
        }

        debug!(order_id = %self.id, product = %name, %price, "Product added");
        self.products.insert(name, price);
        Ok(())
    }

    /// Removes a product, returning the price it was listed at.
    ///
    /// # Errors
    /// - [`OrderError::InvalidArgument`] for a blank name
    /// - [`OrderError::ProductNotFound`] if the name is not on the order
    pub fn remove_product(&mut self, name: &str) -> Result<Decimal, OrderError> {
        require_text(name, "product name")?;
        let price = self
            .products
            .remove(name)
            .ok_or_else(|| OrderError::ProductNotFound(name.to_string()))?;

        debug!(order_id = %self.id, product = %name, "Product removed");
        Ok(price)
    }
}
