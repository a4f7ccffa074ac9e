//! # Mock Customer Lookup
//!
//! [`MockCustomerLookup`] stands in for the customers file so order loading
//! can be tested against a single orders file with scripted customer answers.
//!
//! ```rust
//! use order_records::clients::{CustomerLookup, MockCustomerLookup};
//! use order_records::model::{Address, Customer, CustomerId};
//!
//! let address = Address {
//!     street: "1 Main St".into(),
//!     city: "Seattle".into(),
//!     state: "WA".into(),
//!     zip: "98101".into(),
//! };
//! let mut mock = MockCustomerLookup::new();
//! mock.expect_find(CustomerId(3))
//!     .return_ok(Some(Customer::new(CustomerId(3), "ada@example.com", address)));
//!
//! let customer = mock.find_customer(CustomerId(3)).unwrap().unwrap();
//! assert_eq!(customer.email, "ada@example.com");
//! mock.verify();
//! ```
//!
//! Expectations are consumed in order. A call that does not match the next
//! expectation panics, and [`MockCustomerLookup::verify`] panics if any
//! expectation was never consumed.

use crate::clients::customer_client::CustomerLookup;
use crate::customer::CustomerError;
use crate::model::{Customer, CustomerId};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

struct Expectation {
    id: CustomerId,
    response: Result<Option<Customer>, CustomerError>,
}

type Expectations = Arc<Mutex<VecDeque<Expectation>>>;

fn lock(expectations: &Expectations) -> MutexGuard<'_, VecDeque<Expectation>> {
    expectations.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A customer lookup with expectation tracking for fluent testing.
///
/// Clones share the same expectations, so a clone can be handed to an
/// [`OrderClient`](crate::clients::OrderClient) while the original is kept
/// for [`verify`](Self::verify).
#[derive(Clone, Default)]
pub struct MockCustomerLookup {
    expectations: Expectations,
}

impl MockCustomerLookup {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `find_customer` call for `id`.
    pub fn expect_find(&mut self, id: CustomerId) -> FindExpectationBuilder {
        FindExpectationBuilder {
            id,
            expectations: Arc::clone(&self.expectations),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations).len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

impl CustomerLookup for MockCustomerLookup {
    fn find_customer(&self, id: CustomerId) -> Result<Option<Arc<Customer>>, CustomerError> {
        let expectation = lock(&self.expectations).pop_front();
        match expectation {
            Some(expectation) if expectation.id == id => {
                expectation.response.map(|found| found.map(Arc::new))
            }
            Some(expectation) => panic!(
                "Unexpected find_customer({id}); expected find_customer({})",
                expectation.id
            ),
            None => panic!("Unexpected find_customer({id}); no expectations left"),
        }
    }
}

/// Builder for `find_customer` expectations.
pub struct FindExpectationBuilder {
    id: CustomerId,
    expectations: Expectations,
}

impl FindExpectationBuilder {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, customer: Option<Customer>) {
        lock(&self.expectations).push_back(Expectation {
            id: self.id,
            response: Ok(customer),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: CustomerError) {
        lock(&self.expectations).push_back(Expectation {
            id: self.id,
            response: Err(error),
        });
    }
}
