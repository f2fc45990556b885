//! Shared test utilities for `CartBuddy`.
//!
//! Provides a recording cart store stub, sample products with sensible
//! defaults and test tracing setup.

use crate::core::{
    product::{Product, ProductId, UpdateProductAmount},
    store::CartStore,
};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// A request received by [`RecordingStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    /// `remove_product` was called
    Remove(ProductId),
    /// `update_product_amount` was called
    Update(UpdateProductAmount),
}

/// Cart store stub that serves a fixed cart and records every request
/// without applying it.
#[derive(Debug, Default)]
pub struct RecordingStore {
    cart: Vec<Product>,
    calls: Mutex<Vec<StoreCall>>,
}

impl RecordingStore {
    /// Stub serving `cart` on every read.
    pub fn with_cart(cart: Vec<Product>) -> Self {
        Self {
            cart,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far, oldest first.
    #[allow(clippy::unwrap_used)]
    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    #[allow(clippy::unwrap_used)]
    fn record(&self, call: StoreCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl CartStore for RecordingStore {
    fn cart(&self) -> Vec<Product> {
        self.cart.clone()
    }

    fn remove_product(&self, product_id: ProductId) {
        self.record(StoreCall::Remove(product_id));
    }

    fn update_product_amount(&self, request: UpdateProductAmount) {
        self.record(StoreCall::Update(request));
    }
}

/// Creates a product with a placeholder image URL derived from its id.
pub fn sample_product(id: ProductId, title: &str, price: f64, amount: u32) -> Product {
    Product {
        id,
        title: title.to_string(),
        price,
        image: format!("https://example.com/products/{id}.jpg"),
        amount,
    }
}

/// The two-line cart used throughout the tests: `A` 10.00 x2 and `B` 5.50 x1.
pub fn sample_cart() -> Vec<Product> {
    vec![sample_product(1, "A", 10.0, 2), sample_product(2, "B", 5.5, 1)]
}

/// Routes tracing output to the test harness. Safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
        )
        .with_test_writer()
        .try_init();
}
