//! Cart state collaborator.
//!
//! [`CartStore`] is the only capability the cart view depends on. The bot runs
//! on [`InMemoryCart`], an insertion-ordered list shared behind a mutex and
//! seeded from `config.toml`.

use crate::{
    core::product::{Product, ProductId, UpdateProductAmount},
    errors::{Error, Result},
};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

/// Owner of the cart contents.
///
/// Requests are fire-and-forget: implementations decide how to validate them
/// and surface failures through their own channels.
pub trait CartStore {
    /// Current cart contents in insertion order.
    fn cart(&self) -> Vec<Product>;

    /// Removes the line item with this id, if present.
    fn remove_product(&self, product_id: ProductId);

    /// Sets the quantity of a line item.
    fn update_product_amount(&self, request: UpdateProductAmount);
}

/// Process-local cart.
#[derive(Debug, Default)]
pub struct InMemoryCart {
    items: Mutex<Vec<Product>>,
}

impl InMemoryCart {
    /// Creates an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from seed products, validating each one.
    ///
    /// Products sharing an id are merged by adding their amounts.
    ///
    /// # Errors
    /// Returns [`Error::InvalidProduct`] if a price is negative or not finite,
    /// or if an amount is zero.
    pub fn from_products<I>(products: I) -> Result<Self>
    where
        I: IntoIterator<Item = Product>,
    {
        let cart = Self::new();
        for product in products {
            validate_product(&product)?;
            cart.add_product(product);
        }
        info!("Cart seeded with {} line items", cart.lock().len());
        Ok(cart)
    }

    /// Adds a product to the cart.
    ///
    /// A product already in the cart gets `product.amount` more units; a new
    /// one is appended at the end.
    pub fn add_product(&self, product: Product) {
        let mut items = self.lock();
        if let Some(existing) = items.iter_mut().find(|p| p.id == product.id) {
            existing.amount = existing.amount.saturating_add(product.amount);
            debug!(
                "Product {} already in cart, amount now {}",
                existing.id, existing.amount
            );
        } else {
            debug!("Adding product {} ({}) to cart", product.id, product.title);
            items.push(product);
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Product>> {
        // The list is never left half-written, so a poisoned lock is still usable
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CartStore for InMemoryCart {
    fn cart(&self) -> Vec<Product> {
        self.lock().clone()
    }

    fn remove_product(&self, product_id: ProductId) {
        let mut items = self.lock();
        let before = items.len();
        items.retain(|p| p.id != product_id);

        if items.len() == before {
            warn!("Ignoring removal of product {product_id}: not in cart");
        } else {
            debug!("Removed product {product_id} from cart");
        }
    }

    fn update_product_amount(&self, request: UpdateProductAmount) {
        if request.amount < 1 {
            warn!(
                "Ignoring amount update for product {}: amount must be at least 1",
                request.product_id
            );
            return;
        }

        let mut items = self.lock();
        match items.iter_mut().find(|p| p.id == request.product_id) {
            Some(product) => {
                debug!(
                    "Product {} amount {} -> {}",
                    product.id, product.amount, request.amount
                );
                product.amount = request.amount;
            }
            None => warn!(
                "Ignoring amount update for product {}: not in cart",
                request.product_id
            ),
        }
    }
}

fn validate_product(product: &Product) -> Result<()> {
    if !product.price.is_finite() || product.price < 0.0 {
        return Err(Error::InvalidProduct {
            id: product.id,
            reason: format!("price must be a non-negative number, got {}", product.price),
        });
    }
    if product.amount < 1 {
        return Err(Error::InvalidProduct {
            id: product.id,
            reason: "amount must be at least 1".to_string(),
        });
    }
    Ok(())
}
