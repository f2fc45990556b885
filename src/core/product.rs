//! Cart line item types shared by the store, the view and the bot layer.

use serde::Deserialize;

/// Identifier of a product in the cart.
pub type ProductId = i64;

/// A product sitting in the cart together with its quantity.
///
/// Products are owned by the cart store. Anything holding a `Product` outside
/// the store holds a snapshot, never a live handle.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    /// Unique id, also used as the render key of the line item
    pub id: ProductId,
    /// Display name
    pub title: String,
    /// Unit price, non-negative
    pub price: f64,
    /// URL of the product picture
    pub image: String,
    /// Quantity in the cart, always at least 1 while the item is present
    pub amount: u32,
}

impl Product {
    /// Price of the whole line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.amount)
    }
}

/// Request to change the quantity of a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateProductAmount {
    /// Line item to change
    pub product_id: ProductId,
    /// New quantity
    pub amount: u32,
}
