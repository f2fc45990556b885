//! Display model of the cart screen.
//!
//! Everything here is a pure function of a cart snapshot: rows and totals are
//! recomputed on every render and never stored.

use crate::core::{
    format::PriceFormatter,
    product::{Product, ProductId},
};

/// A line item ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    /// Source line item, unchanged
    pub product: Product,
    /// Formatted unit price
    pub price_formatted: String,
    /// Formatted `price * amount`
    pub sub_total: String,
}

impl DisplayRow {
    /// Render key of the row.
    #[must_use]
    pub const fn key(&self) -> ProductId {
        self.product.id
    }

    /// Whether the decrement control is enabled for this row.
    #[must_use]
    pub const fn can_decrement(&self) -> bool {
        can_decrement(&self.product)
    }
}

/// Rows and total computed from the same cart snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    /// One row per line item, in cart order
    pub rows: Vec<DisplayRow>,
    /// Formatted grand total
    pub total: String,
}

impl CartSummary {
    /// Builds the full display model of `cart`.
    #[must_use]
    pub fn from_cart<F: PriceFormatter + ?Sized>(cart: &[Product], formatter: &F) -> Self {
        Self {
            rows: derive_display_rows(cart, formatter),
            total: format_total(cart, formatter),
        }
    }

    /// True when the cart has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Maps each line item to a [`DisplayRow`], keeping the cart order.
#[must_use]
pub fn derive_display_rows<F: PriceFormatter + ?Sized>(
    cart: &[Product],
    formatter: &F,
) -> Vec<DisplayRow> {
    cart.iter()
        .map(|product| DisplayRow {
            price_formatted: formatter.format_price(product.price),
            sub_total: formatter.format_price(product.line_total()),
            product: product.clone(),
        })
        .collect()
}

/// Sum of `price * amount` over the cart, folded left to right.
#[must_use]
pub fn cart_total(cart: &[Product]) -> f64 {
    cart.iter()
        .fold(0.0, |sum_total, product| sum_total + product.line_total())
}

/// Formatted [`cart_total`]. An empty cart formats zero.
#[must_use]
pub fn format_total<F: PriceFormatter + ?Sized>(cart: &[Product], formatter: &F) -> String {
    formatter.format_price(cart_total(cart))
}

/// Decrementing is only offered while the line holds more than one unit.
#[must_use]
pub const fn can_decrement(product: &Product) -> bool {
    product.amount > 1
}
