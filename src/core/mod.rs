//! Core cart logic - framework-agnostic display model, formatting, store and view.

/// Display rows and totals derived from a cart snapshot
pub mod cart;
/// Currency formatting
pub mod format;
/// Line item types
pub mod product;
/// Cart state collaborator and its in-memory implementation
pub mod store;
/// The cart view: render and forward user intents
pub mod view;

pub use cart::{CartSummary, DisplayRow};
pub use format::{CurrencyFormat, PriceFormatter};
pub use product::{Product, ProductId, UpdateProductAmount};
pub use store::{CartStore, InMemoryCart};
pub use view::CartView;
