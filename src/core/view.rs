//! Cart view: reads the cart store, builds the display model and turns user
//! interactions into requests on the store.
//!
//! The view owns nothing. It borrows a [`CartStore`] and a [`PriceFormatter`]
//! for the duration of a render or an interaction. Apart from disabling the
//! decrement at one unit it validates nothing, and it never inspects what the
//! store does with a request.

use crate::core::{
    cart::{self, CartSummary},
    format::PriceFormatter,
    product::{Product, ProductId, UpdateProductAmount},
    store::CartStore,
};
use tracing::{debug, info};

/// The cart screen bound to its collaborators.
pub struct CartView<'a, S: ?Sized, F: ?Sized> {
    store: &'a S,
    formatter: &'a F,
}

impl<'a, S, F> CartView<'a, S, F>
where
    S: CartStore + ?Sized,
    F: PriceFormatter + ?Sized,
{
    /// Binds a view to a store and a formatter.
    #[must_use]
    pub const fn new(store: &'a S, formatter: &'a F) -> Self {
        Self { store, formatter }
    }

    /// Display model of the current cart.
    ///
    /// The store is read once, so rows and total describe the same snapshot.
    #[must_use]
    pub fn render(&self) -> CartSummary {
        CartSummary::from_cart(&self.store.cart(), self.formatter)
    }

    /// Current line item with this id, if any.
    #[must_use]
    pub fn find(&self, product_id: ProductId) -> Option<Product> {
        self.store.cart().into_iter().find(|p| p.id == product_id)
    }

    /// Asks the store for one more unit of `product`.
    ///
    /// No upper bound is applied here; stock limits belong to the store.
    pub fn increment(&self, product: &Product) {
        let request = UpdateProductAmount {
            product_id: product.id,
            amount: product.amount.saturating_add(1),
        };
        debug!(?request, "Increment requested");
        self.store.update_product_amount(request);
    }

    /// Asks the store for one unit less of `product`.
    ///
    /// The control is disabled at one unit, so a line at `amount <= 1` issues
    /// no request.
    pub fn decrement(&self, product: &Product) {
        if !cart::can_decrement(product) {
            debug!(
                "Decrement of product {} skipped at amount {}",
                product.id, product.amount
            );
            return;
        }

        let request = UpdateProductAmount {
            product_id: product.id,
            amount: product.amount - 1,
        };
        debug!(?request, "Decrement requested");
        self.store.update_product_amount(request);
    }

    /// Asks the store to drop the line item.
    pub fn remove(&self, product_id: ProductId) {
        debug!("Removal of product {product_id} requested");
        self.store.remove_product(product_id);
    }

    /// "Finalizar pedido". Nothing is wired behind it yet.
    pub fn checkout(&self) {
        info!("Checkout requested; no checkout handler is configured");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::format::CurrencyFormat;
    use crate::test_utils::{RecordingStore, StoreCall, sample_cart, sample_product};

    #[test]
    fn test_render_reads_store_snapshot() {
        let store = RecordingStore::with_cart(sample_cart());
        let usd = CurrencyFormat::usd();
        let view = CartView::new(&store, &usd);

        let summary = view.render();
        assert_eq!(summary.rows.len(), 2);
        assert_eq!(summary.total, "$25.50");
        assert!(store.calls().is_empty(), "rendering must not issue requests");
    }

    #[test]
    fn test_increment_requests_one_more() {
        let store = RecordingStore::default();
        let usd = CurrencyFormat::usd();
        let view = CartView::new(&store, &usd);

        view.increment(&sample_product(4, "D", 1.0, 2));

        assert_eq!(
            store.calls(),
            vec![StoreCall::Update(UpdateProductAmount {
                product_id: 4,
                amount: 3,
            })]
        );
    }

    #[test]
    fn test_decrement_requests_one_less() {
        let store = RecordingStore::default();
        let usd = CurrencyFormat::usd();
        let view = CartView::new(&store, &usd);

        view.decrement(&sample_product(4, "D", 1.0, 2));

        assert_eq!(
            store.calls(),
            vec![StoreCall::Update(UpdateProductAmount {
                product_id: 4,
                amount: 1,
            })]
        );
    }

    #[test]
    fn test_decrement_at_one_issues_nothing() {
        let store = RecordingStore::default();
        let usd = CurrencyFormat::usd();
        let view = CartView::new(&store, &usd);

        view.decrement(&sample_product(4, "D", 1.0, 1));

        assert!(store.calls().is_empty());
    }

    #[test]
    fn test_remove_issues_single_removal() {
        let store = RecordingStore::with_cart(sample_cart());
        let usd = CurrencyFormat::usd();
        let view = CartView::new(&store, &usd);

        view.remove(7);

        assert_eq!(store.calls(), vec![StoreCall::Remove(7)]);
    }

    #[test]
    fn test_checkout_is_a_no_op() {
        let store = RecordingStore::with_cart(sample_cart());
        let usd = CurrencyFormat::usd();
        let view = CartView::new(&store, &usd);

        view.checkout();

        assert!(store.calls().is_empty());
        assert_eq!(store.cart(), sample_cart());
    }

    #[test]
    fn test_find_looks_up_current_line() {
        let store = RecordingStore::with_cart(sample_cart());
        let usd = CurrencyFormat::usd();
        let view = CartView::new(&store, &usd);

        assert_eq!(view.find(2).map(|p| p.title), Some("B".to_string()));
        assert!(view.find(42).is_none());
    }

    #[test]
    fn test_view_over_in_memory_cart() -> crate::errors::Result<()> {
        use crate::core::store::InMemoryCart;

        let store = InMemoryCart::from_products(sample_cart())?;
        let brl = CurrencyFormat::brl();
        let view = CartView::new(&store, &brl);

        let first = view.render().rows[0].product.clone();
        view.increment(&first);
        assert_eq!(view.render().total, "R$ 35,50");

        let bumped = view.find(first.id).map_or(0, |p| p.amount);
        assert_eq!(bumped, 3);

        view.remove(first.id);
        let summary = view.render();
        assert_eq!(summary.rows.len(), 1);
        assert_eq!(summary.total, "R$ 5,50");
        Ok(())
    }
}
