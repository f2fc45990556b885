//! Cart button handling.
//!
//! Every button of a rendered cart carries a custom id of the form
//! `{invocation_id}:{action}`. The invocation id scopes the buttons to the
//! `/cart` call that produced them, so clicks on an older cart message are
//! never picked up by a newer collector.

use crate::core::{
    format::PriceFormatter, product::ProductId, store::CartStore, view::CartView,
};
use tracing::debug;

/// A click on one of the cart buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    /// One more unit of a line item
    Increment(ProductId),
    /// One less unit of a line item
    Decrement(ProductId),
    /// Drop a line item
    Remove(ProductId),
    /// Show another page of line controls
    Page(usize),
    /// "Finalizar pedido"
    Checkout,
}

impl CartAction {
    /// Custom id of the button triggering this action.
    #[must_use]
    pub fn custom_id(self, invocation_id: u64) -> String {
        match self {
            Self::Increment(id) => format!("{invocation_id}:inc:{id}"),
            Self::Decrement(id) => format!("{invocation_id}:dec:{id}"),
            Self::Remove(id) => format!("{invocation_id}:rm:{id}"),
            Self::Page(page) => format!("{invocation_id}:page:{page}"),
            Self::Checkout => format!("{invocation_id}:checkout"),
        }
    }

    /// Parses a button custom id.
    ///
    /// Returns `None` for ids belonging to another invocation and for buttons
    /// that carry no action.
    #[must_use]
    pub fn parse(custom_id: &str, invocation_id: u64) -> Option<Self> {
        let (owner, action) = custom_id.split_once(':')?;
        if owner.parse::<u64>().ok()? != invocation_id {
            return None;
        }

        if action == "checkout" {
            return Some(Self::Checkout);
        }

        let (kind, arg) = action.split_once(':')?;
        if kind == "page" {
            return arg.parse().ok().map(Self::Page);
        }

        let id: ProductId = arg.parse().ok()?;
        match kind {
            "inc" => Some(Self::Increment(id)),
            "dec" => Some(Self::Decrement(id)),
            "rm" => Some(Self::Remove(id)),
            _ => None,
        }
    }
}

/// How the cart message answers a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Acknowledge without touching the message
    Acknowledge,
    /// Redraw the message showing this page of line controls
    Rerender {
        /// Requested page, clamped by the renderer
        page: usize,
    },
}

/// Prefix shared by every custom id of one invocation.
#[must_use]
pub fn custom_id_prefix(invocation_id: u64) -> String {
    format!("{invocation_id}:")
}

/// Applies a click to the cart through the view.
///
/// Quantity buttons act on the line item as it is now, not as it was when the
/// message was rendered. A click on a line that has since left the cart is
/// dropped. Paging does not touch the cart.
pub fn dispatch<S, F>(view: &CartView<'_, S, F>, action: CartAction)
where
    S: CartStore + ?Sized,
    F: PriceFormatter + ?Sized,
{
    match action {
        CartAction::Increment(id) | CartAction::Decrement(id) => {
            let Some(product) = view.find(id) else {
                debug!("Ignoring {action:?}: product no longer in cart");
                return;
            };
            if matches!(action, CartAction::Increment(_)) {
                view.increment(&product);
            } else {
                view.decrement(&product);
            }
        }
        CartAction::Remove(id) => view.remove(id),
        CartAction::Checkout => view.checkout(),
        CartAction::Page(_) => {}
    }
}

/// Handles one click on the message currently showing `page`.
///
/// Cart changes keep the current page; paging switches to the requested one.
/// Checkout and unknown buttons leave the message as it is.
pub fn handle_click<S, F>(
    view: &CartView<'_, S, F>,
    custom_id: &str,
    invocation_id: u64,
    page: usize,
) -> ClickOutcome
where
    S: CartStore + ?Sized,
    F: PriceFormatter + ?Sized,
{
    let Some(action) = CartAction::parse(custom_id, invocation_id) else {
        debug!("Ignoring click on {custom_id}: no cart action");
        return ClickOutcome::Acknowledge;
    };

    dispatch(view, action);

    match action {
        CartAction::Checkout => ClickOutcome::Acknowledge,
        CartAction::Page(target) => ClickOutcome::Rerender { page: target },
        CartAction::Increment(_) | CartAction::Decrement(_) | CartAction::Remove(_) => {
            ClickOutcome::Rerender { page }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{format::CurrencyFormat, product::UpdateProductAmount};
    use crate::test_utils::{RecordingStore, StoreCall, sample_cart};

    #[test]
    fn test_custom_id_round_trip() {
        for action in [
            CartAction::Increment(7),
            CartAction::Decrement(7),
            CartAction::Remove(7),
            CartAction::Page(2),
            CartAction::Checkout,
        ] {
            let id = action.custom_id(42);
            assert!(id.starts_with(&custom_id_prefix(42)));
            assert_eq!(CartAction::parse(&id, 42), Some(action));
        }
    }

    #[test]
    fn test_parse_rejects_other_invocations_and_junk() {
        let foreign = CartAction::Remove(7).custom_id(1);
        assert_eq!(CartAction::parse(&foreign, 2), None);

        assert_eq!(CartAction::parse("42:qty:7", 42), None);
        assert_eq!(CartAction::parse("42:inc:seven", 42), None);
        assert_eq!(CartAction::parse("42:page:-1", 42), None);
        assert_eq!(CartAction::parse("42:inc", 42), None);
        assert_eq!(CartAction::parse("not-a-cart-button", 42), None);
        assert_eq!(CartAction::parse("", 42), None);
    }

    #[test]
    fn test_dispatch_increment_uses_current_amount() {
        let store = RecordingStore::with_cart(sample_cart());
        let usd = CurrencyFormat::usd();
        let view = CartView::new(&store, &usd);

        dispatch(&view, CartAction::Increment(1));

        assert_eq!(
            store.calls(),
            vec![StoreCall::Update(UpdateProductAmount {
                product_id: 1,
                amount: 3,
            })]
        );
    }

    #[test]
    fn test_dispatch_decrement() {
        let store = RecordingStore::with_cart(sample_cart());
        let usd = CurrencyFormat::usd();
        let view = CartView::new(&store, &usd);

        dispatch(&view, CartAction::Decrement(1));
        // Product 2 sits at one unit
        dispatch(&view, CartAction::Decrement(2));

        assert_eq!(
            store.calls(),
            vec![StoreCall::Update(UpdateProductAmount {
                product_id: 1,
                amount: 1,
            })]
        );
    }

    #[test]
    fn test_dispatch_remove_only_removes() {
        let store = RecordingStore::with_cart(sample_cart());
        let usd = CurrencyFormat::usd();
        let view = CartView::new(&store, &usd);

        dispatch(&view, CartAction::Remove(7));

        assert_eq!(store.calls(), vec![StoreCall::Remove(7)]);
    }

    #[test]
    fn test_dispatch_ignores_stale_lines_paging_and_checkout() {
        let store = RecordingStore::with_cart(sample_cart());
        let usd = CurrencyFormat::usd();
        let view = CartView::new(&store, &usd);

        dispatch(&view, CartAction::Increment(99));
        dispatch(&view, CartAction::Decrement(99));
        dispatch(&view, CartAction::Page(1));
        dispatch(&view, CartAction::Checkout);

        assert!(store.calls().is_empty());
    }

    #[test]
    fn test_handle_click_outcomes() {
        let store = RecordingStore::with_cart(sample_cart());
        let usd = CurrencyFormat::usd();
        let view = CartView::new(&store, &usd);

        assert_eq!(
            handle_click(&view, "5:rm:2", 5, 1),
            ClickOutcome::Rerender { page: 1 }
        );
        assert_eq!(
            handle_click(&view, "5:page:3", 5, 1),
            ClickOutcome::Rerender { page: 3 }
        );
        assert_eq!(
            handle_click(&view, "5:checkout", 5, 1),
            ClickOutcome::Acknowledge
        );
        assert_eq!(
            handle_click(&view, "5:qty:2", 5, 1),
            ClickOutcome::Acknowledge
        );
        assert_eq!(
            handle_click(&view, "6:rm:2", 5, 1),
            ClickOutcome::Acknowledge
        );

        assert_eq!(store.calls(), vec![StoreCall::Remove(2)]);
    }
}
