//! Discord rendering of the cart display model.
//!
//! The embed lists the line items and the total; the components give each
//! line its quantity and removal buttons and end with the checkout row.
//! Discord allows five action rows per message, so line controls are paged:
//! [`LINES_PER_PAGE`] line rows per page, and the last row carries checkout
//! between the previous/next page buttons.

use crate::{
    bot::handlers::buttons::CartAction,
    core::cart::{CartSummary, DisplayRow},
};
use poise::serenity_prelude as serenity;

/// Line items that get a button row on one page. The fifth row holds checkout.
pub const LINES_PER_PAGE: usize = 4;

/// Discord's limit on fields per embed.
pub const MAX_EMBED_FIELDS: usize = 25;

/// Discord's limit on the characters of an embed field name.
pub const MAX_FIELD_NAME_CHARS: usize = 256;

/// Discord's limit on the characters of an embed field value.
pub const MAX_FIELD_VALUE_CHARS: usize = 1024;

/// Discord's limit on the characters of a whole embed.
pub const MAX_EMBED_CHARS: usize = 6000;

/// Discord's limit on button label length.
const MAX_LABEL_CHARS: usize = 80;

/// Room kept for the footer when packing fields.
const FOOTER_RESERVE_CHARS: usize = 200;

/// Label of the checkout button.
pub const CHECKOUT_LABEL: &str = "Finalizar pedido";

const CART_TITLE: &str = "🛒 Carrinho";
const EMPTY_CART_DESCRIPTION: &str = "Seu carrinho está vazio.";
const CART_COLOR: u32 = 0x0058_65F2;

/// Button state of one line item row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineControls {
    /// Custom id of the decrement button
    pub decrement_id: String,
    /// Whether the decrement button is greyed out
    pub decrement_disabled: bool,
    /// Custom id of the read-only quantity button
    pub quantity_id: String,
    /// Text of the read-only quantity button
    pub quantity_label: String,
    /// Custom id of the increment button
    pub increment_id: String,
    /// Custom id of the remove button
    pub remove_id: String,
}

impl LineControls {
    fn for_row(row: &DisplayRow, invocation_id: u64) -> Self {
        let id = row.key();
        let label = format!("{} × {}", row.product.title, row.product.amount);

        Self {
            decrement_id: CartAction::Decrement(id).custom_id(invocation_id),
            decrement_disabled: !row.can_decrement(),
            quantity_id: format!("{invocation_id}:qty:{id}"),
            quantity_label: truncate(&label, MAX_LABEL_CHARS),
            increment_id: CartAction::Increment(id).custom_id(invocation_id),
            remove_id: CartAction::Remove(id).custom_id(invocation_id),
        }
    }

    fn into_action_row(self) -> serenity::CreateActionRow {
        serenity::CreateActionRow::Buttons(vec![
            serenity::CreateButton::new(self.decrement_id)
                .label("−")
                .style(serenity::ButtonStyle::Secondary)
                .disabled(self.decrement_disabled),
            serenity::CreateButton::new(self.quantity_id)
                .label(self.quantity_label)
                .style(serenity::ButtonStyle::Secondary)
                .disabled(true),
            serenity::CreateButton::new(self.increment_id)
                .label("+")
                .style(serenity::ButtonStyle::Secondary),
            serenity::CreateButton::new(self.remove_id)
                .label("Remover")
                .style(serenity::ButtonStyle::Danger),
        ])
    }
}

/// State of the checkout row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterControls {
    /// Custom id of the checkout button
    pub checkout_id: String,
    /// Previous/next page buttons as `(custom_id, disabled)`, present only
    /// when the cart spans more than one page
    pub paging: Option<((String, bool), (String, bool))>,
}

impl FooterControls {
    fn new(summary: &CartSummary, invocation_id: u64, page: usize) -> Self {
        let pages = page_count(summary);
        let page = clamp_page(summary, page);

        let paging = (pages > 1).then(|| {
            (
                (
                    CartAction::Page(page.saturating_sub(1)).custom_id(invocation_id),
                    page == 0,
                ),
                (
                    CartAction::Page(page + 1).custom_id(invocation_id),
                    page + 1 >= pages,
                ),
            )
        });

        Self {
            checkout_id: CartAction::Checkout.custom_id(invocation_id),
            paging,
        }
    }

    fn into_action_row(self) -> serenity::CreateActionRow {
        let checkout = serenity::CreateButton::new(self.checkout_id)
            .label(CHECKOUT_LABEL)
            .style(serenity::ButtonStyle::Success);

        let buttons = match self.paging {
            Some(((previous_id, previous_disabled), (next_id, next_disabled))) => vec![
                serenity::CreateButton::new(previous_id)
                    .label("◀")
                    .style(serenity::ButtonStyle::Primary)
                    .disabled(previous_disabled),
                checkout,
                serenity::CreateButton::new(next_id)
                    .label("▶")
                    .style(serenity::ButtonStyle::Primary)
                    .disabled(next_disabled),
            ],
            None => vec![checkout],
        };
        serenity::CreateActionRow::Buttons(buttons)
    }
}

/// Number of control pages; an empty cart still has one.
#[must_use]
pub fn page_count(summary: &CartSummary) -> usize {
    summary.rows.len().div_ceil(LINES_PER_PAGE).max(1)
}

/// Brings `page` back in range after the cart shrank.
#[must_use]
pub fn clamp_page(summary: &CartSummary, page: usize) -> usize {
    page.min(page_count(summary) - 1)
}

/// Controls for the line items of `page`, in cart order.
#[must_use]
pub fn line_controls(summary: &CartSummary, invocation_id: u64, page: usize) -> Vec<LineControls> {
    summary
        .rows
        .iter()
        .skip(clamp_page(summary, page) * LINES_PER_PAGE)
        .take(LINES_PER_PAGE)
        .map(|row| LineControls::for_row(row, invocation_id))
        .collect()
}

/// Text of the embed field describing one line item.
#[must_use]
pub fn row_field_value(row: &DisplayRow) -> String {
    format!(
        "{}\nQTD: {}\nSUBTOTAL: **{}**\n[imagem]({})",
        row.price_formatted, row.product.amount, row.sub_total, row.product.image
    )
}

/// Embed fields that fit Discord's limits, plus how many rows were left out.
#[must_use]
pub fn embed_fields(summary: &CartSummary) -> (Vec<(String, String, bool)>, usize) {
    let mut budget = MAX_EMBED_CHARS
        - CART_TITLE.chars().count()
        - EMPTY_CART_DESCRIPTION.chars().count()
        - FOOTER_RESERVE_CHARS;

    let mut fields = Vec::new();
    for row in summary.rows.iter().take(MAX_EMBED_FIELDS) {
        let name = truncate(&row.product.title, MAX_FIELD_NAME_CHARS);
        let value = truncate(&row_field_value(row), MAX_FIELD_VALUE_CHARS);
        let size = name.chars().count() + value.chars().count();
        if size > budget {
            break;
        }
        budget -= size;
        fields.push((name, value, false));
    }

    let hidden = summary.rows.len() - fields.len();
    (fields, hidden)
}

/// Footer text: the total, hidden rows and the current page.
#[must_use]
pub fn footer_text(summary: &CartSummary, hidden: usize, page: usize) -> String {
    let mut footer = format!("TOTAL {}", summary.total);
    if hidden > 0 {
        footer.push_str(&format!(" (+{hidden} itens não exibidos)"));
    }
    let pages = page_count(summary);
    if pages > 1 {
        footer.push_str(&format!(
            " · Página {}/{pages}",
            clamp_page(summary, page) + 1
        ));
    }
    footer
}

/// Embed listing the cart.
#[must_use]
pub fn cart_embed(summary: &CartSummary, page: usize) -> serenity::CreateEmbed {
    let (fields, hidden) = embed_fields(summary);

    let mut embed = serenity::CreateEmbed::new()
        .title(CART_TITLE)
        .color(CART_COLOR)
        .fields(fields);

    if summary.is_empty() {
        embed = embed.description(EMPTY_CART_DESCRIPTION);
    }

    embed.footer(serenity::CreateEmbedFooter::new(footer_text(
        summary, hidden, page,
    )))
}

/// Button rows: line item controls of `page` followed by the checkout row.
///
/// With `active == false` no buttons are produced, which is how an expired
/// cart message is frozen.
#[must_use]
pub fn cart_components(
    summary: &CartSummary,
    invocation_id: u64,
    page: usize,
    active: bool,
) -> Vec<serenity::CreateActionRow> {
    if !active {
        return Vec::new();
    }

    let mut rows: Vec<serenity::CreateActionRow> = line_controls(summary, invocation_id, page)
        .into_iter()
        .map(LineControls::into_action_row)
        .collect();

    rows.push(FooterControls::new(summary, invocation_id, page).into_action_row());
    rows
}

fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(limit - 1).collect();
    truncated.push('…');
    truncated
}
