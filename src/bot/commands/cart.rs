//! Cart Discord command - `cart`.
//!
//! Renders the cart as an interactive message and keeps it up to date while
//! the invoking user clicks its buttons.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{
            BotData,
            handlers::buttons::{self, ClickOutcome},
            render,
        },
        core::view::CartView,
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;
    use tracing::{debug, error, info};

    /// Shows the shopping cart with quantity and removal buttons.
    ///
    /// The message stays interactive for the configured session timeout after
    /// the last click; after that its buttons are removed.
    #[poise::command(slash_command)]
    pub async fn cart(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let data = ctx.data();
        let view = CartView::new(data.cart.as_ref(), &data.currency);
        let invocation_id = ctx.id();
        let mut page = 0;

        let summary = view.render();
        debug!(
            "Rendering cart with {} line items for {}",
            summary.rows.len(),
            ctx.author().name
        );

        let handle = ctx
            .send(
                poise::CreateReply::default()
                    .embed(render::cart_embed(&summary, page))
                    .components(render::cart_components(&summary, invocation_id, page, true)),
            )
            .await?;

        let prefix = buttons::custom_id_prefix(invocation_id);
        loop {
            let prefix = prefix.clone();
            let Some(interaction) =
                serenity::ComponentInteractionCollector::new(ctx.serenity_context())
                    .author_id(ctx.author().id)
                    .channel_id(ctx.channel_id())
                    .timeout(data.session_timeout)
                    .filter(move |mci| mci.data.custom_id.starts_with(&prefix))
                    .await
            else {
                break;
            };

            let response =
                match buttons::handle_click(&view, &interaction.data.custom_id, invocation_id, page)
                {
                    ClickOutcome::Acknowledge => serenity::CreateInteractionResponse::Acknowledge,
                    ClickOutcome::Rerender { page: next } => {
                        let summary = view.render();
                        page = render::clamp_page(&summary, next);
                        serenity::CreateInteractionResponse::UpdateMessage(
                            serenity::CreateInteractionResponseMessage::new()
                                .embed(render::cart_embed(&summary, page))
                                .components(render::cart_components(
                                    &summary,
                                    invocation_id,
                                    page,
                                    true,
                                )),
                        )
                    }
                };

            // A failed answer must not skip the freeze below.
            if let Err(e) = interaction.create_response(ctx, response).await {
                error!("Failed to answer cart click {}: {}", interaction.data.custom_id, e);
            }
        }

        info!("Cart session {invocation_id} timed out, freezing message");
        let summary = view.render();
        handle
            .edit(
                ctx,
                poise::CreateReply::default()
                    .embed(render::cart_embed(&summary, page))
                    .components(render::cart_components(&summary, invocation_id, page, false)),
            )
            .await?;

        Ok(())
    }
}

pub use inner::*;
