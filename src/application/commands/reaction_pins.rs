use std::sync::Arc;

use serenity::model::channel::{Reaction, ReactionType};
use serenity::prelude::*;
use tracing::{error, info};

use crate::domain::repositories::FeatureConfigRepository;

const PIN_EMOJI: &str = "📌";

pub async fn handle_reaction_add(
    ctx: &Context,
    reaction: &Reaction,
    features: &Arc<dyn FeatureConfigRepository>,
) {
    if !reaction.emoji.unicode_eq(PIN_EMOJI) {
        return;
    }

    // Reactions from bots never trigger pinning
    match reaction.user(&ctx.http).await {
        Ok(user) if user.bot => return,
        Ok(_) => {}
        Err(err) => {
            error!("Error fetching reacting user: {}", err);
            return;
        }
    }

    let Some(guild_id) = reaction.guild_id else {
        return;
    };
    if !features.get(&guild_id.to_string()).reaction_pin {
        return;
    }

    let message = match reaction.message(&ctx.http).await {
        Ok(message) => message,
        Err(err) => {
            error!("Error fetching reacted message: {}", err);
            return;
        }
    };
    if message.pinned {
        return;
    }

    match message.pin(&ctx.http).await {
        Ok(()) => info!(
            "📌 Pinned message {} in channel {} (guild: {})",
            message.id, message.channel_id, guild_id
        ),
        Err(err) => error!("Error pinning message: {}", err),
    }
}

pub async fn handle_reaction_remove(
    ctx: &Context,
    reaction: &Reaction,
    features: &Arc<dyn FeatureConfigRepository>,
) {
    if !reaction.emoji.unicode_eq(PIN_EMOJI) {
        return;
    }

    let remover = match reaction.user(&ctx.http).await {
        Ok(user) if user.bot => return,
        Ok(user) => user.id,
        Err(err) => {
            error!("Error fetching reacting user: {}", err);
            return;
        }
    };

    let Some(guild_id) = reaction.guild_id else {
        return;
    };
    if !features.get(&guild_id.to_string()).reaction_unpin {
        return;
    }

    let message = match reaction.message(&ctx.http).await {
        Ok(message) => message,
        Err(err) => {
            error!("Error fetching reacted message: {}", err);
            return;
        }
    };

    // The fetched reaction list may still contain the remover, so they are
    // excluded explicitly before deciding the pin is orphaned
    let remaining = match message
        .reaction_users(
            &ctx.http,
            ReactionType::Unicode(PIN_EMOJI.to_string()),
            None,
            None,
        )
        .await
    {
        Ok(users) => users.into_iter().filter(|user| user.id != remover).count(),
        Err(err) => {
            error!("Error fetching remaining reactions: {}", err);
            return;
        }
    };

    if remaining == 0 && message.pinned {
        match message.unpin(&ctx.http).await {
            Ok(()) => info!(
                "📌 Unpinned message {} in channel {} (guild: {})",
                message.id, message.channel_id, guild_id
            ),
            Err(err) => error!("Error unpinning message: {}", err),
        }
    }
}
