use std::sync::Arc;

use serenity::all::{
    Command, CommandInteraction, CommandType, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseMessage, ResolvedTarget,
};
use serenity::prelude::*;
use tracing::{error, info};

use crate::application::commands::utils::joined_guilds;
use crate::domain::repositories::FeatureConfigRepository;
use crate::domain::GuildFeatures;

pub const PIN_COMMAND_NAME: &str = "Pin Message";
pub const UNPIN_COMMAND_NAME: &str = "Unpin Message";

/// Names of the context-menu commands a record enables.
pub fn enabled_context_commands(record: &GuildFeatures) -> Vec<&'static str> {
    let mut names = Vec::new();
    if record.context_pin {
        names.push(PIN_COMMAND_NAME);
    }
    if record.context_unpin {
        names.push(UNPIN_COMMAND_NAME);
    }
    names
}

/// Registers the context-menu commands with the platform, overwriting the
/// previous global set. The commands are global, so a single record decides
/// which ones exist: the first guild in enumeration order, or the defaults
/// when the bot is in no guild.
pub async fn register_context_commands(
    ctx: &Context,
    features: &Arc<dyn FeatureConfigRepository>,
) {
    let guilds = joined_guilds(ctx);
    let record = guilds
        .first()
        .map(|guild| features.get(&guild.id))
        .unwrap_or_default();

    let commands: Vec<CreateCommand> = enabled_context_commands(&record)
        .into_iter()
        .map(|name| CreateCommand::new(name).kind(CommandType::Message))
        .collect();

    match Command::set_global_commands(&ctx.http, commands).await {
        Ok(_) => info!("Context menu commands registered"),
        Err(err) => error!("Failed to register context commands: {}", err),
    }
}

pub async fn run_pin_message(ctx: &Context, command: &CommandInteraction) {
    let Some(ResolvedTarget::Message(message)) = command.data.target() else {
        return;
    };

    let content = match message.pin(&ctx.http).await {
        Ok(()) => "📌 Message pinned!",
        Err(err) => {
            error!("Error pinning message {}: {}", message.id, err);
            "❌ Could not pin message."
        }
    };

    respond_ephemeral(ctx, command, content).await;
}

pub async fn run_unpin_message(ctx: &Context, command: &CommandInteraction) {
    let Some(ResolvedTarget::Message(message)) = command.data.target() else {
        return;
    };

    let content = match message.unpin(&ctx.http).await {
        Ok(()) => "📌 Message unpinned!",
        Err(err) => {
            error!("Error unpinning message {}: {}", message.id, err);
            "❌ Could not unpin message."
        }
    };

    respond_ephemeral(ctx, command, content).await;
}

async fn respond_ephemeral(ctx: &Context, command: &CommandInteraction, content: &str) {
    let builder = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::default()
            .content(content)
            .ephemeral(true),
    );

    if let Err(err) = command.create_response(&ctx.http, builder).await {
        error!("Error responding to {}: {:?}", command.data.name, err);
    }
}
