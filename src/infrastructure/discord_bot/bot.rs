use std::sync::Arc;

use anyhow::Context as _;
use serenity::model::application::{CommandType, Interaction};
use serenity::model::channel::{Message, Reaction};
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use tracing::info;

use crate::application::commands::{context_menu, dm_commands, reaction_pins};
use crate::application::services::ToggleService;
use crate::domain::repositories::FeatureConfigRepository;
use crate::infrastructure::repositories::JsonFeatureConfigRepository;

// File used for persistence
const CONFIG_FILE: &str = "guildConfig.json";

pub struct PinHandler {
    features: Arc<dyn FeatureConfigRepository>,
    toggle: ToggleService,
}

#[serenity::async_trait]
impl EventHandler for PinHandler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("Logged in as {}", ready.user.name);

        // Seed defaults for guilds seen for the first time
        let mut seeded = false;
        for guild_status in ready.guilds {
            let guild_id = guild_status.id.to_string();
            if !self.features.contains(&guild_id) {
                self.features.ensure(&guild_id);
                info!("Initialized default config for guild {}", guild_id);
                seeded = true;
            }
        }
        if seeded {
            self.features.save();
        }

        context_menu::register_context_commands(&ctx, &self.features).await;
    }

    async fn message(&self, ctx: Context, msg: Message) {
        // Admin commands arrive over DM only, and never from bots
        if msg.guild_id.is_some() || msg.author.bot || !msg.content.starts_with('!') {
            return;
        }

        dm_commands::run_dm_command(&ctx, &msg, &self.toggle, &self.features).await;
    }

    async fn reaction_add(&self, ctx: Context, reaction: Reaction) {
        reaction_pins::handle_reaction_add(&ctx, &reaction, &self.features).await;
    }

    async fn reaction_remove(&self, ctx: Context, reaction: Reaction) {
        reaction_pins::handle_reaction_remove(&ctx, &reaction, &self.features).await;
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };
        if command.data.kind != CommandType::Message {
            return;
        }
        let Some(guild_id) = command.guild_id else {
            return;
        };

        let record = self.features.get(&guild_id.to_string());
        match command.data.name.as_str() {
            context_menu::PIN_COMMAND_NAME if record.context_pin => {
                context_menu::run_pin_message(&ctx, &command).await;
            }
            context_menu::UNPIN_COMMAND_NAME if record.context_unpin => {
                context_menu::run_unpin_message(&ctx, &command).await;
            }
            _ => {}
        }
    }
}

pub async fn run_bot() -> anyhow::Result<()> {
    let token =
        std::env::var("DISCORD_TOKEN").context("Expected DISCORD_TOKEN in environment")?;

    // intents = event types the bot will receive
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let features: Arc<dyn FeatureConfigRepository> =
        Arc::new(JsonFeatureConfigRepository::new(CONFIG_FILE));
    let handler = PinHandler {
        toggle: ToggleService::new(features.clone()),
        features,
    };

    let mut client = Client::builder(&token, intents)
        .event_handler(handler)
        .await?;

    client.start().await?;
    Ok(())
}
