use std::sync::Arc;

use serenity::model::channel::Message;
use serenity::prelude::*;
use tracing::error;

use crate::application::commands::context_menu;
use crate::application::commands::utils::joined_guilds;
use crate::application::services::status_reporter;
use crate::application::services::toggle_service::{
    ToggleCommand, ToggleOutcome, ToggleScope, ToggleService,
};
use crate::domain::repositories::FeatureConfigRepository;
use crate::domain::Feature;

/// A parsed `!` command from a direct message.
#[derive(Debug, PartialEq, Eq)]
pub enum DmCommand<'a> {
    ListGuilds,
    Status,
    Toggle {
        command: ToggleCommand,
        raw_feature: &'a str,
        target: Option<&'a str>,
    },
    Unknown,
}

/// Parses the message content. `None` when it is not a `!` command at all.
pub fn parse_dm_command(content: &str) -> Option<DmCommand<'_>> {
    let body = content.strip_prefix('!')?;
    let mut args = body.split(' ');
    let cmd = args.next().unwrap_or("");
    let arg1 = args.next();
    let arg2 = args.next().filter(|arg| !arg.is_empty());

    let command = match cmd {
        "list" if arg1 == Some("guilds") => DmCommand::ListGuilds,
        "status" => DmCommand::Status,
        "enable" | "disable" => DmCommand::Toggle {
            command: if cmd == "enable" {
                ToggleCommand::Enable
            } else {
                ToggleCommand::Disable
            },
            raw_feature: arg1.unwrap_or(""),
            target: arg2,
        },
        _ => DmCommand::Unknown,
    };
    Some(command)
}

fn toggle_acknowledgement(outcome: &ToggleOutcome) -> String {
    let state = if outcome.enabled { "enabled" } else { "disabled" };
    let scope = match &outcome.scope {
        ToggleScope::AllGuilds => "all guilds".to_string(),
        ToggleScope::Guild(id) => format!("guild {}", id),
    };
    format!(
        "✅ {} has been {} for {}.",
        outcome.feature.canonical_key(),
        state,
        scope
    )
}

pub async fn run_dm_command(
    ctx: &Context,
    msg: &Message,
    toggle: &ToggleService,
    features: &Arc<dyn FeatureConfigRepository>,
) {
    let Some(command) = parse_dm_command(&msg.content) else {
        return;
    };

    let guilds = joined_guilds(ctx);
    let reply = match command {
        DmCommand::ListGuilds => status_reporter::render_guild_list(&guilds),
        DmCommand::Status => status_reporter::render_status(&guilds, features.as_ref()),
        DmCommand::Toggle {
            command,
            raw_feature,
            target,
        } => {
            let all_guild_ids: Vec<String> =
                guilds.iter().map(|guild| guild.id.clone()).collect();
            match toggle.apply(command, raw_feature, target, &all_guild_ids) {
                Ok(outcome) => {
                    // Context commands are registered globally, refresh them
                    // when their toggles change
                    if matches!(outcome.feature, Feature::ContextPin | Feature::ContextUnpin) {
                        context_menu::register_context_commands(ctx, features).await;
                    }
                    toggle_acknowledgement(&outcome)
                }
                Err(err) => format!("❌ {}", err),
            }
        }
        DmCommand::Unknown => {
            "❌ Invalid command. Use `!enable`, `!disable`, `!status`, or `!list guilds`."
                .to_string()
        }
    };

    if let Err(err) = msg.reply(&ctx.http, reply).await {
        error!("Error replying to DM command: {}", err);
    }
}
