use serenity::prelude::Context;

use crate::application::services::status_reporter::GuildSummary;

/// Joined guilds from the gateway cache, sorted by id so enumeration order
/// is stable across calls (the cache has no fixed iteration order).
pub fn joined_guilds(ctx: &Context) -> Vec<GuildSummary> {
    let mut guild_ids = ctx.cache.guilds();
    guild_ids.sort();

    guild_ids
        .into_iter()
        .map(|guild_id| GuildSummary {
            id: guild_id.to_string(),
            name: guild_id
                .name(&ctx.cache)
                .unwrap_or_else(|| "unknown".to_string()),
        })
        .collect()
}
