use crate::domain::entities::feature::ALL_FEATURES;
use crate::domain::repositories::FeatureConfigRepository;

/// Guild identity as shown in DM replies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildSummary {
    pub id: String,
    pub name: String,
}

/// Renders the per-guild feature status, one section per guild in input
/// order, the four features always in declaration order. Reads the store
/// through `get`, so unknown guilds show the defaults without being
/// inserted.
pub fn render_status(guilds: &[GuildSummary], features: &dyn FeatureConfigRepository) -> String {
    let mut report = String::from("📋 **Current Bot Status (per guild):**\n");
    for guild in guilds {
        let record = features.get(&guild.id);
        report.push_str(&format!("\n**{}** ({})\n", guild.name, guild.id));
        for feature in ALL_FEATURES {
            let marker = if record.is_enabled(feature) {
                "✅ enabled"
            } else {
                "❌ disabled"
            };
            report.push_str(&format!("- {}: {}\n", feature.canonical_key(), marker));
        }
    }
    report
}

pub fn render_guild_list(guilds: &[GuildSummary]) -> String {
    let info = guilds
        .iter()
        .map(|guild| format!("- {} ({})", guild.name, guild.id))
        .collect::<Vec<_>>()
        .join("\n");
    format!("📋 Guilds I'm in:\n{}", info)
}
