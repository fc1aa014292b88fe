use crate::domain::entities::guild_features::GuildFeatures;

/// Store of per-guild feature records, keyed by guild id.
///
/// Callers batch persistence: mutate with `ensure`/`set`, then call `save`
/// once before the event handler returns.
pub trait FeatureConfigRepository: Send + Sync {
    /// Stored record for the guild, or the default when absent. Never inserts.
    fn get(&self, guild_id: &str) -> GuildFeatures;

    /// Stored record for the guild, inserting the default first when absent.
    fn ensure(&self, guild_id: &str) -> GuildFeatures;

    /// Replaces the record for the guild.
    fn set(&self, guild_id: &str, features: GuildFeatures);

    fn contains(&self, guild_id: &str) -> bool;

    /// Writes the full map to disk. Failure is logged; the in-memory state
    /// stays authoritative until the next successful save.
    fn save(&self);
}
