pub mod entities;
pub mod repositories;

pub use entities::feature::Feature;
pub use entities::guild_features::GuildFeatures;
