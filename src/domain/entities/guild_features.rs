use serde::{Deserialize, Serialize};

use super::feature::Feature;

/// Per-guild toggle record. A guild with no entry in the store behaves as
/// this record's default, with everything enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuildFeatures {
    pub reaction_pin: bool,
    pub reaction_unpin: bool,
    pub context_pin: bool,
    pub context_unpin: bool,
}

impl Default for GuildFeatures {
    fn default() -> Self {
        Self {
            reaction_pin: true,
            reaction_unpin: true,
            context_pin: true,
            context_unpin: true,
        }
    }
}

impl GuildFeatures {
    pub fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::ReactionPin => self.reaction_pin,
            Feature::ReactionUnpin => self.reaction_unpin,
            Feature::ContextPin => self.context_pin,
            Feature::ContextUnpin => self.context_unpin,
        }
    }

    pub fn set_enabled(&mut self, feature: Feature, enabled: bool) {
        match feature {
            Feature::ReactionPin => self.reaction_pin = enabled,
            Feature::ReactionUnpin => self.reaction_unpin = enabled,
            Feature::ContextPin => self.context_pin = enabled,
            Feature::ContextUnpin => self.context_unpin = enabled,
        }
    }
}
