/// The four toggleable pin features. Declaration order is the order every
/// status report lists them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    ReactionPin,
    ReactionUnpin,
    ContextPin,
    ContextUnpin,
}

pub const ALL_FEATURES: [Feature; 4] = [
    Feature::ReactionPin,
    Feature::ReactionUnpin,
    Feature::ContextPin,
    Feature::ContextUnpin,
];

impl Feature {
    /// The camel-style key used in the config file and in command replies.
    pub fn canonical_key(&self) -> &'static str {
        match self {
            Feature::ReactionPin => "reactionPin",
            Feature::ReactionUnpin => "reactionUnpin",
            Feature::ContextPin => "contextPin",
            Feature::ContextUnpin => "contextUnpin",
        }
    }

    pub fn from_canonical_key(key: &str) -> Option<Feature> {
        match key {
            "reactionPin" => Some(Feature::ReactionPin),
            "reactionUnpin" => Some(Feature::ReactionUnpin),
            "contextPin" => Some(Feature::ContextPin),
            "contextUnpin" => Some(Feature::ContextUnpin),
            _ => None,
        }
    }
}

/// Normalizes a free-text feature argument: hyphens stripped, lowercased,
/// then mapped onto the canonical key when recognized. Anything else passes
/// through unchanged and is rejected by the caller.
pub fn normalize_feature(raw: &str) -> String {
    let folded = raw.replace('-', "").to_lowercase();
    match folded.as_str() {
        "reactionpin" => "reactionPin".to_string(),
        "reactionunpin" => "reactionUnpin".to_string(),
        "contextpin" => "contextPin".to_string(),
        "contextunpin" => "contextUnpin".to_string(),
        _ => folded,
    }
}
