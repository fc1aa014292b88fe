use std::sync::Arc;

use thiserror::Error;

use crate::domain::entities::feature::{normalize_feature, Feature};
use crate::domain::repositories::FeatureConfigRepository;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleCommand {
    Enable,
    Disable,
}

/// Which guilds a toggle applied to, for the acknowledgement reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleScope {
    AllGuilds,
    Guild(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub feature: Feature,
    pub enabled: bool,
    pub scope: ToggleScope,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToggleError {
    #[error("Please specify a feature (reaction-pin, reaction-unpin, context-pin, context-unpin).")]
    FeatureRequired,
    #[error("Invalid feature. Valid features: reaction-pin, reaction-unpin, context-pin, context-unpin.")]
    InvalidFeature(String),
    #[error("No matching guild found for \"{0}\".")]
    NoMatchingGuild(String),
}

/// Applies enable/disable commands to the feature store.
#[derive(Clone)]
pub struct ToggleService {
    features: Arc<dyn FeatureConfigRepository>,
}

impl ToggleService {
    pub fn new(features: Arc<dyn FeatureConfigRepository>) -> Self {
        Self { features }
    }

    /// Validates the command, resolves the affected guilds and updates the
    /// store, saving once after the last update. No mutation happens on any
    /// validation error.
    pub fn apply(
        &self,
        command: ToggleCommand,
        raw_feature: &str,
        target: Option<&str>,
        all_guild_ids: &[String],
    ) -> Result<ToggleOutcome, ToggleError> {
        if raw_feature.is_empty() {
            return Err(ToggleError::FeatureRequired);
        }

        let key = normalize_feature(raw_feature);
        let feature =
            Feature::from_canonical_key(&key).ok_or(ToggleError::InvalidFeature(key))?;

        let apply_to_all = matches!(target, None | Some("global"));
        let affected: Vec<&String> = if apply_to_all {
            all_guild_ids.iter().collect()
        } else {
            all_guild_ids.iter().filter(|id| Some(id.as_str()) == target).collect()
        };

        if affected.is_empty() {
            return Err(ToggleError::NoMatchingGuild(
                target.unwrap_or("global").to_string(),
            ));
        }

        let enabled = command == ToggleCommand::Enable;
        for guild_id in &affected {
            let mut record = self.features.ensure(guild_id);
            record.set_enabled(feature, enabled);
            self.features.set(guild_id, record);
        }
        self.features.save();

        let scope = if apply_to_all {
            ToggleScope::AllGuilds
        } else {
            ToggleScope::Guild(affected[0].clone())
        };

        Ok(ToggleOutcome {
            feature,
            enabled,
            scope,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repositories::JsonFeatureConfigRepository;

    fn service(dir: &tempfile::TempDir) -> (ToggleService, Arc<dyn FeatureConfigRepository>) {
        let repo: Arc<dyn FeatureConfigRepository> = Arc::new(
            JsonFeatureConfigRepository::new(dir.path().join("guildConfig.json")),
        );
        (ToggleService::new(repo.clone()), repo)
    }

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn global_toggle_touches_only_the_named_field_on_every_guild() {
        let dir = tempfile::tempdir().unwrap();
        let (service, repo) = service(&dir);

        // g1 has prior state that must survive the toggle untouched
        let mut seeded = repo.ensure("g1");
        seeded.set_enabled(Feature::ReactionPin, false);
        seeded.set_enabled(Feature::ContextUnpin, false);
        repo.set("g1", seeded);

        let outcome = service
            .apply(
                ToggleCommand::Enable,
                "context-unpin",
                Some("global"),
                &ids(&["g1", "g2"]),
            )
            .unwrap();

        assert_eq!(outcome.feature, Feature::ContextUnpin);
        assert!(outcome.enabled);
        assert_eq!(outcome.scope, ToggleScope::AllGuilds);

        let g1 = repo.get("g1");
        assert!(g1.context_unpin);
        assert!(!g1.reaction_pin);
        assert!(g1.reaction_unpin);
        assert!(g1.context_pin);

        let g2 = repo.get("g2");
        assert!(g2.context_unpin);
        assert!(repo.contains("g2"));
    }

    #[test]
    fn omitted_target_means_every_guild() {
        let dir = tempfile::tempdir().unwrap();
        let (service, repo) = service(&dir);

        let outcome = service
            .apply(ToggleCommand::Disable, "reactionPin", None, &ids(&["g1", "g2"]))
            .unwrap();

        assert_eq!(outcome.scope, ToggleScope::AllGuilds);
        assert!(!repo.get("g1").reaction_pin);
        assert!(!repo.get("g2").reaction_pin);
    }

    #[test]
    fn targeted_toggle_leaves_other_guilds_alone() {
        let dir = tempfile::tempdir().unwrap();
        let (service, repo) = service(&dir);

        let outcome = service
            .apply(
                ToggleCommand::Disable,
                "reaction-pin",
                Some("g2"),
                &ids(&["g1", "g2"]),
            )
            .unwrap();

        assert_eq!(outcome.scope, ToggleScope::Guild("g2".to_string()));
        assert!(!repo.get("g2").reaction_pin);
        assert!(!repo.contains("g1"));
    }

    #[test]
    fn unmatched_target_is_an_error_and_mutates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let (service, repo) = service(&dir);

        let err = service
            .apply(
                ToggleCommand::Enable,
                "reactionPin",
                Some("999"),
                &ids(&["g1", "g2"]),
            )
            .unwrap_err();

        assert_eq!(err, ToggleError::NoMatchingGuild("999".to_string()));
        assert!(!repo.contains("g1"));
        assert!(!repo.contains("g2"));
    }

    #[test]
    fn missing_feature_is_an_error_and_mutates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let (service, repo) = service(&dir);

        let err = service
            .apply(ToggleCommand::Disable, "", Some("global"), &ids(&["g1"]))
            .unwrap_err();

        assert_eq!(err, ToggleError::FeatureRequired);
        assert!(!repo.contains("g1"));
    }

    #[test]
    fn unknown_feature_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let (service, _repo) = service(&dir);

        let err = service
            .apply(ToggleCommand::Enable, "bogus", None, &ids(&["g1"]))
            .unwrap_err();

        assert_eq!(err, ToggleError::InvalidFeature("bogus".to_string()));
    }
}
