use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use tracing::{error, warn};

use crate::domain::entities::guild_features::GuildFeatures;
use crate::domain::repositories::feature_config_repository::FeatureConfigRepository;

/// File-backed implementation of the feature store. The backing file is a
/// single JSON object mapping guild id strings to their feature records.
pub struct JsonFeatureConfigRepository {
    file_path: PathBuf,
    data: RwLock<HashMap<String, GuildFeatures>>,
}

impl JsonFeatureConfigRepository {
    /// Loads the store from `file_path`. A missing file yields an empty
    /// store; an unreadable or corrupt one is logged and also yields an
    /// empty store rather than failing startup.
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        let file_path = file_path.into();
        let data = Self::load_data(&file_path).unwrap_or_else(|err| {
            warn!("Error reading config file {}: {}", file_path.display(), err);
            HashMap::new()
        });

        Self {
            file_path,
            data: RwLock::new(data),
        }
    }

    fn load_data(
        file_path: &PathBuf,
    ) -> Result<HashMap<String, GuildFeatures>, Box<dyn std::error::Error>> {
        if !file_path.exists() {
            return Ok(HashMap::new());
        }

        let content = fs::read_to_string(file_path)?;
        let data: HashMap<String, GuildFeatures> = serde_json::from_str(&content)?;
        Ok(data)
    }

    fn write_snapshot(&self, data: HashMap<String, GuildFeatures>) {
        match serde_json::to_string_pretty(&data) {
            Ok(json) => {
                // Create dir if don't exists
                if let Some(parent) = self.file_path.parent() {
                    if let Err(e) = fs::create_dir_all(parent) {
                        error!("Failed to create directory: {}", e);
                        return;
                    }
                }

                if let Err(e) = fs::write(&self.file_path, json) {
                    error!("Error saving config file: {}", e);
                }
            }
            Err(e) => {
                error!("Failed to serialize config: {}", e);
            }
        }
    }
}

impl FeatureConfigRepository for JsonFeatureConfigRepository {
    fn get(&self, guild_id: &str) -> GuildFeatures {
        let Ok(data) = self.data.read() else {
            return GuildFeatures::default();
        };
        data.get(guild_id).cloned().unwrap_or_default()
    }

    fn ensure(&self, guild_id: &str) -> GuildFeatures {
        let Ok(mut data) = self.data.write() else {
            return GuildFeatures::default();
        };
        data.entry(guild_id.to_string()).or_default().clone()
    }

    fn set(&self, guild_id: &str, features: GuildFeatures) {
        if let Ok(mut data) = self.data.write() {
            data.insert(guild_id.to_string(), features);
        }
    }

    fn contains(&self, guild_id: &str) -> bool {
        self.data
            .read()
            .map(|data| data.contains_key(guild_id))
            .unwrap_or(false)
    }

    fn save(&self) {
        let snapshot = {
            if let Ok(data) = self.data.read() {
                data.clone()
            } else {
                return;
            }
        };

        self.write_snapshot(snapshot);
    }
}

impl std::fmt::Debug for JsonFeatureConfigRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFeatureConfigRepository")
            .field("file_path", &self.file_path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::feature::Feature;

    fn store_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("guildConfig.json")
    }

    #[test]
    fn get_returns_the_default_without_inserting() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFeatureConfigRepository::new(store_path(&dir));

        assert_eq!(repo.get("123"), GuildFeatures::default());
        assert!(!repo.contains("123"));
    }

    #[test]
    fn ensure_inserts_the_default() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFeatureConfigRepository::new(store_path(&dir));

        assert_eq!(repo.ensure("123"), GuildFeatures::default());
        assert!(repo.contains("123"));
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);

        let repo = JsonFeatureConfigRepository::new(&path);
        let mut record = repo.ensure("123456789012345678");
        record.set_enabled(Feature::ContextPin, false);
        repo.set("123456789012345678", record.clone());
        repo.ensure("987654321098765432");
        repo.save();

        let reloaded = JsonFeatureConfigRepository::new(&path);
        assert_eq!(reloaded.get("123456789012345678"), record);
        assert_eq!(reloaded.get("987654321098765432"), GuildFeatures::default());
        assert!(reloaded.contains("987654321098765432"));
    }

    #[test]
    fn corrupt_file_yields_an_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);
        fs::write(&path, "{ not json").unwrap();

        let repo = JsonFeatureConfigRepository::new(&path);
        assert!(!repo.contains("123"));
        assert_eq!(repo.get("123"), GuildFeatures::default());
    }
}
