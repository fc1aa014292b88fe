pub mod json_feature_config_repository;

pub use json_feature_config_repository::JsonFeatureConfigRepository;
