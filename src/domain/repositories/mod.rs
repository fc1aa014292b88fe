pub mod feature_config_repository;

pub use feature_config_repository::FeatureConfigRepository;
