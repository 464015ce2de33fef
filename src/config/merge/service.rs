//! MergeService: orchestrates sources, applies precedence, deserializes to ExtractorConfig.

use crate::config::sources::{environment, user_file};
use crate::config::ExtractorConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File};
use std::path::Path;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Precedence: defaults (lowest) -> user file -> explicit file -> environment (highest).
    pub fn load(explicit: Option<&Path>) -> Result<ExtractorConfig, ConfigError> {
        let builder = builder_with_defaults()?;
        let builder = user_file::add_to_builder(builder)?;
        let builder = match explicit {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder,
        };
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }
}

/// Builder seeded with the serialized [`ExtractorConfig::default`].
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let defaults = Config::try_from(&ExtractorConfig::default())?;
    Ok(Config::builder().add_source(defaults))
}
