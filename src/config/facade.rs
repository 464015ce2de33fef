//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::ExtractorConfig;
use crate::error::ExtractError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the user config file and environment.
    pub fn load() -> Result<ExtractorConfig, ExtractError> {
        Self::finish(MergeService::load(None)?)
    }

    /// Load configuration with `path` layered over the user config file.
    pub fn load_from_file(path: &Path) -> Result<ExtractorConfig, ExtractError> {
        if !path.is_file() {
            return Err(ExtractError::ConfigError(format!(
                "config file {} not found",
                path.display()
            )));
        }
        Self::finish(MergeService::load(Some(path))?)
    }

    fn finish(config: ExtractorConfig) -> Result<ExtractorConfig, ExtractError> {
        config.layout.validate().map_err(ExtractError::ConfigError)?;
        Ok(config)
    }
}
