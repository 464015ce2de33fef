//! Environment variable source: SIMFASTA_* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Environment source with the SIMFASTA prefix and __ as separator for nested keys,
/// e.g. `SIMFASTA__CONVERTER__PROGRAM`.
pub fn source() -> Environment {
    Environment::with_prefix("SIMFASTA")
        .separator("__")
        .try_parsing(true)
}

/// Add environment variable overlay to builder.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(builder.add_source(source()))
}
