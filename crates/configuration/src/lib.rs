use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{DatabaseSettings, LoggingSettings, ServerSettings, Settings, StoreBackend};

/// The file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Prefix for environment overrides, e.g. `MARKS__SERVER__PORT=8080`.
pub const ENV_PREFIX: &str = "MARKS";

/// Loads the application settings and validates them.
///
/// Sources are layered, later ones winning:
/// 1. built-in defaults,
/// 2. the TOML file (`config.toml` unless `path` is given; only an explicit
///    path is required to exist),
/// 3. `MARKS__`-prefixed environment variables.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let settings = read_settings(path)?;
    settings.validate()?;
    Ok(settings)
}

/// Like `load_settings`, but leaves validation to the caller so command-line
/// overrides can be applied first.
pub fn read_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let settings = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize::<Settings>()?;
    Ok(settings)
}

/// Deserializes and validates whatever sources the builder was given.
#[cfg(test)]
pub(crate) fn settings_from_builder(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<Settings, ConfigError> {
    let settings = builder.build()?.try_deserialize::<Settings>()?;
    settings.validate()?;
    Ok(settings)
}
