use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file or environment could not be read or did not match `Settings`.
    #[error("Failed to load settings: {0}")]
    LoadError(#[from] config::ConfigError),

    /// The settings parsed but cannot be used to start the application.
    #[error("Invalid settings: {0}")]
    ValidationError(String),
}
