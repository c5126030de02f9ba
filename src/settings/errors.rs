// 3rd party crates
use config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid log level: {0}. Must be one of: error, warn, info, debug, trace")]
    InvalidLogLevel(String),
    #[error("{0} must be greater than 0")]
    ZeroTimeout(&'static str),
    #[error("Invalid URL for {field}: '{value}' ({reason})")]
    InvalidUrl {
        field: &'static str,
        value: String,
        reason: String,
    },
    #[error("The legacy provider needs endpoints.legacy_api to be set")]
    MissingLegacyApi,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ConfigError),
    #[error("Configuration validation failed: {0}")]
    Validation(#[from] ValidationError),
}
