// 3rd party crates
use thiserror::Error;

// Project imports
use crate::models::RecordType;

/// Errors raised while talking to a provider's management API.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("API token is empty")]
    MissingApiToken,

    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),

    #[error("HTTP client error: {0}")]
    HttpClientBuild(#[from] reqwest::Error),

    #[error("Failed to fetch {what} for '{domain}': {message}")]
    FetchFailed {
        what: &'static str,
        domain: String,
        message: String,
    },

    #[error("Zone '{0}' is not among the active zones of this account")]
    ZoneNotFound(String),

    #[error("Failed to {action} {record_type} record '{name}': {message}")]
    WriteFailed {
        action: &'static str,
        record_type: RecordType,
        name: String,
        message: String,
    },

    #[error("{record_type} records are not supported by {provider}")]
    Unsupported {
        provider: &'static str,
        record_type: RecordType,
    },
}
