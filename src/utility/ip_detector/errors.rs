// 3rd party crates
use thiserror::Error;

// Current module imports
use super::types::IpVersion;

#[derive(Debug, Error)]
pub enum IpDetectionError {
    #[error("TXT lookup via {nameserver} failed: {message}")]
    LookupFailed { nameserver: String, message: String },

    #[error("Network error from {service}: {error}")]
    NetworkError {
        service: String,
        error: reqwest::Error,
    },

    #[error("Invalid {version} address from {service}: '{response}'")]
    InvalidAddress {
        service: String,
        version: IpVersion,
        response: String,
    },

    #[error("HTTP client error: {0}")]
    HttpClientBuild(#[from] reqwest::Error),

    #[error("No {0} detection service returned a usable address")]
    NoServicesAvailable(IpVersion),
}
