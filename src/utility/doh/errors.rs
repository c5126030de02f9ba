// 3rd party crates
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DohError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("DoH endpoint answered with HTTP {0}")]
    Status(StatusCode),

    #[error("Failed to parse DoH response: {0}")]
    Parse(String),
}
