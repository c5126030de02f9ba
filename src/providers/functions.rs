// Standard library
use std::time::Duration;

// 3rd party crates
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::Client;
use tracing::debug;

// Current module imports
use super::errors::ProviderError;

/// Creates a reqwest client that sends `api_token` as a bearer credential
/// on every request.
pub fn create_reqwest_client(
    provider: &str,
    api_token: &str,
    timeout: Duration,
) -> Result<Client, ProviderError> {
    if api_token.trim().is_empty() {
        debug!(provider = %provider, "API token is not set");
        return Err(ProviderError::MissingApiToken);
    }

    // Create headers.
    let mut headers: HeaderMap = HeaderMap::new();

    // Mark security-sensitive headers with `set_sensitive`.
    let bearer_token: String = format!("Bearer {}", api_token);
    let mut auth_value: HeaderValue = HeaderValue::from_str(&bearer_token).map_err(|e| {
        debug!(provider = %provider, "Invalid API token format: {}", e);
        ProviderError::InvalidHeaderValue(e)
    })?;
    auth_value.set_sensitive(true);
    headers.insert(header::AUTHORIZATION, auth_value);

    // Build the client.
    let client: Client = Client::builder()
        .default_headers(headers)
        .timeout(timeout)
        .build()
        .map_err(|e| {
            debug!(provider = %provider, "Failed to build HTTP client: {}", e);
            ProviderError::HttpClientBuild(e)
        })?;

    Ok(client)
}

/// Case-insensitive hostname comparison that ignores a trailing root dot.
pub fn same_hostname(a: &str, b: &str) -> bool {
    a.trim_end_matches('.')
        .eq_ignore_ascii_case(b.trim_end_matches('.'))
}
