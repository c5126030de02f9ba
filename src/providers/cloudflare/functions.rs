// 3rd party crates
use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::debug;

// Project imports
use crate::models::DnsRecord;

// Current module imports
use super::types::{ApiEnvelope, ApiMessage, CfDnsRecord};

/// Formats Cloudflare's error list as `code 1234: message, ...`.
pub(super) fn describe_errors(errors: &[ApiMessage]) -> String {
    if errors.is_empty() {
        return "no error details reported".to_string();
    }

    errors
        .iter()
        .map(|e| format!("code {}: {}", e.code, e.message))
        .collect::<Vec<String>>()
        .join(", ")
}

/// Reads a response body as an [`ApiEnvelope`] and unwraps its result.
///
/// Cloudflare answers errors with the same envelope and a 4xx status, so the
/// body is parsed regardless of status and `success` decides the outcome.
pub(super) async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response body: {}", e))?;

    debug!(status = %status, response = %body, "Received Cloudflare response");

    let envelope: ApiEnvelope<T> = serde_json::from_str(&body)
        .map_err(|e| format!("HTTP {} - failed to parse response: {} - Raw: {}", status, e, body))?;

    if !envelope.success {
        let codes: Vec<i64> = envelope.errors.iter().map(|e| e.code).collect();
        debug!(status = %status, codes = ?codes, "Cloudflare reported failure");
        return Err(describe_errors(&envelope.errors));
    }

    envelope
        .result
        .ok_or_else(|| format!("HTTP {} - response carried no result", status))
}

impl From<CfDnsRecord> for DnsRecord {
    fn from(record: CfDnsRecord) -> Self {
        DnsRecord {
            record_type: record.record_type,
            name: record.name,
            content: record.content,
            ttl: record.ttl,
        }
    }
}
