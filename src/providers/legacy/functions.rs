// 3rd party crates
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

// Project imports
use crate::models::DnsRecord;

// Current module imports
use super::types::LegacyRecord;

/// Returns the provider error carried by `body`, if any.
///
/// Absent, `null` and empty-string codes all mean success.
pub(super) fn error_in_body(body: &Value) -> Option<String> {
    let code = match body.get("code") {
        None | Some(Value::Null) => return None,
        Some(Value::String(code)) if code.is_empty() => return None,
        Some(Value::String(code)) => code.clone(),
        Some(other) => other.to_string(),
    };

    match body.get("message").and_then(Value::as_str) {
        Some(message) if !message.is_empty() => Some(format!("code {}: {}", code, message)),
        _ => Some(format!("code {}", code)),
    }
}

/// Parses a response body, turning an error code or a failing status into `Err`.
pub(super) fn parse_body<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, String> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| format!("HTTP {} - failed to parse response: {} - Raw: {}", status, e, body))?;

    if let Some(error) = error_in_body(&value) {
        return Err(error);
    }

    if !status.is_success() {
        return Err(format!("HTTP {} - {}", status, body));
    }

    serde_json::from_value(value).map_err(|e| format!("Unexpected response shape: {} - Raw: {}", e, body))
}

impl From<LegacyRecord> for DnsRecord {
    fn from(record: LegacyRecord) -> Self {
        DnsRecord {
            record_type: record.record_type,
            name: record.hostname,
            content: record.value,
            ttl: record.ttl,
        }
    }
}
