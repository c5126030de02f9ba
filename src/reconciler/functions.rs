// Standard library
use std::net::IpAddr;

// Project imports
use crate::models::{DnsRecord, RecordIntent};
use crate::providers::functions::same_hostname;

// Current module imports
use super::errors::ReconcileError;

/// Compares two address literals, semantically when both parse.
///
/// `2001:db8::1` and `2001:0db8:0:0:0:0:0:1` are the same address even
/// though the strings differ.
pub fn addresses_match(a: &str, b: &str) -> bool {
    match (a.trim().parse::<IpAddr>(), b.trim().parse::<IpAddr>()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a.trim() == b.trim(),
    }
}

/// Checks that the record echoed by the provider is the one we asked for.
pub fn verify_echo(intent: &RecordIntent, echoed: &DnsRecord) -> Result<(), ReconcileError> {
    let mismatch = |field: &'static str, expected: String, got: String| ReconcileError::Verification {
        record_type: intent.record_type,
        field,
        expected,
        got,
    };

    if !echoed
        .record_type
        .eq_ignore_ascii_case(intent.record_type.as_str())
    {
        return Err(mismatch(
            "type",
            intent.record_type.to_string(),
            echoed.record_type.clone(),
        ));
    }

    if !same_hostname(&echoed.name, &intent.name) {
        return Err(mismatch("name", intent.name.clone(), echoed.name.clone()));
    }

    if !addresses_match(&echoed.content, &intent.content) {
        return Err(mismatch(
            "content",
            intent.content.clone(),
            echoed.content.clone(),
        ));
    }

    if echoed.ttl != intent.ttl {
        return Err(mismatch(
            "ttl",
            intent.ttl.to_string(),
            echoed.ttl.to_string(),
        ));
    }

    Ok(())
}
