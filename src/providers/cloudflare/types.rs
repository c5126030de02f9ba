// Standard library
use std::fmt;

// 3rd party crates
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Represents a client for interacting with the Cloudflare API.
pub struct Cloudflare {
    pub(super) client: Client,
    pub(super) api_base: String,
    pub(super) domain: String,
    pub(super) snapshot: Option<ZoneSnapshot>,
}

// The client carries the bearer token in its default headers.
impl fmt::Debug for Cloudflare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cloudflare")
            .field("api_base", &self.api_base)
            .field("domain", &self.domain)
            .field("snapshot", &self.snapshot)
            .finish()
    }
}

/// Zone id plus the records of one hostname, fetched once per run.
#[derive(Debug, Clone)]
pub struct ZoneSnapshot {
    pub zone_id: String,
    pub hostname: String,
    pub records: Vec<CfDnsRecord>,
}

/// Envelope wrapped around every Cloudflare API response.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<ApiMessage>,
    pub result: Option<T>,
}

#[derive(Debug, Deserialize)]
pub struct ApiMessage {
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
}

/// A DNS record as Cloudflare reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct CfDnsRecord {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub content: String,
    pub ttl: u32,
}

/// Body of a create or update request.
#[derive(Debug, Serialize)]
pub struct RecordBody<'a> {
    #[serde(rename = "type")]
    pub record_type: &'a str,
    pub name: &'a str,
    pub content: &'a str,
    pub ttl: u32,
}
