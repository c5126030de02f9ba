// Standard library
use std::fmt;

// 3rd party crates
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub struct Legacy {
    pub(super) client: Client,
    pub(super) api_base: String,
    pub(super) domain: String,
    pub(super) records: Option<Vec<LegacyRecord>>,
}

impl fmt::Debug for Legacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Legacy")
            .field("api_base", &self.api_base)
            .field("domain", &self.domain)
            .field("records", &self.records)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
pub struct RecordList {
    #[serde(default)]
    pub records: Vec<LegacyRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LegacyRecord {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub hostname: String,
    pub value: String,
    pub ttl: u32,
}

#[derive(Debug, Serialize)]
pub struct LegacyRecordBody<'a> {
    #[serde(rename = "type")]
    pub record_type: &'a str,
    pub hostname: &'a str,
    pub value: &'a str,
    pub ttl: u32,
}
