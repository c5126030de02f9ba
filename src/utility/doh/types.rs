// 3rd party crates
use serde::Deserialize;

/// JSON body returned by a DoH endpoint for `accept: application/dns-json`.
#[derive(Debug, Deserialize)]
pub struct DohResponse {
    #[serde(rename = "Status", default)]
    pub status: u32,
    #[serde(rename = "Answer", default)]
    pub answer: Vec<DohAnswer>,
}

#[derive(Debug, Deserialize)]
pub struct DohAnswer {
    #[serde(rename = "type")]
    pub record_type: u16,
    pub data: String,
}

pub struct DohReader {
    pub(super) client: reqwest::Client,
    pub(super) endpoint: String,
}
