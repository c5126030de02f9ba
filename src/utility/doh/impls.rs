// Standard library
use std::time::Duration;

// 3rd party crates
use async_trait::async_trait;
use reqwest::header;
use tracing::debug;

// Project imports
use crate::models::RecordType;

// Current module imports
use super::constants::DNS_JSON_MEDIA_TYPE;
use super::errors::DohError;
use super::traits::RecordReader;
use super::types::{DohResponse, DohReader};

impl DohReader {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, DohError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }
}

#[async_trait]
impl RecordReader for DohReader {
    async fn current_record(
        &self,
        hostname: &str,
        record_type: RecordType,
    ) -> Result<Option<String>, DohError> {
        debug!(
            host = %hostname,
            record_type = %record_type,
            endpoint = %self.endpoint,
            "Querying DNS-over-HTTPS"
        );

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("name", hostname), ("type", record_type.as_str())])
            .header(header::ACCEPT, DNS_JSON_MEDIA_TYPE)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DohError::Status(status));
        }

        let body = response.text().await?;
        let parsed: DohResponse =
            serde_json::from_str(&body).map_err(|e| DohError::Parse(format!("{} - Raw: {}", e, body)))?;

        let current = parsed
            .answer
            .into_iter()
            .find(|answer| answer.record_type == record_type.type_code())
            .map(|answer| answer.data);

        debug!(
            host = %hostname,
            record_type = %record_type,
            dns_status = parsed.status,
            "Published value: {}",
            current.as_deref().unwrap_or("<none>")
        );

        Ok(current)
    }
}
