// Standard library
use std::time::Duration;

// 3rd party crates
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, info, warn};

// Project imports
use crate::models::{DnsRecord, RecordIntent, RecordType};
use crate::providers::functions::{create_reqwest_client, same_hostname};
use crate::providers::{DnsProvider, ProviderError};

// Current module imports
use super::functions::parse_body;
use super::types::{Legacy, LegacyRecord, LegacyRecordBody, RecordList};

const PROVIDER_NAME: &str = "legacy";
const SUPPORTED: [RecordType; 1] = [RecordType::A];

impl Legacy {
    pub fn new(
        api_token: &str,
        domain: &str,
        api_base: &str,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = create_reqwest_client(PROVIDER_NAME, api_token, timeout)?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            domain: domain.to_string(),
            records: None,
        })
    }

    fn records_url(&self) -> String {
        format!("{}/domains/{}/records", self.api_base, self.domain)
    }

    async fn list_records(&self) -> Result<Vec<LegacyRecord>, ProviderError> {
        let fetch_failed = |message: String| ProviderError::FetchFailed {
            what: "DNS records",
            domain: self.domain.clone(),
            message,
        };

        let response = self
            .client
            .get(self.records_url())
            .send()
            .await
            .map_err(|e| fetch_failed(format!("Failed to send DNS records request: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| fetch_failed(format!("Failed to read response body: {}", e)))?;

        debug!(zone = %self.domain, status = %status, response = %body, "Received DNS records response");

        parse_body::<RecordList>(status, &body)
            .map(|list| list.records)
            .map_err(fetch_failed)
    }

    /// Deletes a record by id; only HTTP 204 counts as success.
    async fn delete_record(&self, record_id: &str, intent: &RecordIntent) -> Result<(), ProviderError> {
        let write_failed = |message: String| ProviderError::WriteFailed {
            action: "delete",
            record_type: intent.record_type,
            name: intent.name.clone(),
            message,
        };

        info!(zone = %self.domain, domain = %intent.name, record_id = %record_id, "Deleting outdated record");

        let response = self
            .client
            .delete(format!("{}/{}", self.records_url(), record_id))
            .send()
            .await
            .map_err(|e| write_failed(format!("Failed to send delete request: {}", e)))?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let message = match parse_body::<serde_json::Value>(status, &body) {
            Err(message) => message,
            Ok(_) => format!("expected HTTP 204, got {}", status),
        };
        Err(write_failed(message))
    }

    async fn create_record(&self, intent: &RecordIntent) -> Result<LegacyRecord, ProviderError> {
        let write_failed = |message: String| ProviderError::WriteFailed {
            action: "create",
            record_type: intent.record_type,
            name: intent.name.clone(),
            message,
        };

        let body = LegacyRecordBody {
            record_type: intent.record_type.as_str(),
            hostname: &intent.name,
            value: &intent.content,
            ttl: intent.ttl,
        };

        info!(
            zone = %self.domain,
            domain = %intent.name,
            "Creating {} record with value {}",
            intent.record_type,
            intent.content
        );

        let response = self
            .client
            .post(self.records_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| write_failed(format!("Failed to send create request: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| write_failed(format!("Failed to read response body: {}", e)))?;

        parse_body::<LegacyRecord>(status, &text).map_err(write_failed)
    }
}

#[async_trait]
impl DnsProvider for Legacy {
    fn supported_record_types(&self) -> &'static [RecordType] {
        &SUPPORTED
    }

    async fn upsert_record(&mut self, intent: &RecordIntent) -> Result<DnsRecord, ProviderError> {
        if !SUPPORTED.contains(&intent.record_type) {
            warn!(zone = %self.domain, "Refusing {} write", intent.record_type);
            return Err(ProviderError::Unsupported {
                provider: PROVIDER_NAME,
                record_type: intent.record_type,
            });
        }

        let mut records = match self.records.take() {
            Some(records) => records,
            None => self.list_records().await?,
        };

        let is_target = |r: &LegacyRecord| {
            r.record_type.eq_ignore_ascii_case(intent.record_type.as_str())
                && same_hostname(&r.hostname, &intent.name)
        };

        let existing_id = records.iter().find(|r| is_target(r)).map(|r| r.id.clone());

        let result = match existing_id {
            Some(record_id) => match self.delete_record(&record_id, intent).await {
                Ok(()) => {
                    records.retain(|r| !is_target(r));
                    self.create_record(intent).await
                }
                Err(e) => Err(e),
            },
            None => self.create_record(intent).await,
        };

        if let Ok(created) = &result {
            records.push(created.clone());
        }
        self.records = Some(records);

        result.map(DnsRecord::from)
    }

    fn get_name(&self) -> &'static str {
        PROVIDER_NAME
    }
}
