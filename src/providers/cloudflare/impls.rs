// Standard library
use std::time::Duration;

// 3rd party crates
use async_trait::async_trait;
use tracing::{debug, info};

// Project imports
use crate::models::{DnsRecord, RecordIntent, RecordType};
use crate::providers::functions::{create_reqwest_client, same_hostname};
use crate::providers::{DnsProvider, ProviderError};

// Current module imports
use super::constants::ZONES_PER_PAGE;
use super::functions::read_envelope;
use super::types::{CfDnsRecord, Cloudflare, RecordBody, Zone, ZoneSnapshot};

const PROVIDER_NAME: &str = "cloudflare";
const SUPPORTED: [RecordType; 2] = [RecordType::A, RecordType::Aaaa];

impl Cloudflare {
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
            snapshot: None,
        })
    }

    /// Lists the account's active zones.
    async fn list_active_zones(&self) -> Result<Vec<Zone>, ProviderError> {
        let url = format!("{}/zones", self.api_base);
        let fetch_failed = |message: String| ProviderError::FetchFailed {
            what: "zones",
            domain: self.domain.clone(),
            message,
        };

        let response = self
            .client
            .get(&url)
            .query(&[("status", "active"), ("name", self.domain.as_str())])
            .query(&[("per_page", ZONES_PER_PAGE)])
            .send()
            .await
            .map_err(|e| fetch_failed(format!("Failed to send zones request: {}", e)))?;

        read_envelope::<Vec<Zone>>(response)
            .await
            .map_err(fetch_failed)
    }

    /// Picks the id of the active zone named after the configured domain.
    async fn resolve_zone_id(&self) -> Result<String, ProviderError> {
        let zones = self.list_active_zones().await?;

        match zones
            .into_iter()
            .find(|zone| same_hostname(&zone.name, &self.domain))
        {
            Some(zone) => {
                debug!(zone = %self.domain, zone_id = %zone.id, "Resolved zone id");
                Ok(zone.id)
            }
            None => {
                debug!(zone = %self.domain, "No active zone matches the domain");
                Err(ProviderError::ZoneNotFound(self.domain.clone()))
            }
        }
    }

    /// Fetches every record of `hostname` in the zone, whatever its type.
    async fn list_records(
        &self,
        zone_id: &str,
        hostname: &str,
    ) -> Result<Vec<CfDnsRecord>, ProviderError> {
        let url = format!("{}/zones/{}/dns_records", self.api_base, zone_id);
        let fetch_failed = |message: String| ProviderError::FetchFailed {
            what: "DNS records",
            domain: self.domain.clone(),
            message,
        };

        debug!(zone = %self.domain, domain = %hostname, url = %url, "Sending DNS records request");

        let response = self
            .client
            .get(&url)
            .query(&[("name", hostname)])
            .send()
            .await
            .map_err(|e| fetch_failed(format!("Failed to send DNS records request: {}", e)))?;

        read_envelope::<Vec<CfDnsRecord>>(response)
            .await
            .map_err(fetch_failed)
    }

    /// Returns the zone snapshot for `hostname`, fetching it on first use.
    async fn load_snapshot(&mut self, hostname: &str) -> Result<ZoneSnapshot, ProviderError> {
        if let Some(snapshot) = self.snapshot.take() {
            if same_hostname(&snapshot.hostname, hostname) {
                debug!(zone = %self.domain, domain = %hostname, "Reusing fetched zone records");
                return Ok(snapshot);
            }
        }

        let zone_id = self.resolve_zone_id().await?;
        let records = self.list_records(&zone_id, hostname).await?;

        info!(
            zone = %self.domain,
            domain = %hostname,
            "Fetched {} existing record(s)",
            records.len()
        );

        Ok(ZoneSnapshot {
            zone_id,
            hostname: hostname.to_string(),
            records,
        })
    }

    /// Updates `existing_id` when given, otherwise creates a new record.
    async fn write_record(
        &self,
        zone_id: &str,
        existing_id: Option<&str>,
        intent: &RecordIntent,
    ) -> Result<CfDnsRecord, ProviderError> {
        let body = RecordBody {
            record_type: intent.record_type.as_str(),
            name: &intent.name,
            content: &intent.content,
            ttl: intent.ttl,
        };

        let (action, request) = match existing_id {
            Some(record_id) => (
                "update",
                self.client.put(format!(
                    "{}/zones/{}/dns_records/{}",
                    self.api_base, zone_id, record_id
                )),
            ),
            None => (
                "create",
                self.client
                    .post(format!("{}/zones/{}/dns_records", self.api_base, zone_id)),
            ),
        };

        info!(
            zone = %self.domain,
            domain = %intent.name,
            record_type = %intent.record_type,
            "Sending {} request with content {}",
            action,
            intent.content
        );

        let write_failed = |message: String| ProviderError::WriteFailed {
            action,
            record_type: intent.record_type,
            name: intent.name.clone(),
            message,
        };

        let response = request
            .json(&body)
            .send()
            .await
            .map_err(|e| write_failed(format!("Failed to send {} request: {}", action, e)))?;

        read_envelope::<CfDnsRecord>(response)
            .await
            .map_err(write_failed)
    }
}

#[async_trait]
impl DnsProvider for Cloudflare {
    fn supported_record_types(&self) -> &'static [RecordType] {
        &SUPPORTED
    }

    async fn upsert_record(&mut self, intent: &RecordIntent) -> Result<DnsRecord, ProviderError> {
        let mut snapshot = self.load_snapshot(&intent.name).await?;

        let existing_id = snapshot
            .records
            .iter()
            .find(|r| {
                r.record_type.eq_ignore_ascii_case(intent.record_type.as_str())
                    && same_hostname(&r.name, &intent.name)
            })
            .map(|r| r.id.clone());

        let result = self
            .write_record(&snapshot.zone_id, existing_id.as_deref(), intent)
            .await;

        if let Ok(written) = &result {
            snapshot.records.retain(|r| {
                !(r.record_type.eq_ignore_ascii_case(intent.record_type.as_str())
                    && same_hostname(&r.name, &intent.name))
            });
            snapshot.records.push(written.clone());
        }
        self.snapshot = Some(snapshot);

        result.map(DnsRecord::from)
    }

    fn get_name(&self) -> &'static str {
        PROVIDER_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httptest::{matchers::*, responders::*, Expectation, Server};
    use serde_json::json;

    fn provider(server: &Server) -> Cloudflare {
        Cloudflare::new(
            "tok",
            "example.com",
            &server.url_str("/client/v4"),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    fn intent(record_type: RecordType, content: &str) -> RecordIntent {
        RecordIntent {
            record_type,
            name: "www.example.com".to_string(),
            content: content.to_string(),
            ttl: 300,
        }
    }

    fn expect_zones(server: &Server) {
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/client/v4/zones"),
                request::query(url_decoded(contains(("status", "active")))),
                request::headers(contains(("authorization", "Bearer tok"))),
            ])
            .respond_with(json_encoded(json!({
                "success": true,
                "errors": [],
                "result": [
                    { "id": "other", "name": "example.org" },
                    { "id": "z1", "name": "example.com" }
                ]
            }))),
        );
    }

    fn expect_records(server: &Server, records: serde_json::Value) {
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/client/v4/zones/z1/dns_records"),
                request::query(url_decoded(contains(("name", "www.example.com")))),
            ])
            .respond_with(json_encoded(json!({
                "success": true,
                "errors": [],
                "result": records
            }))),
        );
    }

    #[tokio::test]
    async fn creates_record_when_none_exists() {
        let server = Server::run();
        expect_zones(&server);
        expect_records(&server, json!([]));
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/client/v4/zones/z1/dns_records"),
                request::headers(contains(("authorization", "Bearer tok"))),
                request::body(json_decoded(eq(json!({
                    "type": "A",
                    "name": "www.example.com",
                    "content": "5.6.7.8",
                    "ttl": 300
                })))),
            ])
            .respond_with(json_encoded(json!({
                "success": true,
                "errors": [],
                "result": {
                    "id": "r1",
                    "type": "A",
                    "name": "www.example.com",
                    "content": "5.6.7.8",
                    "ttl": 300
                }
            }))),
        );

        let mut cf = provider(&server);
        let record = cf
            .upsert_record(&intent(RecordType::A, "5.6.7.8"))
            .await
            .unwrap();

        assert_eq!(
            record,
            DnsRecord {
                record_type: "A".to_string(),
                name: "www.example.com".to_string(),
                content: "5.6.7.8".to_string(),
                ttl: 300,
            }
        );
    }

    #[tokio::test]
    async fn updates_matching_record_by_id() {
        let server = Server::run();
        expect_zones(&server);
        expect_records(
            &server,
            json!([
                { "id": "r6", "type": "AAAA", "name": "www.example.com", "content": "2001:db8::1", "ttl": 300 },
                { "id": "r4", "type": "A", "name": "www.example.com", "content": "1.2.3.4", "ttl": 300 }
            ]),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", "/client/v4/zones/z1/dns_records/r4"),
                request::body(json_decoded(eq(json!({
                    "type": "A",
                    "name": "www.example.com",
                    "content": "5.6.7.8",
                    "ttl": 300
                })))),
            ])
            .respond_with(json_encoded(json!({
                "success": true,
                "result": {
                    "id": "r4",
                    "type": "A",
                    "name": "www.example.com",
                    "content": "5.6.7.8",
                    "ttl": 300
                }
            }))),
        );

        let mut cf = provider(&server);
        let record = cf
            .upsert_record(&intent(RecordType::A, "5.6.7.8"))
            .await
            .unwrap();
        assert_eq!(record.content, "5.6.7.8");
    }

    #[tokio::test]
    async fn zone_and_records_are_fetched_once_per_run() {
        let server = Server::run();
        // Each expectation defaults to exactly one matching request.
        expect_zones(&server);
        expect_records(
            &server,
            json!([
                { "id": "r4", "type": "A", "name": "www.example.com", "content": "1.2.3.4", "ttl": 300 }
            ]),
        );
        server.expect(
            Expectation::matching(request::method_path(
                "PUT",
                "/client/v4/zones/z1/dns_records/r4",
            ))
            .respond_with(json_encoded(json!({
                "success": true,
                "result": { "id": "r4", "type": "A", "name": "www.example.com", "content": "5.6.7.8", "ttl": 300 }
            }))),
        );
        server.expect(
            Expectation::matching(request::method_path(
                "POST",
                "/client/v4/zones/z1/dns_records",
            ))
            .respond_with(json_encoded(json!({
                "success": true,
                "result": { "id": "r6", "type": "AAAA", "name": "www.example.com", "content": "2001:db8::5", "ttl": 300 }
            }))),
        );

        let mut cf = provider(&server);
        cf.upsert_record(&intent(RecordType::A, "5.6.7.8"))
            .await
            .unwrap();
        cf.upsert_record(&intent(RecordType::Aaaa, "2001:db8::5"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn zone_listing_failure_stops_before_any_write() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/client/v4/zones")).respond_with(
                status_code(403).body(
                    json!({
                        "success": false,
                        "errors": [{ "code": 9109, "message": "Invalid access token" }],
                        "result": null
                    })
                    .to_string(),
                ),
            ),
        );

        let mut cf = provider(&server);
        let err = cf
            .upsert_record(&intent(RecordType::A, "5.6.7.8"))
            .await
            .unwrap_err();

        match err {
            ProviderError::FetchFailed { what, message, .. } => {
                assert_eq!(what, "zones");
                assert!(message.contains("code 9109"), "{message}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn record_listing_failure_stops_before_any_write() {
        let server = Server::run();
        expect_zones(&server);
        // No write expectation: a POST or PUT would fail the test.
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/client/v4/zones/z1/dns_records",
            ))
            .respond_with(
                status_code(400).body(
                    json!({
                        "success": false,
                        "errors": [{ "code": 7003, "message": "Could not route to /zones/z1/dns_records" }],
                        "result": null
                    })
                    .to_string(),
                ),
            ),
        );

        let mut cf = provider(&server);
        let err = cf
            .upsert_record(&intent(RecordType::A, "5.6.7.8"))
            .await
            .unwrap_err();

        match err {
            ProviderError::FetchFailed { what, message, .. } => {
                assert_eq!(what, "DNS records");
                assert!(message.contains("code 7003"), "{message}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn unknown_zone_is_reported() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/client/v4/zones")).respond_with(
                json_encoded(json!({
                    "success": true,
                    "result": [{ "id": "other", "name": "example.org" }]
                })),
            ),
        );

        let mut cf = provider(&server);
        let err = cf
            .upsert_record(&intent(RecordType::A, "5.6.7.8"))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::ZoneNotFound(zone) if zone == "example.com"));
    }

    #[tokio::test]
    async fn rejected_write_carries_the_error_code() {
        let server = Server::run();
        expect_zones(&server);
        expect_records(&server, json!([]));
        server.expect(
            Expectation::matching(request::method_path(
                "POST",
                "/client/v4/zones/z1/dns_records",
            ))
            .respond_with(
                status_code(400).body(
                    json!({
                        "success": false,
                        "errors": [{ "code": 81057, "message": "Record already exists." }],
                        "result": null
                    })
                    .to_string(),
                ),
            ),
        );

        let mut cf = provider(&server);
        let err = cf
            .upsert_record(&intent(RecordType::A, "5.6.7.8"))
            .await
            .unwrap_err();

        match err {
            ProviderError::WriteFailed {
                action,
                record_type,
                message,
                ..
            } => {
                assert_eq!(action, "create");
                assert_eq!(record_type, RecordType::A);
                assert!(message.contains("code 81057"), "{message}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn debug_output_hides_the_client() {
        let cf = Cloudflare::new(
            "secret_token_12345",
            "example.com",
            "https://api.example.test",
            Duration::from_secs(1),
        )
        .unwrap();
        let debug_str = format!("{:?}", cf);
        assert!(!debug_str.contains("secret_token"));
        assert!(debug_str.contains("example.com"));
    }
}
