// 3rd party crates
use tracing::{error, info};

// Project imports
use crate::cli::Cli;
use crate::providers::cloudflare::Cloudflare;
use crate::providers::legacy::Legacy;
use crate::providers::{DnsProvider, ProviderError};
use crate::reconciler::errors::{EXIT_PROVIDER, EXIT_RESOLUTION};
use crate::reconciler::{Reconciler, RunReport, Target};
use crate::settings::{ProviderKind, ValidatedSettings};
use crate::utility::doh::traits::RecordReader;
use crate::utility::doh::types::DohReader;
use crate::utility::ip_detector::traits::AddressSource;
use crate::utility::ip_detector::types::IpDetector;

/// Performs one synchronization run and returns the process exit code.
///
/// Every network call is awaited in turn; nothing is spawned.
pub async fn run(cli: &Cli, settings: &ValidatedSettings) -> u8 {
    let target = Target {
        hostname: cli.hostname(),
        ttl: cli.ttl,
    };

    info!(
        host = %target.hostname,
        ttl = target.ttl,
        provider = ?settings.provider.kind,
        method = ?settings.ip_detection.method,
        "Starting DNS sync"
    );

    let source = match IpDetector::new(
        settings.ip_detection.method,
        settings.ip_detection_timeout(),
    ) {
        Ok(source) => source,
        Err(e) => {
            error!("Failed to set up IP detection: {}", e);
            return EXIT_RESOLUTION;
        }
    };

    let reader = match DohReader::new(&settings.endpoints.doh_url, settings.http_timeout()) {
        Ok(reader) => reader,
        Err(e) => {
            error!("Failed to set up the DNS-over-HTTPS reader: {}", e);
            return EXIT_RESOLUTION;
        }
    };

    let report = match settings.provider.kind {
        ProviderKind::Cloudflare => {
            let provider = Cloudflare::new(
                &cli.access_token,
                cli.zone(),
                &settings.endpoints.cloudflare_api,
                settings.http_timeout(),
            );
            match provider {
                Ok(provider) => reconcile_with(source, reader, provider, target).await,
                Err(e) => return provider_setup_failed(settings.provider.kind, e),
            }
        }
        ProviderKind::Legacy => {
            let provider = settings
                .legacy_api()
                .map_err(|_| ProviderError::FetchFailed {
                    what: "legacy API endpoint",
                    domain: cli.zone().to_string(),
                    message: "endpoints.legacy_api is not configured".to_string(),
                })
                .and_then(|api_base| {
                    Legacy::new(&cli.access_token, cli.zone(), api_base, settings.http_timeout())
                });
            match provider {
                Ok(provider) => reconcile_with(source, reader, provider, target).await,
                Err(e) => return provider_setup_failed(settings.provider.kind, e),
            }
        }
    };

    log_summary(&report);
    report.exit_code()
}

async fn reconcile_with<S, R, P>(source: S, reader: R, provider: P, target: Target) -> RunReport
where
    S: AddressSource,
    R: RecordReader,
    P: DnsProvider,
{
    let mut reconciler = Reconciler::new(source, reader, provider, target);
    reconciler.run().await
}

fn provider_setup_failed(kind: ProviderKind, e: ProviderError) -> u8 {
    error!(provider = ?kind, "Failed to set up the provider client: {}", e);
    EXIT_PROVIDER
}

/// One line per record type plus the exit code. The deciding error was
/// already logged by the reconciler.
fn log_summary(report: &RunReport) {
    for (record_type, outcome) in &report.outcomes {
        info!("{}: {}", record_type, outcome);
    }

    info!(exit_code = report.exit_code(), "DNS sync finished");
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use httptest::{matchers::*, responders::*, Expectation, Server};
    use serde_json::json;
    use std::io;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::{fmt, Layer};

    use crate::models::RecordType;
    use crate::utility::doh::errors::DohError;
    use crate::utility::ip_detector::errors::IpDetectionError;
    use crate::utility::ip_detector::types::IpVersion;

    struct FixedSource;

    #[async_trait]
    impl AddressSource for FixedSource {
        async fn public_address(&self, version: IpVersion) -> Result<String, IpDetectionError> {
            Ok(match version {
                IpVersion::V4 => "5.6.7.8".to_string(),
                IpVersion::V6 => "2001:db8::5".to_string(),
            })
        }
    }

    struct NothingPublished;

    #[async_trait]
    impl RecordReader for NothingPublished {
        async fn current_record(
            &self,
            _hostname: &str,
            _record_type: RecordType,
        ) -> Result<Option<String>, DohError> {
            Ok(None)
        }
    }

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn provider_failure_is_logged_once() {
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

        let provider = Cloudflare::new(
            "tok",
            "example.com",
            &server.url_str("/client/v4"),
            Duration::from_secs(5),
        )
        .unwrap();
        let target = Target {
            hostname: "www.example.com".to_string(),
            ttl: 300,
        };

        let buffer = Buffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(move || writer.clone())
                .with_filter(LevelFilter::ERROR),
        );
        let guard = tracing::subscriber::set_default(subscriber);

        let report = reconcile_with(FixedSource, NothingPublished, provider, target).await;
        log_summary(&report);
        drop(guard);

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(report.exit_code(), EXIT_PROVIDER);
        assert_eq!(lines.len(), 1, "{output}");
        assert!(lines[0].contains("9109"), "{output}");
    }
}
