// 3rd party crates
use tracing::{debug, error, info, warn};

// Project imports
use crate::models::{RecordIntent, RecordType};
use crate::providers::DnsProvider;
use crate::utility::doh::traits::RecordReader;
use crate::utility::ip_detector::traits::AddressSource;

// Current module imports
use super::errors::ReconcileError;
use super::functions::{addresses_match, verify_echo};
use super::types::{Outcome, Reconciler, RunReport, Target};

impl<S, R, P> Reconciler<S, R, P>
where
    S: AddressSource,
    R: RecordReader,
    P: DnsProvider,
{
    pub fn new(source: S, reader: R, provider: P, target: Target) -> Self {
        Self {
            source,
            reader,
            provider,
            target,
        }
    }

    #[cfg(test)]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Brings the record of `record_type` in line with the public address.
    ///
    /// A write is issued only when the published value differs from the
    /// discovered address, and every write is checked against the echo.
    pub async fn reconcile(&mut self, record_type: RecordType) -> Result<Outcome, ReconcileError> {
        let hostname = self.target.hostname.clone();
        let version = record_type.ip_version();

        let published = match self.reader.current_record(&hostname, record_type).await {
            Ok(published) => published,
            Err(e) => {
                warn!(
                    host = %hostname,
                    record_type = %record_type,
                    "Could not read the published record, treating it as absent: {}",
                    e
                );
                None
            }
        };

        let external = self
            .source
            .public_address(version)
            .await
            .map_err(|source| ReconcileError::Resolution { version, source })?;

        info!(host = %hostname, "Public {} address is {}", version, external);

        if let Some(published) = &published {
            if addresses_match(published, &external) {
                info!(
                    host = %hostname,
                    record_type = %record_type,
                    "Record already points at {}",
                    external
                );
                return Ok(Outcome::UpToDate);
            }
        }

        info!(
            host = %hostname,
            record_type = %record_type,
            provider = self.provider.get_name(),
            "Record is {}, updating to {}",
            published.as_deref().unwrap_or("<absent>"),
            external
        );

        let intent = RecordIntent {
            record_type,
            name: hostname,
            content: external,
            ttl: self.target.ttl,
        };

        let echoed = self.provider.upsert_record(&intent).await?;
        debug!(echoed = ?echoed, "Provider echoed record");
        verify_echo(&intent, &echoed)?;

        info!(
            host = %intent.name,
            record_type = %record_type,
            "Record updated to {} (ttl {})",
            intent.content,
            intent.ttl
        );
        Ok(Outcome::Updated)
    }

    /// Reconciles every record type the provider supports, in order.
    ///
    /// A resolution failure only skips its own record type. Provider and
    /// verification failures end the run.
    pub async fn run(&mut self) -> RunReport {
        let mut report = RunReport::default();

        for &record_type in self.provider.supported_record_types() {
            match self.reconcile(record_type).await {
                Ok(outcome) => report.outcomes.push((record_type, outcome)),
                Err(e) => {
                    error!(host = %self.target.hostname, record_type = %record_type, "{}", e);

                    let outcome = match &e {
                        ReconcileError::Resolution { .. } => Outcome::FailedResolution,
                        ReconcileError::Provider(_) => Outcome::FailedProviderError,
                        ReconcileError::Verification { .. } => Outcome::FailedVerification,
                    };
                    report.outcomes.push((record_type, outcome));

                    let fatal = e.is_fatal();
                    if fatal || report.error.is_none() {
                        report.error = Some(e);
                    }
                    if fatal {
                        break;
                    }
                }
            }
        }

        report
    }
}

impl RunReport {
    /// 0 when nothing failed, otherwise the code of the deciding error.
    pub fn exit_code(&self) -> u8 {
        self.error.as_ref().map_or(0, ReconcileError::exit_code)
    }
}
