// 3rd party crates
use async_trait::async_trait;

// Project imports
use crate::models::{DnsRecord, RecordIntent, RecordType};

// Current module imports
use super::errors::ProviderError;

/// Core trait that all DNS providers must implement.
///
/// A provider instance lives for a single run. Zone and record metadata
/// are fetched on the first write and reused for later writes in the same
/// run, which is why writing takes `&mut self`.
#[async_trait]
pub trait DnsProvider: Send {
    /// Record types this backend is able to manage, in the order they
    /// should be reconciled.
    fn supported_record_types(&self) -> &'static [RecordType];

    /// Creates the record described by `intent`, or replaces an existing
    /// record with the same name and type.
    ///
    /// # Returns
    ///
    /// * `Ok(DnsRecord)` - The record as the provider echoed it back
    /// * `Err(ProviderError)` - Any lookup or write failure; nothing is retried
    async fn upsert_record(&mut self, intent: &RecordIntent) -> Result<DnsRecord, ProviderError>;

    /// Gets the provider's name, lowercase and without spaces.
    fn get_name(&self) -> &'static str;
}
