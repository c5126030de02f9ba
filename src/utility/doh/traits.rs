// 3rd party crates
use async_trait::async_trait;

// Project imports
use crate::models::RecordType;

// Current module imports
use super::errors::DohError;

/// Read path for the record currently published in the live DNS.
#[async_trait]
pub trait RecordReader: Send + Sync {
    /// Returns the data of the first answer of `record_type` for `hostname`,
    /// or `None` when nothing of that type is published.
    async fn current_record(
        &self,
        hostname: &str,
        record_type: RecordType,
    ) -> Result<Option<String>, DohError>;
}
