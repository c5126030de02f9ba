// 3rd party crates
use async_trait::async_trait;

// Current module imports
use super::errors::IpDetectionError;
use super::types::IpVersion;

/// Source of the machine's public address.
#[async_trait]
pub trait AddressSource: Send + Sync {
    /// Returns the public address for `version` as a literal that already
    /// passed pattern validation.
    async fn public_address(&self, version: IpVersion) -> Result<String, IpDetectionError>;
}
