// 3rd party crates
use thiserror::Error;

// Project imports
use crate::models::RecordType;
use crate::providers::ProviderError;
use crate::utility::ip_detector::errors::IpDetectionError;
use crate::utility::ip_detector::types::IpVersion;

pub const EXIT_RESOLUTION: u8 = 2;
pub const EXIT_PROVIDER: u8 = 3;
pub const EXIT_VERIFICATION: u8 = 4;

#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("Could not determine the public {version} address: {source}")]
    Resolution {
        version: IpVersion,
        #[source]
        source: IpDetectionError,
    },

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("{record_type} record was written but the provider echoed {field} '{got}' instead of '{expected}'")]
    Verification {
        record_type: RecordType,
        field: &'static str,
        expected: String,
        got: String,
    },
}

impl ReconcileError {
    /// Resolution failures only skip their own address family.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ReconcileError::Resolution { .. })
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            ReconcileError::Resolution { .. } => EXIT_RESOLUTION,
            ReconcileError::Provider(_) => EXIT_PROVIDER,
            ReconcileError::Verification { .. } => EXIT_VERIFICATION,
        }
    }
}
