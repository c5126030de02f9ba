// Standard library
use std::path::PathBuf;

// 3rd party crates
use serde::Deserialize;

// Project imports
use crate::providers::cloudflare::constants::CLOUDFLARE_API_BASE;
use crate::utility::doh::constants::DEFAULT_DOH_URL;
use crate::utility::ip_detector::constants::DEFAULT_TIMEOUT_SECS;
use crate::utility::ip_detector::types::DetectionMethod;

// Current module imports
use super::constants::{DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_LEVEL};

#[derive(Debug, Deserialize, Clone)]
pub struct Log {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Where the combined and error log files are written.
    #[serde(default = "default_log_directory")]
    pub directory: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct IpDetection {
    #[serde(default)]
    pub method: DetectionMethod,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Endpoints {
    #[serde(default = "default_doh_url")]
    pub doh_url: String,
    #[serde(default = "default_cloudflare_api")]
    pub cloudflare_api: String,
    /// No public default exists for the legacy provider.
    #[serde(default)]
    pub legacy_api: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Which management API receives the writes.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Zone-based API handling both A and AAAA records.
    #[default]
    Cloudflare,
    /// Single-family API that replaces records by delete then create.
    Legacy,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Provider {
    #[serde(default)]
    pub kind: ProviderKind,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub log: Log,
    #[serde(default)]
    pub ip_detection: IpDetection,
    #[serde(default)]
    pub endpoints: Endpoints,
    #[serde(default)]
    pub provider: Provider,
}

/// Settings that passed validation and are safe to build clients from.
#[derive(Debug, Clone)]
pub struct ValidatedSettings(pub(super) Settings);

impl Default for Log {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: default_log_directory(),
        }
    }
}

impl Default for IpDetection {
    fn default() -> Self {
        Self {
            method: DetectionMethod::default(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            doh_url: default_doh_url(),
            cloudflare_api: default_cloudflare_api(),
            legacy_api: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_log_directory() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_DIRECTORY)
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_doh_url() -> String {
    DEFAULT_DOH_URL.to_string()
}

fn default_cloudflare_api() -> String {
    CLOUDFLARE_API_BASE.to_string()
}
