// Standard library
use std::fmt;
use std::time::Duration;

// 3rd party crates
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpVersion {
    V4,
    V6,
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpVersion::V4 => f.write_str("IPv4"),
            IpVersion::V6 => f.write_str("IPv6"),
        }
    }
}

/// How the public address is discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionMethod {
    /// TXT lookup against an address-echoing nameserver.
    #[default]
    Dns,
    /// Plain-text "what is my IP" web services.
    Http,
}

/// Service configuration for HTTP IP detection
pub struct IpService {
    pub base_url: &'static str,
    pub path: &'static str,
}

pub struct IpDetector {
    pub method: DetectionMethod,
    pub timeout: Duration,
    pub client: reqwest::Client,
}
