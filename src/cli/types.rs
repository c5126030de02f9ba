// Standard library
use std::fmt;
use std::path::PathBuf;

// 3rd party crates
use clap::Parser;

// Project imports
use crate::settings::ProviderKind;

// Current module imports
use super::functions::parse_ttl;

/// Keeps a DNS address record in sync with this machine's public IP address.
#[derive(Parser)]
#[command(name = "ddns-sync", version, about)]
pub struct Cli {
    /// Management API to write to (overrides the configuration file)
    #[arg(long, value_enum)]
    pub provider: Option<ProviderKind>,

    /// Configuration file to load instead of the default location
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Bearer token for the provider API
    pub access_token: String,

    /// Registered domain, e.g. example.com
    pub domain: String,

    /// Label under the domain; empty or "@" means the domain itself
    pub subdomain: String,

    /// Record TTL in seconds
    #[arg(value_parser = parse_ttl)]
    pub ttl: u32,
}

impl fmt::Debug for Cli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cli")
            .field("provider", &self.provider)
            .field("config", &self.config)
            .field("access_token", &"<redacted>")
            .field("domain", &self.domain)
            .field("subdomain", &self.subdomain)
            .field("ttl", &self.ttl)
            .finish()
    }
}
