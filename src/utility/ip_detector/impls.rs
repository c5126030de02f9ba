// Standard library
use std::net::IpAddr;
use std::time::Duration;

// 3rd party crates
use async_trait::async_trait;
use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioResolver;
use tracing::{debug, warn};

// Current module imports
use super::constants::{
    IPV4_SERVICES, IPV6_SERVICES, MYADDR_NAMESERVER_V4, MYADDR_NAMESERVER_V6, MYADDR_QUERY_NAME,
};
use super::errors::IpDetectionError;
use super::patterns::matches_version;
use super::traits::AddressSource;
use super::types::{DetectionMethod, IpDetector, IpService, IpVersion};

impl IpDetector {
    pub fn new(method: DetectionMethod, timeout: Duration) -> Result<Self, IpDetectionError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            method,
            timeout,
            client,
        })
    }

    /// Asks the address-echoing nameserver over the transport matching `ip_version`.
    async fn query_txt(&self, ip_version: IpVersion) -> Result<String, IpDetectionError> {
        let nameserver: IpAddr = match ip_version {
            IpVersion::V4 => IpAddr::V4(MYADDR_NAMESERVER_V4),
            IpVersion::V6 => IpAddr::V6(MYADDR_NAMESERVER_V6),
        };

        let config = ResolverConfig::from_parts(
            None,
            vec![],
            NameServerConfigGroup::from_ips_clear(&[nameserver], 53, true),
        );
        let mut opts = ResolverOpts::default();
        opts.timeout = self.timeout;
        opts.attempts = 1;

        let resolver = TokioResolver::builder_with_config(config, TokioConnectionProvider::default())
            .with_options(opts)
            .build();

        debug!(
            nameserver = %nameserver,
            "Querying TXT {} for the public {} address",
            MYADDR_QUERY_NAME,
            ip_version
        );

        let lookup = resolver
            .txt_lookup(MYADDR_QUERY_NAME)
            .await
            .map_err(|e| IpDetectionError::LookupFailed {
                nameserver: nameserver.to_string(),
                message: e.to_string(),
            })?;

        let answers: Vec<String> = lookup
            .iter()
            .map(|txt| {
                txt.iter()
                    .map(|data| String::from_utf8_lossy(data).to_string())
                    .collect::<String>()
            })
            .collect();

        pick_address(ip_version, &nameserver.to_string(), &answers)
    }

    /// Tries each plain-text service in order; the first valid answer wins.
    async fn query_http(&self, ip_version: IpVersion) -> Result<String, IpDetectionError> {
        let services: &[IpService] = match ip_version {
            IpVersion::V4 => &IPV4_SERVICES,
            IpVersion::V6 => &IPV6_SERVICES,
        };

        for service in services {
            match self.query_ip_service(service, ip_version).await {
                Ok(ip) => return Ok(ip),
                Err(e) => warn!("{}", e),
            }
        }

        Err(IpDetectionError::NoServicesAvailable(ip_version))
    }

    async fn query_ip_service(
        &self,
        service: &IpService,
        ip_version: IpVersion,
    ) -> Result<String, IpDetectionError> {
        let url = format!("{}{}", service.base_url, service.path);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|error| IpDetectionError::NetworkError {
                service: service.base_url.to_string(),
                error,
            })?
            .text()
            .await
            .map_err(|error| IpDetectionError::NetworkError {
                service: service.base_url.to_string(),
                error,
            })?;

        pick_address(ip_version, service.base_url, &[response])
    }
}

#[async_trait]
impl AddressSource for IpDetector {
    async fn public_address(&self, version: IpVersion) -> Result<String, IpDetectionError> {
        match self.method {
            DetectionMethod::Dns => self.query_txt(version).await,
            DetectionMethod::Http => self.query_http(version).await,
        }
    }
}

/// Returns the first answer that is a valid literal for `ip_version`.
///
/// Answers are trimmed of whitespace and surrounding quotes first, since
/// TXT data and plain-text services both tend to carry them.
pub(crate) fn pick_address(
    ip_version: IpVersion,
    service: &str,
    answers: &[String],
) -> Result<String, IpDetectionError> {
    answers
        .iter()
        .map(|answer| answer.trim().trim_matches('"').trim())
        .find(|candidate| matches_version(ip_version, candidate))
        .map(str::to_string)
        .ok_or_else(|| IpDetectionError::InvalidAddress {
            service: service.to_string(),
            version: ip_version,
            response: answers.join(" "),
        })
}
