// 3rd party crates
use once_cell::sync::Lazy;
use regex::Regex;

// Current module imports
use super::types::IpVersion;

/// Four dot-separated octets, each 0-255, no leading zeros.
static IPV4_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^((25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])\.){3}(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])$",
    )
    .expect("IPv4 pattern is valid")
});

/// Up to eight hextets, with at most one `::` standing in for a zero run.
static IPV6_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(",
        r"([0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}|",
        r"([0-9a-fA-F]{1,4}:){1,7}:|",
        r"([0-9a-fA-F]{1,4}:){1,6}:[0-9a-fA-F]{1,4}|",
        r"([0-9a-fA-F]{1,4}:){1,5}(:[0-9a-fA-F]{1,4}){1,2}|",
        r"([0-9a-fA-F]{1,4}:){1,4}(:[0-9a-fA-F]{1,4}){1,3}|",
        r"([0-9a-fA-F]{1,4}:){1,3}(:[0-9a-fA-F]{1,4}){1,4}|",
        r"([0-9a-fA-F]{1,4}:){1,2}(:[0-9a-fA-F]{1,4}){1,5}|",
        r"[0-9a-fA-F]{1,4}:(:[0-9a-fA-F]{1,4}){1,6}|",
        r":((:[0-9a-fA-F]{1,4}){1,7}|:)",
        r")$",
    ))
    .expect("IPv6 pattern is valid")
});

pub fn is_ipv4(candidate: &str) -> bool {
    IPV4_PATTERN.is_match(candidate)
}

pub fn is_ipv6(candidate: &str) -> bool {
    IPV6_PATTERN.is_match(candidate)
}

/// Checks `candidate` against the pattern for `version`.
pub fn matches_version(version: IpVersion, candidate: &str) -> bool {
    match version {
        IpVersion::V4 => is_ipv4(candidate),
        IpVersion::V6 => is_ipv6(candidate),
    }
}
