// Standard library
use std::net::{Ipv4Addr, Ipv6Addr};

// Project imports
use crate::utility::ip_detector::types::IpService;

/// TXT name whose answer is the address the query came from.
pub const MYADDR_QUERY_NAME: &str = "o-o.myaddr.l.google.com.";

/// ns1.google.com
pub const MYADDR_NAMESERVER_V4: Ipv4Addr = Ipv4Addr::new(216, 239, 32, 10);
pub const MYADDR_NAMESERVER_V6: Ipv6Addr = Ipv6Addr::new(0x2001, 0x4860, 0x4802, 0x32, 0, 0, 0, 0xa);

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// IPv4 detection services for the HTTP method, tried in order.
pub const IPV4_SERVICES: [IpService; 3] = [
    IpService {
        base_url: "https://api.ipify.org",
        path: "?format=text",
    },
    IpService {
        base_url: "https://v4.ident.me",
        path: "",
    },
    IpService {
        base_url: "https://ipv4.icanhazip.com",
        path: "",
    },
];

/// IPv6 detection services for the HTTP method, tried in order.
pub const IPV6_SERVICES: [IpService; 3] = [
    IpService {
        base_url: "https://api6.ipify.org",
        path: "?format=text",
    },
    IpService {
        base_url: "https://v6.ident.me",
        path: "",
    },
    IpService {
        base_url: "https://ipv6.icanhazip.com",
        path: "",
    },
];
