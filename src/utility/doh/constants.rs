pub const DEFAULT_DOH_URL: &str = "https://cloudflare-dns.com/dns-query";

/// Media type that selects the JSON flavour of DoH responses.
pub const DNS_JSON_MEDIA_TYPE: &str = "application/dns-json";
