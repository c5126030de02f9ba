pub const COMBINED_LOG_FILE: &str = "ddns-sync.log";
pub const ERROR_LOG_FILE: &str = "ddns-sync.error.log";

/// Dependencies whose own logging is only interesting when it fails.
pub const NOISY_TARGETS: [&str; 5] = [
    "hyper",
    "hyper_util",
    "reqwest",
    "hickory_proto",
    "hickory_resolver",
];

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
