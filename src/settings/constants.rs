/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "DDNS_SYNC_CONFIG_PATH";

/// Prefix of environment overrides, e.g. `DDNS_SYNC_LOG__LEVEL=debug`.
pub const ENV_PREFIX: &str = "DDNS_SYNC";

pub const CONFIG_DIR_NAME: &str = "ddns-sync";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_DIRECTORY: &str = "/var/log/ddns-sync";

pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
