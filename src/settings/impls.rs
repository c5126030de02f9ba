// Standard library
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

// 3rd party crates
use config::{Config, Environment, File};
use url::Url;

// Current module imports
use super::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_PATH_ENV, ENV_PREFIX, LOG_LEVELS,
};
use super::errors::{SettingsError, ValidationError};
use super::types::{ProviderKind, Settings, ValidatedSettings};

impl Settings {
    /// Loads settings from the optional configuration file and the
    /// environment, then validates them.
    ///
    /// `provider_override` comes from the command line and wins over the
    /// file, so it is applied before validation.
    pub fn load(
        explicit_path: Option<&Path>,
        provider_override: Option<ProviderKind>,
    ) -> Result<ValidatedSettings, SettingsError> {
        let mut builder = Config::builder();

        if let Some((path, required)) = Self::get_config_path(explicit_path) {
            builder = builder.add_source(File::from(path).required(required));
        }

        let mut settings: Settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        if let Some(kind) = provider_override {
            settings.provider.kind = kind;
        }

        Ok(ValidatedSettings::new(settings)?)
    }

    /// Determines the configuration file, and whether it has to exist.
    ///
    /// Explicit choices (flag or environment) must exist. The per-user
    /// default location is only used when a file is already there.
    fn get_config_path(explicit_path: Option<&Path>) -> Option<(PathBuf, bool)> {
        if let Some(path) = explicit_path {
            return Some((path.to_path_buf(), true));
        }

        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            return Some((PathBuf::from(path), true));
        }

        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .filter(|path| path.is_file())
            .map(|path| (path, false))
    }

    pub fn get_log_level(&self) -> String {
        self.log.level.to_lowercase()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !LOG_LEVELS.contains(&self.get_log_level().as_str()) {
            return Err(ValidationError::InvalidLogLevel(self.log.level.clone()));
        }

        if self.ip_detection.timeout_secs == 0 {
            return Err(ValidationError::ZeroTimeout("ip_detection.timeout_secs"));
        }
        if self.endpoints.timeout_secs == 0 {
            return Err(ValidationError::ZeroTimeout("endpoints.timeout_secs"));
        }

        validate_url("endpoints.doh_url", &self.endpoints.doh_url)?;
        validate_url("endpoints.cloudflare_api", &self.endpoints.cloudflare_api)?;

        match (&self.provider.kind, &self.endpoints.legacy_api) {
            (_, Some(legacy_api)) => validate_url("endpoints.legacy_api", legacy_api)?,
            (ProviderKind::Legacy, None) => return Err(ValidationError::MissingLegacyApi),
            (ProviderKind::Cloudflare, None) => {}
        }

        Ok(())
    }
}

fn validate_url(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let invalid = |reason: String| ValidationError::InvalidUrl {
        field,
        value: value.to_string(),
        reason,
    };

    let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!("unsupported scheme '{}'", other))),
    }
}

impl ValidatedSettings {
    pub fn new(settings: Settings) -> Result<Self, ValidationError> {
        settings.validate()?;
        Ok(ValidatedSettings(settings))
    }

    pub fn ip_detection_timeout(&self) -> Duration {
        Duration::from_secs(self.0.ip_detection.timeout_secs)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.0.endpoints.timeout_secs)
    }

    /// Base URL of the legacy API. Validation guarantees it is present
    /// whenever the legacy provider is selected.
    pub fn legacy_api(&self) -> Result<&str, ValidationError> {
        self.0
            .endpoints
            .legacy_api
            .as_deref()
            .ok_or(ValidationError::MissingLegacyApi)
    }
}

impl std::ops::Deref for ValidatedSettings {
    type Target = Settings;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
