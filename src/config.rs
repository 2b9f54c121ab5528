use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub feeds: FeedSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }

/// Upstream feed endpoints and outbound client behavior
#[derive(Debug, Clone, Deserialize)]
pub struct FeedSettings {
    #[serde(default = "default_dental_url")]
    pub dental_url: String,
    #[serde(default = "default_vet_url")]
    pub vet_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            dental_url: default_dental_url(),
            vet_url: default_vet_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_dental_url() -> String {
    "https://storage.googleapis.com/scratchpay-code-challenge/dental-clinics.json".to_string()
}

fn default_vet_url() -> String {
    "https://storage.googleapis.com/scratchpay-code-challenge/vet-clinics.json".to_string()
}

fn default_timeout_secs() -> u64 { 30 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with CLINIC_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with CLINIC_)
            // e.g., CLINIC_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("CLINIC")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        // Apply the short variable names deployments already use
        settings = apply_env_overrides(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("CLINIC")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Overlay unprefixed environment variables (PORT, DENTAL_CLINICS_URL,
/// VET_CLINICS_URL) on top of the built config.
fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let port = env::var("PORT").ok();
    let dental_url = env::var("DENTAL_CLINICS_URL").ok();
    let vet_url = env::var("VET_CLINICS_URL").ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(port) = port {
        builder = builder.set_override("server.port", port)?;
    }
    if let Some(url) = dental_url {
        builder = builder.set_override("feeds.dental_url", url)?;
    }
    if let Some(url) = vet_url {
        builder = builder.set_override("feeds.vet_url", url)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_feed_settings() {
        let feeds = FeedSettings::default();
        assert!(feeds.dental_url.ends_with("dental-clinics.json"));
        assert!(feeds.vet_url.ends_with("vet-clinics.json"));
        assert_eq!(feeds.timeout_secs, 30);
    }

    #[test]
    fn test_default_server_settings() {
        let server = ServerSettings::default();
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8000);
        assert!(server.workers.is_none());
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }
}
