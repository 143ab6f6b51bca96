use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub recommendations: RecommendationSettings,
    #[serde(default)]
    pub booking: BookingSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
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

/// Result caps applied by the HTTP layer before calling the engine
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RecommendationSettings {
    #[serde(default = "default_venue_limit")]
    pub default_venue_limit: usize,
    #[serde(default = "max_venue_limit")]
    pub max_venue_limit: usize,
    #[serde(default = "default_people_limit")]
    pub default_people_limit: usize,
    #[serde(default = "max_people_limit")]
    pub max_people_limit: usize,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            default_venue_limit: default_venue_limit(),
            max_venue_limit: max_venue_limit(),
            default_people_limit: default_people_limit(),
            max_people_limit: max_people_limit(),
        }
    }
}

impl RecommendationSettings {
    /// Requested venue count, defaulted and capped
    pub fn venue_limit(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default_venue_limit).min(self.max_venue_limit)
    }

    /// Requested people count, defaulted and capped
    pub fn people_limit(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default_people_limit).min(self.max_people_limit)
    }
}

fn default_venue_limit() -> usize { 5 }
fn max_venue_limit() -> usize { 20 }
fn default_people_limit() -> usize { 10 }
fn max_people_limit() -> usize { 50 }

#[derive(Debug, Clone, Deserialize)]
pub struct BookingSettings {
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,
    #[serde(default = "default_starting_counter")]
    pub starting_counter: u64,
}

impl Default for BookingSettings {
    fn default() -> Self {
        Self {
            id_prefix: default_id_prefix(),
            starting_counter: default_starting_counter(),
        }
    }
}

fn default_id_prefix() -> String { "LUNA".to_string() }
fn default_starting_counter() -> u64 { 1000 }

/// Where users and venues come from; the built-in sample set when unset
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataSettings {
    pub seed_path: Option<String>,
}

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
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with LUNA_)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., LUNA__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("LUNA")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_limits() {
        let limits = RecommendationSettings::default();
        assert_eq!(limits.default_venue_limit, 5);
        assert_eq!(limits.max_venue_limit, 20);
        assert_eq!(limits.default_people_limit, 10);
    }

    #[test]
    fn test_limits_are_capped() {
        let limits = RecommendationSettings::default();
        assert_eq!(limits.venue_limit(None), 5);
        assert_eq!(limits.venue_limit(Some(3)), 3);
        assert_eq!(limits.venue_limit(Some(500)), 20);
        assert_eq!(limits.people_limit(None), 10);
        assert_eq!(limits.people_limit(Some(1000)), 50);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_load_from_partial_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[server]\nport = 9100\n\n[booking]\nid_prefix = \"TEST\"").unwrap();

        let settings = Settings::load_from(file.path()).unwrap();

        assert_eq!(settings.server.port, 9100);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.booking.id_prefix, "TEST");
        assert_eq!(settings.booking.starting_counter, 1000);
        assert_eq!(settings.recommendations.max_venue_limit, 20);
        assert!(settings.data.seed_path.is_none());
    }
}
