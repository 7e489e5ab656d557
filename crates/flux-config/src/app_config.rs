//! Application configuration
//!
//! Configuration loaded from `.flux-shops.toml`, see [`crate::config_file`].

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Log level used when RUST_LOG is not set (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Also write logs to a timestamped file in the cache directory
    #[serde(default)]
    pub log_to_file: bool,

    /// Lessons to run when none are given on the command line; empty runs all
    #[serde(default)]
    pub lessons: Vec<String>,

    /// Simulated product catalog used by the async lesson
    #[serde(default)]
    pub catalog: SourceConfig,

    /// Simulated blog backend used by the blog lesson
    #[serde(default)]
    pub blog: SourceConfig,
}

/// Behaviour of a simulated remote source
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SourceConfig {
    /// Delay before the source answers
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,

    /// Answer with an error instead of data
    #[serde(default)]
    pub fail: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_latency_ms() -> u64 {
    250
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            fail: false,
        }
    }
}

impl SourceConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_to_file: false,
            lessons: Vec::new(),
            catalog: SourceConfig::default(),
            blog: SourceConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load config from the first config file found, or use defaults
    ///
    /// Runs before logging is set up, so a parse failure is handed back as a
    /// message next to the default config for the caller to log.
    pub fn load() -> (Self, Option<String>) {
        Self::from_file(crate::load_config_file())
    }

    fn from_file(found: Option<(PathBuf, String)>) -> (Self, Option<String>) {
        let Some((path, content)) = found else {
            log::debug!("Using default app config");
            return (Self::default(), None);
        };
        match Self::parse(&content) {
            Ok(config) => {
                log::info!("Loaded app config from {}", path.display());
                (config, None)
            }
            Err(e) => {
                let warning = format!("Failed to parse config file {}: {}", path.display(), e);
                (Self::default(), Some(warning))
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.log_level, "info");
        assert!(!config.log_to_file);
        assert!(config.lessons.is_empty());
        assert_eq!(config.catalog.latency(), Duration::from_millis(250));
        assert!(!config.blog.fail);
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            log_level = "debug"
            log_to_file = true
            lessons = ["basics", "async"]

            [catalog]
            latency_ms = 10
            fail = true
        "#;
        let config = AppConfig::parse(toml).unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(config.log_to_file);
        assert_eq!(config.lessons, vec!["basics", "async"]);
        assert_eq!(config.catalog.latency_ms, 10);
        assert!(config.catalog.fail);
        // blog should use defaults
        assert_eq!(config.blog, SourceConfig::default());
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            [blog]
            fail = true
        "#;
        let config = AppConfig::parse(toml).unwrap();
        assert_eq!(config.log_level, "info");
        assert!(config.blog.fail);
        assert_eq!(config.blog.latency_ms, 250);
    }

    #[test]
    fn test_malformed_file_falls_back_with_warning() {
        let found = Some((
            PathBuf::from("/tmp/bad.toml"),
            "log_to_file = \"yes\"".to_string(),
        ));
        let (config, warning) = AppConfig::from_file(found);
        assert_eq!(config, AppConfig::default());
        let warning = warning.unwrap();
        assert!(warning.contains("/tmp/bad.toml"));
    }

    #[test]
    fn test_valid_file_has_no_warning() {
        let found = Some((PathBuf::from("ok.toml"), "log_level = \"warn\"".to_string()));
        let (config, warning) = AppConfig::from_file(found);
        assert_eq!(config.log_level, "warn");
        assert_eq!(warning, None);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        assert_eq!(AppConfig::from_file(None), (AppConfig::default(), None));
    }

    #[test]
    fn test_config_rejects_wrong_types() {
        assert!(AppConfig::parse("log_to_file = \"yes\"").is_err());
    }
}
