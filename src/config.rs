use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// What to do when a single page cannot be fetched or extracted
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Log the page, leave it out of the output and keep going
    #[default]
    Skip,
    /// Stop the pipeline; no output file is written
    Abort,
}

/// Scraper configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ScrapeConfig {
    /// Root of the wiki; listing pages and subclass paths are resolved against it
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Directory the JSON dumps are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Failure handling, shared by every pipeline
    #[serde(default)]
    pub failure_policy: FailurePolicy,
    /// Request timeout in seconds; unset means wait indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            output_dir: default_output_dir(),
            failure_policy: FailurePolicy::default(),
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://dnd5e.wikidot.com".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; dnd-lookups/0.1)".to_string()
}

impl ScrapeConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with LOOKUPS__ prefix
    /// 2. lookups.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: LOOKUPS__FAILURE_POLICY=abort
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// See [`ScrapeConfig::load`].
pub fn load_config() -> Result<ScrapeConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("lookups").required(false))
        .add_source(
            Environment::with_prefix("LOOKUPS")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;
    use std::env;

    #[test]
    fn test_default_values() {
        let config = ScrapeConfig::default();
        assert_eq!(config.base_url, "https://dnd5e.wikidot.com");
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.failure_policy, FailurePolicy::Skip);
        assert!(config.timeout_secs.is_none());
    }

    #[test]
    fn test_empty_source_uses_defaults() {
        let config: ScrapeConfig = Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.base_url, default_base_url());
        assert_eq!(config.failure_policy, FailurePolicy::Skip);
    }

    #[test]
    fn test_toml_overrides() {
        let toml = r#"
            base_url = "http://localhost:8080"
            output_dir = "out"
            failure_policy = "abort"
            timeout_secs = 10
        "#;
        let config: ScrapeConfig = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.failure_policy, FailurePolicy::Abort);
        assert_eq!(config.timeout_secs, Some(10));
        assert_eq!(config.user_agent, default_user_agent());
    }

    // One test for both cases: the process environment is shared between test threads
    #[test]
    fn test_load_config_without_file() {
        let keys_to_clear: Vec<String> = env::vars()
            .filter(|(k, _)| k.starts_with("LOOKUPS__"))
            .map(|(k, _)| k)
            .collect();
        for key in keys_to_clear {
            env::remove_var(&key);
        }

        let config = load_config().unwrap();
        assert_eq!(config.base_url, default_base_url());
        assert_eq!(config.failure_policy, FailurePolicy::Skip);
        assert!(config.timeout_secs.is_none());

        env::set_var("LOOKUPS__FAILURE_POLICY", "abort");
        env::set_var("LOOKUPS__TIMEOUT_SECS", "7");
        let result = load_config();
        env::remove_var("LOOKUPS__FAILURE_POLICY");
        env::remove_var("LOOKUPS__TIMEOUT_SECS");

        let config = result.unwrap();
        assert_eq!(config.failure_policy, FailurePolicy::Abort);
        assert_eq!(config.timeout_secs, Some(7));
        assert_eq!(config.output_dir, default_output_dir());
    }
}
