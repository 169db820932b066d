//! Configuration management for bizreg.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use crate::types::JurisdictionCode;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration.
///
/// This is loaded from `~/.config/bizreg/config.toml` (or platform equivalent).
/// If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Registry endpoints and jurisdiction
    pub registry: RegistryConfig,
    /// Browser automation settings
    pub browser: BrowserConfig,
    /// Detail-page HTTP fetching settings
    pub http: HttpConfig,
}

impl AppConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit path. A missing file is an error here.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.display().to_string(),
            });
        }

        tracing::debug!("Loading config from {}", path.display());
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `BIZREG_STATE`: Override the jurisdiction code
    /// - `BIZREG_BROWSER_REMOTE_URL`: Connect to a remote DevTools endpoint
    /// - `BIZREG_HEADLESS`: Override browser headless mode (true/false)
    /// - `BIZREG_MAX_CONCURRENT_FETCHES`: Override detail-page fetch parallelism
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply overrides from a variable lookup (normally the process environment).
    ///
    /// Unparsable values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("BIZREG_STATE") {
            tracing::debug!("Override registry.jurisdiction from env: {}", val);
            self.registry.jurisdiction = val;
        }

        if let Some(val) = lookup("BIZREG_BROWSER_REMOTE_URL") {
            if !val.trim().is_empty() {
                tracing::debug!("Override browser.remote_url from env: {}", val);
                self.browser.remote_url = Some(val);
            }
        }

        if let Some(val) = lookup("BIZREG_HEADLESS") {
            if let Ok(headless) = val.parse() {
                self.browser.headless = headless;
                tracing::debug!("Override browser.headless from env: {}", headless);
            }
        }

        if let Some(val) = lookup("BIZREG_MAX_CONCURRENT_FETCHES") {
            if let Ok(max) = val.parse() {
                self.http.max_concurrent_fetches = max;
                tracing::debug!("Override http.max_concurrent_fetches from env: {}", max);
            }
        }
    }

    /// Check values that deserialization alone cannot.
    pub fn validate(&self) -> ConfigResult<()> {
        self.jurisdiction()?;

        for (field, value) in [
            ("registry.search_url", &self.registry.search_url),
            ("registry.detail_base_url", &self.registry.detail_base_url),
        ] {
            url::Url::parse(value).map_err(|e| ConfigError::InvalidValue {
                field: field.to_string(),
                reason: e.to_string(),
            })?;
        }

        if self.http.max_concurrent_fetches == 0 {
            return Err(ConfigError::InvalidValue {
                field: "http.max_concurrent_fetches".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    /// Validated jurisdiction code for this configuration.
    pub fn jurisdiction(&self) -> ConfigResult<JurisdictionCode> {
        JurisdictionCode::new(self.registry.jurisdiction.as_str()).map_err(|e| {
            ConfigError::InvalidValue {
                field: "registry.jurisdiction".to_string(),
                reason: e.to_string(),
            }
        })
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/bizreg/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs = ProjectDirs::from("org", "bizreg", "bizreg").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Registry endpoints and jurisdiction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Two-letter jurisdiction code stamped on every record
    pub jurisdiction: String,
    /// Page hosting the entity-name search form
    pub search_url: String,
    /// Prefix joined with each result row's relative link
    pub detail_base_url: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            jurisdiction: "RI".to_string(),
            search_url: "https://business.sos.ri.gov/CorpWeb/CorpSearch/CorpSearch.aspx"
                .to_string(),
            detail_base_url: "https://business.sos.ri.gov/CorpWeb/CorpSearch/".to_string(),
        }
    }
}

/// Browser automation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Run browser in headless mode
    pub headless: bool,
    /// DevTools websocket of an already running browser; launches locally when unset
    pub remote_url: Option<String>,
    /// Browser window width
    pub window_width: u32,
    /// Browser window height
    pub window_height: u32,
    /// Page load timeout in seconds
    pub page_load_timeout_secs: u64,
    /// Maximum wait for a form element or results table, in seconds
    pub wait_timeout_secs: u64,
}

impl BrowserConfig {
    /// Element wait timeout in milliseconds, saturating for oversized settings.
    #[must_use]
    pub fn wait_timeout_ms(&self) -> u64 {
        self.wait_timeout_secs.saturating_mul(1000)
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            remote_url: None,
            window_width: 1920,
            window_height: 1080,
            page_load_timeout_secs: 30,
            wait_timeout_secs: 15,
        }
    }
}

/// Detail-page HTTP fetching settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Detail pages fetched at once
    pub max_concurrent_fetches: usize,
    /// User agent string; the client default is used when unset
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            max_concurrent_fetches: 4,
            user_agent: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.registry.jurisdiction, "RI");
        assert!(config.registry.detail_base_url.ends_with("/CorpSearch/"));
        assert!(config.browser.headless);
        assert!(config.browser.remote_url.is_none());
        assert_eq!(config.browser.wait_timeout_secs, 15);
        assert_eq!(config.browser.wait_timeout_ms(), 15_000);
        assert_eq!(config.http.max_concurrent_fetches, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("[registry]"));
        assert!(toml_str.contains("[browser]"));
        assert!(toml_str.contains("[http]"));

        let parsed: AppConfig = toml::from_str(&toml_str).expect("parse serialized config");
        assert_eq!(parsed.registry.search_url, config.registry.search_url);
    }

    #[test]
    fn test_config_load_from_file() {
        let tmp = TempDir::new().expect("create temp dir");
        let config_path = tmp.path().join("config.toml");

        let mut config = AppConfig::default();
        config.registry.jurisdiction = "CT".to_string();
        config.http.timeout_secs = 10;

        let contents = toml::to_string_pretty(&config).expect("serialize config");
        fs::write(&config_path, contents).expect("write config file");

        let loaded = AppConfig::load_from(&config_path).expect("load config");
        assert_eq!(loaded.registry.jurisdiction, "CT");
        assert_eq!(loaded.http.timeout_secs, 10);
    }

    #[test]
    fn test_load_from_missing_file() {
        let tmp = TempDir::new().expect("create temp dir");
        let result = AppConfig::load_from(&tmp.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::NotFound { .. })));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("BIZREG_STATE", "MA"),
            ("BIZREG_BROWSER_REMOTE_URL", "ws://127.0.0.1:9222/devtools/browser/abc"),
            ("BIZREG_HEADLESS", "false"),
            ("BIZREG_MAX_CONCURRENT_FETCHES", "not-a-number"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config.apply_env_overrides(|key| vars.get(key).map(|v| (*v).to_string()));

        assert_eq!(config.registry.jurisdiction, "MA");
        assert_eq!(
            config.browser.remote_url.as_deref(),
            Some("ws://127.0.0.1:9222/devtools/browser/abc")
        );
        assert!(!config.browser.headless);
        // Unparsable value keeps the default
        assert_eq!(config.http.max_concurrent_fetches, 4);
    }

    #[test]
    fn test_wait_timeout_ms_saturates() {
        let config = BrowserConfig {
            wait_timeout_secs: u64::MAX / 10,
            ..BrowserConfig::default()
        };
        assert_eq!(config.wait_timeout_ms(), u64::MAX);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.registry.jurisdiction = "Rhode Island".to_string();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.registry.detail_base_url = "CorpSearch/".to_string();
        let err = config.validate().expect_err("relative URL rejected");
        assert!(err.to_string().contains("registry.detail_base_url"));

        let mut config = AppConfig::default();
        config.http.max_concurrent_fetches = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[registry]
jurisdiction = "VT"

[browser]
remote_url = "ws://browser:9222"
"#;

        let config: AppConfig = toml::from_str(toml_str).expect("parse partial config");
        assert_eq!(config.registry.jurisdiction, "VT");
        assert_eq!(config.browser.remote_url.as_deref(), Some("ws://browser:9222"));
        // These should be defaults
        assert_eq!(config.browser.page_load_timeout_secs, 30);
        assert_eq!(config.http.timeout_secs, 30);
        assert_eq!(config.jurisdiction().expect("valid code").as_str(), "VT");
    }
}
