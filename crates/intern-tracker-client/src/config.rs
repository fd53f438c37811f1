/*
[INPUT]:  YAML configuration file or CLI overrides
[OUTPUT]: Parsed application configuration and a configured API client
[POS]:    Configuration layer - backend, user and logging setup
[UPDATE]: When adding new configuration options
*/

use anyhow::{Context, bail};
use intern_tracker_adapter::{ClientConfig, DEFAULT_BASE_URL, InternTrackerClient};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

const APP_DIR: &str = "intern-tracker";
const CONFIG_FILE: &str = "config.yaml";

/// Top-level configuration for the tracker client
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Backend connection settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Per-user defaults for the form
    #[serde(default)]
    pub user: UserConfig,
    /// Log output
    #[serde(default)]
    pub log: LogConfig,
}

/// Backend connection configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Root URL of the work update service
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl ApiConfig {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserConfig {
    /// Pre-fills the user id field of the form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_user_id: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LogConfig {
    /// Filter directive, e.g. "info" or "intern_tracker_adapter=debug"
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Directory for interactive-mode log files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: None,
        }
    }
}

impl LogConfig {
    /// Configured directory, else `<data_local_dir>/intern-tracker/logs`
    pub fn log_directory(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join(APP_DIR)
                .join("logs")
        })
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_yaml_str(&content).with_context(|| format!("parse config {}", path.display()))
    }

    pub fn from_yaml_str(content: &str) -> anyhow::Result<Self> {
        // An empty file deserialises to null
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Load an explicit path, or the default location when present.
    ///
    /// A missing explicit path is an error; a missing default file yields defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// `<config_dir>/intern-tracker/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let url = Url::parse(&self.api.base_url)
            .with_context(|| format!("invalid api.base_url '{}'", self.api.base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("api.base_url must use http or https, got '{}'", url.scheme());
        }
        if self.api.timeout_secs == 0 {
            bail!("api.timeout_secs must be greater than zero");
        }
        if self.api.connect_timeout_secs == 0 {
            bail!("api.connect_timeout_secs must be greater than zero");
        }
        if self.log.level.trim().is_empty() {
            bail!("log.level must not be empty");
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> anyhow::Result<String> {
        serde_yaml::to_string(self).context("failed to serialize config to YAML")
    }

    pub fn build_client(&self) -> anyhow::Result<InternTrackerClient> {
        InternTrackerClient::with_config_and_base_url(self.api.client_config(), &self.api.base_url)
            .context("build API client")
    }

    pub fn default_user_id(&self) -> &str {
        self.user.default_user_id.as_deref().unwrap_or_default()
    }
}
