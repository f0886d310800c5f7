//! Configuration management for the AWVS CLI
//!
//! The configuration is loaded once at startup, overlaid with CLI/environment
//! overrides, and handed to every command through
//! [`CommandContext`](crate::cli::CommandContext).

use std::path::PathBuf;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::client::{DEFAULT_PAGE_SIZE, DEFAULT_POLL_INTERVAL};
use crate::error::{ConfigError, Result};

/// Path segment every Acunetix REST endpoint lives under
const API_PATH: &str = "/api/v1";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Acunetix server URL (e.g. `https://acunetix.example.com:3443`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Acunetix API key (sent as `X-Auth`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Verify the server TLS certificate
    #[serde(default = "default_verify_ssl")]
    pub verify_ssl: bool,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Default page size for listing requests
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Seconds between status polls when waiting for scans, reports, and exports
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
}

fn default_verify_ssl() -> bool {
    true
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_poll_interval() -> u64 {
    DEFAULT_POLL_INTERVAL.as_secs()
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            format: None,
            page_size: default_page_size(),
            poll_interval_secs: default_poll_interval(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: None,
            api_key: None,
            verify_ssl: default_verify_ssl(),
            preferences: Preferences::default(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".awvs").join("config.yaml"))
    }

    /// Resolve the config path, honouring an explicit override.
    pub fn resolve_path(custom: Option<&str>) -> Result<PathBuf> {
        match custom {
            Some(path) => Ok(PathBuf::from(path)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from a custom path or the default location
    pub fn load_at(custom: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(custom)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to a custom path or the default location
    pub fn save_at(&self, custom: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(custom)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // The file holds an API key
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Validate that the server URL and API key are both present and usable
    pub fn validate_auth(&self) -> Result<()> {
        let url = self.api_url.as_deref().ok_or(ConfigError::MissingApiUrl)?;
        Self::normalize_api_url(url)?;

        match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(()),
            _ => Err(ConfigError::MissingApiKey.into()),
        }
    }

    /// Base URL for REST calls, e.g. `https://host:3443/api/v1`
    pub fn api_base_url(&self) -> Result<String> {
        let url = self.api_url.as_deref().ok_or(ConfigError::MissingApiUrl)?;
        Self::normalize_api_url(url)
    }

    /// Normalise a user-supplied server address into the REST base URL.
    ///
    /// - a missing scheme defaults to `https://`
    /// - trailing slashes are dropped
    /// - `/api/v1` is appended unless already present
    pub fn normalize_api_url(raw: &str) -> Result<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::InvalidApiUrl(raw.to_string()).into());
        }

        let with_scheme = if trimmed.contains("://") {
            trimmed.to_string()
        } else {
            format!("https://{}", trimmed)
        };

        let parsed =
            Url::parse(&with_scheme).map_err(|_| ConfigError::InvalidApiUrl(raw.to_string()))?;
        if parsed.host_str().is_none() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidApiUrl(raw.to_string()).into());
        }

        let base = with_scheme.trim_end_matches('/');
        if base.ends_with(API_PATH) {
            Ok(base.to_string())
        } else {
            Ok(format!("{}{}", base, API_PATH))
        }
    }

    /// Server root (without `/api/v1`), used to resolve download links
    pub fn server_root(&self) -> Result<String> {
        let base = self.api_base_url()?;
        Ok(base.trim_end_matches(API_PATH).to_string())
    }
}
