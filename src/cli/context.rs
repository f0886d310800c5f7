//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading, override merging, and client initialization.

use std::sync::Arc;
use std::time::Duration;

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::AcunetixClient;
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Configuration with CLI/env overrides applied
    pub config: Config,
    /// API client (Arc-wrapped so list fetchers can own a handle)
    pub client: Arc<AcunetixClient>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns error if no usable configuration exists or the server URL or
    /// API key is missing.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = resolve_config(opts)?;
        let client = AcunetixClient::from_config(&config)?;
        debug!("Using Acunetix API at {}", client.base_url());

        let format = opts.resolve_format(config.preferences.format.as_deref());

        Ok(Self {
            config,
            client: Arc::new(client),
            format,
        })
    }

    /// Configured page size for listing requests
    pub fn page_size(&self) -> usize {
        self.config.preferences.page_size
    }

    /// Configured seconds between status polls
    pub fn poll_interval_secs(&self) -> u64 {
        self.config.preferences.poll_interval_secs
    }

    /// Server root used to resolve download links
    pub fn server_root(&self) -> Result<String> {
        self.config.server_root()
    }
}

/// Load the config file and layer CLI/env overrides on top.
///
/// A missing file is fine when both the URL and key come from flags or
/// the environment.
pub fn resolve_config(opts: &GlobalOptions) -> Result<Config> {
    let mut config = match Config::load_at(opts.config_ref()) {
        Ok(config) => config,
        Err(Error::Config(ConfigError::NotFound))
            if opts.api_url.is_some() && opts.api_key.is_some() =>
        {
            Config::default()
        }
        Err(e) => return Err(e),
    };

    if let Some(ref url) = opts.api_url {
        config.api_url = Some(url.clone());
    }
    if let Some(ref key) = opts.api_key {
        config.api_key = Some(key.clone());
    }
    if opts.insecure {
        config.verify_ssl = false;
    }

    Ok(config)
}

/// Run `fut`, failing with [`Error::Timeout`] if it outlives `timeout`.
pub async fn with_timeout<T>(
    timeout: Option<Duration>,
    fut: impl std::future::Future<Output = Result<T>>,
) -> Result<T> {
    match timeout {
        Some(limit) => tokio::time::timeout(limit, fut)
            .await
            .map_err(|_| Error::Timeout(limit))?,
        None => fut.await,
    }
}
