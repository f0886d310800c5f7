//! Global CLI options shared across all commands

use clap::ValueEnum;

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// For most options, the precedence is: CLI flag > environment variable > config file > default.
/// This struct captures the CLI/env layer; config file values are merged in
/// `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format (pretty, table, json), if given on the command line
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.awvs/config.yaml)
    pub config: Option<String>,

    /// Acunetix server URL override
    pub api_url: Option<String>,

    /// API key override
    pub api_key: Option<String>,

    /// Skip TLS certificate verification
    pub insecure: bool,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            api_url: cli.api_url.clone(),
            api_key: cli.api_key.clone(),
            insecure: cli.insecure,
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Resolve the output format against a configured preference.
    pub fn resolve_format(&self, preference: Option<&str>) -> OutputFormat {
        self.format
            .or_else(|| preference.and_then(|p| OutputFormat::from_str(p, true).ok()))
            .unwrap_or_default()
    }
}
