//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::context::resolve_config;
use crate::client::{AcunetixClient, AdminApi};
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display configuration and connectivity status
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "AWVS Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;

    let config = match resolve_config(opts) {
        Ok(config) => config,
        Err(_) => {
            println!("{} Configuration not found", "✗".red());
            println!();
            println!(
                "Run {} to create a configuration file.",
                "awvs login".cyan()
            );
            println!();
            return Ok(());
        }
    };

    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {}",
            "(none, using flags/environment)".dimmed()
        );
    }
    println!();

    match config.api_url {
        Some(ref url) => println!("{} Server: {}", "✓".green(), url),
        None => {
            println!("{} Server URL not configured", "✗".red());
            println!("  → Run 'awvs login' to configure");
        }
    }

    match config.api_key {
        Some(ref key) => println!("{} API key: {}", "✓".green(), mask_key(key)),
        None => {
            println!("{} API key not configured", "✗".red());
            println!("  → Run 'awvs login' to configure");
        }
    }

    if !config.verify_ssl {
        println!("{} TLS certificate verification disabled", "⚠".yellow());
    }

    if config.validate_auth().is_err() {
        println!();
        return Ok(());
    }

    let client = AcunetixClient::from_config(&config)?;
    match client.server_info().await {
        Ok(info) => println!(
            "{} Connected: Acunetix {} (build {})",
            "✓".green(),
            info.version,
            info.build_number
        ),
        Err(e) => println!("{} Cannot reach server: {}", "✗".red(), e),
    }

    println!();
    Ok(())
}

/// Show only the last four characters of a key.
fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{}", tail)
}
