//! Login command implementation

use colored::Colorize;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Password};

use crate::cli::args::GlobalOptions;
use crate::client::{AcunetixClient, AdminApi};
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};

/// Run the login command
///
/// Values missing from `--api-url` / `--api-key` (or their environment
/// variables) are prompted for. Nothing is saved unless the server accepts
/// the key.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to the AWVS CLI!".bold().green());
    println!("Let's connect to your Acunetix server.\n");

    let mut config = match Config::load_at(opts.config_ref()) {
        Ok(config) => config,
        Err(Error::Config(ConfigError::NotFound)) => Config::default(),
        Err(e) => return Err(e),
    };

    let theme = ColorfulTheme::default();

    let raw_url = match opts.api_url {
        Some(ref url) => url.clone(),
        None => {
            let mut input = Input::<String>::with_theme(&theme)
                .with_prompt("Acunetix server URL (e.g. https://acunetix.example.com:3443)");
            if let Some(ref current) = config.api_url {
                input = input.default(current.clone());
            }
            input.interact_text()?
        }
    };
    let base_url = Config::normalize_api_url(&raw_url)?;

    let api_key = match opts.api_key {
        Some(ref key) => key.clone(),
        None => Password::with_theme(&theme)
            .with_prompt("API key (Profile > API Key in the Acunetix UI)")
            .interact()?,
    };
    if api_key.trim().is_empty() {
        return Err(ConfigError::MissingApiKey.into());
    }

    let verify_ssl = config.verify_ssl && !opts.insecure;

    println!("\n{}", "Checking connection...".cyan());
    let client = AcunetixClient::new(&base_url, api_key.trim(), verify_ssl)?;
    let info = client.server_info().await?;
    println!(
        "{} Connected to Acunetix {} (build {})",
        "✓".green(),
        info.version.bold(),
        info.build_number
    );

    config.api_url = Some(base_url.trim_end_matches("/api/v1").to_string());
    config.api_key = Some(api_key.trim().to_string());
    config.verify_ssl = verify_ssl;
    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );
    if !verify_ssl {
        println!(
            "  {} TLS certificate verification is off for this server",
            "⚠".yellow()
        );
    }

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "awvs status".cyan());
    println!("  {} - List scan targets", "awvs target list".cyan());

    Ok(())
}
