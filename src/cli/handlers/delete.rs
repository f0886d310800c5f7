//! Confirmation and reporting for destructive commands

use colored::Colorize;
use dialoguer::Confirm;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output::print_json;

/// Ask before deleting unless `yes` was given.
///
/// Returns `false` when the user declines.
pub fn confirm_delete(kind: &str, label: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }

    eprintln!(
        "{} Delete {} \"{}\"? This cannot be undone.",
        "⚠".yellow(),
        kind,
        label
    );

    let confirmed = Confirm::new()
        .with_prompt("Confirm deletion?")
        .default(false)
        .interact()?;

    if !confirmed {
        eprintln!("Cancelled.");
    }

    Ok(confirmed)
}

/// Report a completed deletion.
pub fn print_deleted(format: OutputFormat, kind: &str, id: &str) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "deleted": true,
            "kind": kind,
            "id": id,
        })),
        _ => {
            eprintln!("{} Deleted {} {}", "✓".green(), kind, id);
            Ok(())
        }
    }
}
