//! Target management commands

use colored::Colorize;
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{confirm_delete, print_deleted, run_list_command};
use crate::cli::{CommandContext, ListArgs, OutputFormat};
use crate::client::TargetApi;
use crate::client::helpers::{all_targets, collect_items};
use crate::client::models::{Criticality, Target, TargetCreate, TargetUpdate};
use crate::error::{Error, Result};
use crate::models::TargetDisplay;
use crate::output::formatters::{format_datetime, format_severity_counts};
use crate::output::print_detail;

/// Run the target list command
pub async fn list(opts: &GlobalOptions, args: &ListArgs) -> Result<()> {
    run_list_command::<Target, TargetDisplay, _, _>(
        opts,
        args,
        "targets",
        |client, params, limit| async move {
            collect_items(all_targets(&*client, params), limit).await
        },
    )
    .await
}

/// Run the target get command
pub async fn get(opts: &GlobalOptions, target_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let target = ctx.client.get_target(target_id).await?;
    print_detail(&target, &detail_lines(&target), ctx.format)
}

/// Run the target add command
pub async fn add(
    opts: &GlobalOptions,
    address: &str,
    description: &str,
    criticality: Criticality,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    debug!("Adding target {}", address);
    let request = TargetCreate::new(address, description).criticality(criticality);
    let target = ctx.client.create_target(request).await?;

    if ctx.format != OutputFormat::Json {
        eprintln!("{} Added target {}", "✓".green(), target.address.bold());
    }
    print_detail(&target, &detail_lines(&target), ctx.format)
}

/// Run the target update command
pub async fn update(
    opts: &GlobalOptions,
    target_id: &str,
    description: Option<String>,
    criticality: Option<Criticality>,
) -> Result<()> {
    let update = TargetUpdate {
        description,
        criticality: criticality.map(|c| c.value()),
    };
    if update.is_empty() {
        return Err(Error::InvalidInput(
            "Nothing to update. Pass --description and/or --criticality.".to_string(),
        ));
    }

    let ctx = CommandContext::new(opts)?;
    ctx.client.update_target(target_id, update).await?;

    let target = ctx.client.get_target(target_id).await?;
    print_detail(&target, &detail_lines(&target), ctx.format)
}

/// Run the target delete command
pub async fn delete(opts: &GlobalOptions, target_id: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let label = if yes {
        target_id.to_string()
    } else {
        ctx.client.get_target(target_id).await?.address
    };
    if !confirm_delete("target", &label, yes)? {
        return Ok(());
    }

    ctx.client.delete_target(target_id).await?;
    print_deleted(ctx.format, "target", target_id)
}

fn detail_lines(target: &Target) -> Vec<(&'static str, String)> {
    vec![
        ("Target ID", target.target_id.clone()),
        ("Address", target.address.clone()),
        ("Description", target.description.clone()),
        ("Criticality", Criticality::label(target.criticality).to_string()),
        ("Type", target.target_type.clone().unwrap_or_default()),
        (
            "Findings",
            format_severity_counts(target.severity_counts.as_ref()),
        ),
        ("Last scan", format_datetime(target.last_scan_date.as_ref())),
        (
            "Last status",
            target.last_scan_session_status.clone().unwrap_or_default(),
        ),
    ]
}
