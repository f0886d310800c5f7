//! Target group commands

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{confirm_delete, print_deleted, run_list_command};
use crate::cli::{CommandContext, ListArgs, OutputFormat};
use crate::client::TargetApi;
use crate::client::helpers::{all_target_groups, collect_items};
use crate::client::models::{TargetGroup, TargetGroupRequest};
use crate::error::{Error, Result};
use crate::models::TargetGroupDisplay;
use crate::output::formatters::format_severity_counts;
use crate::output::print_detail;

/// Run the group list command
pub async fn list(opts: &GlobalOptions, args: &ListArgs) -> Result<()> {
    run_list_command::<TargetGroup, TargetGroupDisplay, _, _>(
        opts,
        args,
        "target groups",
        |client, params, limit| async move {
            collect_items(all_target_groups(&*client, params), limit).await
        },
    )
    .await
}

/// Run the group get command
pub async fn get(opts: &GlobalOptions, group_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let group = ctx.client.get_target_group(group_id).await?;
    print_detail(&group, &detail_lines(&group), ctx.format)
}

/// Run the group create command
pub async fn create(opts: &GlobalOptions, name: &str, description: Option<String>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let request = TargetGroupRequest {
        name: Some(name.to_string()),
        description,
    };
    let group = ctx.client.create_target_group(request).await?;

    if ctx.format != OutputFormat::Json {
        eprintln!("{} Created group {}", "✓".green(), group.name.bold());
    }
    print_detail(&group, &detail_lines(&group), ctx.format)
}

/// Run the group update command
pub async fn update(
    opts: &GlobalOptions,
    group_id: &str,
    name: Option<String>,
    description: Option<String>,
) -> Result<()> {
    if name.is_none() && description.is_none() {
        return Err(Error::InvalidInput(
            "Nothing to update. Pass --name and/or --description.".to_string(),
        ));
    }

    let ctx = CommandContext::new(opts)?;
    ctx.client
        .update_target_group(group_id, TargetGroupRequest { name, description })
        .await?;

    let group = ctx.client.get_target_group(group_id).await?;
    print_detail(&group, &detail_lines(&group), ctx.format)
}

/// Run the group delete command
pub async fn delete(opts: &GlobalOptions, group_id: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let label = if yes {
        group_id.to_string()
    } else {
        ctx.client.get_target_group(group_id).await?.name
    };
    if !confirm_delete("target group", &label, yes)? {
        return Ok(());
    }

    ctx.client.delete_target_group(group_id).await?;
    print_deleted(ctx.format, "target group", group_id)
}

fn detail_lines(group: &TargetGroup) -> Vec<(&'static str, String)> {
    vec![
        ("Group ID", group.group_id.clone()),
        ("Name", group.name.clone()),
        ("Description", group.description.clone().unwrap_or_default()),
        ("Targets", group.target_count.to_string()),
        ("Findings", format_severity_counts(group.vuln_count.as_ref())),
    ]
}
