//! Vulnerability commands

use colored::Colorize;
use log::warn;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_list_command;
use crate::cli::{CommandContext, ListArgs, OutputFormat};
use crate::client::VulnerabilityApi;
use crate::client::helpers::{all_vulnerabilities, collect_items};
use crate::client::models::{Vulnerability, VulnerabilityStatus, VulnerabilityStatusUpdate};
use crate::error::{Error, Result};
use crate::models::{StatusUpdateDisplay, VulnerabilityDisplay};
use crate::output::formatters::{colorize_severity, format_datetime};
use crate::output::{Formattable, print_detail};

/// Run the vuln list command
pub async fn list(opts: &GlobalOptions, args: &ListArgs) -> Result<()> {
    run_list_command::<Vulnerability, VulnerabilityDisplay, _, _>(
        opts,
        args,
        "vulnerabilities",
        |client, params, limit| async move {
            collect_items(all_vulnerabilities(&*client, params), limit).await
        },
    )
    .await
}

/// Run the vuln get command
pub async fn get(opts: &GlobalOptions, vuln_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let detail = ctx.client.get_vulnerability(vuln_id).await?;
    let vuln = &detail.summary;

    let lines = vec![
        ("Vuln ID", vuln.vuln_id.clone()),
        ("Name", vuln.vt_name.clone()),
        ("Severity", colorize_severity(vuln.severity).to_string()),
        ("Status", vuln.status.clone()),
        ("URL", vuln.affects_url.clone()),
        ("Parameter", vuln.affects_detail.clone()),
        ("Confidence", format!("{}%", vuln.confidence)),
        (
            "CVSS",
            detail
                .cvss_score
                .map(|s| format!("{:.1}", s))
                .unwrap_or_default(),
        ),
        (
            "Target",
            vuln.target_description
                .clone()
                .unwrap_or_else(|| vuln.target_id.clone()),
        ),
        ("First seen", format_datetime(vuln.first_seen.as_ref())),
        ("Last seen", format_datetime(vuln.last_seen.as_ref())),
        ("Tags", detail.tags.join(", ")),
    ];
    print_detail(&detail, &lines, ctx.format)?;

    if ctx.format != OutputFormat::Json {
        for (heading, text) in [
            ("Description", &detail.description),
            ("Impact", &detail.impact),
            ("Recommendation", &detail.recommendation),
        ] {
            if !text.trim().is_empty() {
                println!("\n{}\n{}", heading.bold(), text.trim());
            }
        }
        for reference in &detail.references {
            println!("  {} {}", reference.rel, reference.href.cyan());
        }
    }

    Ok(())
}

/// Run the vuln set-status command
pub async fn set_status(
    opts: &GlobalOptions,
    vuln_ids: &[String],
    status: VulnerabilityStatus,
    comment: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let update = VulnerabilityStatusUpdate { status, comment };
    let outcomes = update_statuses(&*ctx.client, vuln_ids, &update).await;

    let failed = outcomes.iter().filter(|(_, r)| r.is_err()).count();
    let rows: Vec<StatusUpdateDisplay> = outcomes
        .into_iter()
        .map(|(id, result)| StatusUpdateDisplay {
            id,
            result: match result {
                Ok(()) => format!("set to {}", status),
                Err(e) => e.to_string(),
            },
        })
        .collect();
    rows.print(ctx.format)?;

    if failed > 0 {
        return Err(Error::Other(format!(
            "{} of {} status updates failed",
            failed,
            rows.len()
        )));
    }
    Ok(())
}

/// Apply `update` to each vulnerability in turn.
///
/// A failed update is recorded and the rest still run.
async fn update_statuses<C: VulnerabilityApi + ?Sized>(
    client: &C,
    vuln_ids: &[String],
    update: &VulnerabilityStatusUpdate,
) -> Vec<(String, Result<()>)> {
    let mut outcomes = Vec::with_capacity(vuln_ids.len());

    for id in vuln_ids {
        let result = client.update_vulnerability_status(id, update).await;
        if let Err(ref e) = result {
            warn!("Status update for {} failed: {}", id, e);
        }
        outcomes.push((id.clone(), result));
    }

    outcomes
}
