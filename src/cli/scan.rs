//! Scan commands: start, watch, inspect, and the one-shot `scan run` flow

use std::time::Duration;

use colored::Colorize;
use log::{debug, warn};
use serde::Serialize;

use crate::cli::args::GlobalOptions;
use crate::cli::context::with_timeout;
use crate::cli::handlers::{
    WaitProgress, confirm_delete, ensure_completed, print_deleted, run_list_command,
};
use crate::cli::{CommandContext, ListArgs, OutputFormat, WaitArgs};
use crate::client::helpers::{
    all_scan_results, all_scan_vulnerabilities, all_scans, collect_items, watch_scan,
};
use crate::client::models::{Scan, ScanCreate, ScanResult, Target, TargetCreate, Vulnerability};
use crate::client::{JobState, ScanApi, Snapshot, TargetApi};
use crate::error::{Error, Result};
use crate::models::{ScanDisplay, ScanResultDisplay, VulnerabilityDisplay};
use crate::output::formatters::{colorize_status, format_datetime, format_severity_counts};
use crate::output::{Formattable, print_detail, print_json};

/// Run the scan list command
pub async fn list(opts: &GlobalOptions, args: &ListArgs) -> Result<()> {
    run_list_command::<Scan, ScanDisplay, _, _>(
        opts,
        args,
        "scans",
        |client, params, limit| async move {
            collect_items(all_scans(&*client, params), limit).await
        },
    )
    .await
}

/// Run the scan get command
pub async fn get(opts: &GlobalOptions, scan_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let scan = ctx.client.get_scan(scan_id).await?;
    print_detail(&scan, &detail_lines(&scan), ctx.format)
}

/// Run the scan start command
pub async fn start(
    opts: &GlobalOptions,
    target_id: &str,
    profile_id: &str,
    wait: bool,
    wait_args: &WaitArgs,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let scan = ctx
        .client
        .create_scan(ScanCreate::immediate(target_id, profile_id))
        .await?;
    debug!("Started scan {} on target {}", scan.scan_id, target_id);

    if !wait {
        if ctx.format != OutputFormat::Json {
            eprintln!("{} Started scan {}", "✓".green(), scan.scan_id.bold());
        }
        return print_detail(&scan, &detail_lines(&scan), ctx.format);
    }

    let scan = wait_with_progress(&ctx, &scan.scan_id, wait_args).await?;
    print_detail(&scan, &detail_lines(&scan), ctx.format)?;
    ensure_completed("scan", &scan.scan_id, scan.status())
}

/// Run the scan wait command
pub async fn wait(opts: &GlobalOptions, scan_id: &str, wait_args: &WaitArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let scan = wait_with_progress(&ctx, scan_id, wait_args).await?;
    print_detail(&scan, &detail_lines(&scan), ctx.format)?;
    ensure_completed("scan", &scan.scan_id, scan.status())
}

/// Run the scan runs command
pub async fn runs(opts: &GlobalOptions, scan_id: &str, args: &ListArgs) -> Result<()> {
    let scan_id = scan_id.to_string();
    run_list_command::<ScanResult, ScanResultDisplay, _, _>(
        opts,
        args,
        "scan results",
        move |client, params, limit| async move {
            collect_items(all_scan_results(&*client, &scan_id, params), limit).await
        },
    )
    .await
}

/// Run the scan results command
pub async fn results(
    opts: &GlobalOptions,
    scan_id: &str,
    result_id: Option<&str>,
    args: &ListArgs,
) -> Result<()> {
    let scan_id = scan_id.to_string();
    let result_id = result_id.map(str::to_string);

    run_list_command::<Vulnerability, VulnerabilityDisplay, _, _>(
        opts,
        args,
        "scan vulnerabilities",
        move |client, params, limit| async move {
            let result_id = match result_id {
                Some(id) => id,
                None => current_result_id(&*client, &scan_id).await?,
            };
            collect_items(
                all_scan_vulnerabilities(&*client, &scan_id, &result_id, params),
                limit,
            )
            .await
        },
    )
    .await
}

/// Run the scan abort command
pub async fn abort(opts: &GlobalOptions, scan_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.client.abort_scan(scan_id).await?;

    match ctx.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "aborted": true,
            "id": scan_id,
        })),
        _ => {
            eprintln!("{} Abort requested for scan {}", "✓".green(), scan_id);
            Ok(())
        }
    }
}

/// Run the scan delete command
pub async fn delete(opts: &GlobalOptions, scan_id: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let label = if yes {
        scan_id.to_string()
    } else {
        let scan = ctx.client.get_scan(scan_id).await?;
        scan.target_address().unwrap_or(scan_id).to_string()
    };
    if !confirm_delete("scan", &label, yes)? {
        return Ok(());
    }

    ctx.client.delete_scan(scan_id).await?;
    print_deleted(ctx.format, "scan", scan_id)
}

/// Everything `scan run` produced, printed as one document for JSON output
#[derive(Debug, Serialize)]
struct RunReport {
    target: Target,
    scan: Scan,
    vulnerabilities: Vec<Vulnerability>,
}

/// Run the scan run command: add a target, scan it, wait, list findings.
pub async fn run(
    opts: &GlobalOptions,
    address: &str,
    description: &str,
    profile_id: &str,
    cleanup: bool,
    wait_args: &WaitArgs,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let pretty = ctx.format != OutputFormat::Json;

    let target = ctx
        .client
        .create_target(TargetCreate::new(address, description))
        .await?;
    if pretty {
        eprintln!(
            "{} Added target {} ({})",
            "✓".green(),
            target.address.bold(),
            target.target_id
        );
    }

    let interval = wait_args.interval(ctx.poll_interval_secs());
    let progress = WaitProgress::start(ctx.format, format!("scan of {}", target.address));
    let outcome = with_timeout(
        wait_args.timeout(),
        scan_and_collect(&*ctx.client, &target.target_id, profile_id, interval, |s| {
            progress.update(s.status())
        }),
    )
    .await;
    progress.finish();

    if cleanup {
        match ctx.client.delete_target(&target.target_id).await {
            Ok(()) => debug!("Deleted target {}", target.target_id),
            Err(e) => warn!("Could not delete target {}: {}", target.target_id, e),
        }
    }

    let (scan, vulnerabilities) = outcome?;

    if pretty {
        eprintln!(
            "Scan {} finished: {}",
            scan.scan_id.bold(),
            colorize_status(scan.status())
        );
        if scan.job_state() == JobState::Completed {
            let rows: Vec<VulnerabilityDisplay> = vulnerabilities
                .into_iter()
                .map(VulnerabilityDisplay::from)
                .collect();
            rows.print(ctx.format)?;
        }
    } else {
        print_json(&RunReport {
            target,
            scan: scan.clone(),
            vulnerabilities,
        })?;
    }

    ensure_completed("scan", &scan.scan_id, scan.status())
}

/// Start a scan on `target_id`, wait for it, and collect what it found.
///
/// Vulnerabilities are only listed for a completed scan; an aborted or
/// failed scan comes back with an empty list.
async fn scan_and_collect<C, O>(
    client: &C,
    target_id: &str,
    profile_id: &str,
    interval: Duration,
    observe: O,
) -> Result<(Scan, Vec<Vulnerability>)>
where
    C: ScanApi + ?Sized,
    O: FnMut(&Scan),
{
    let created = client
        .create_scan(ScanCreate::immediate(target_id, profile_id))
        .await?;
    debug!("Started scan {}", created.scan_id);

    let scan = watch_scan(client, &created.scan_id, interval, observe).await?;
    if scan.job_state() != JobState::Completed {
        return Ok((scan, Vec::new()));
    }

    let result_id = match scan.scan_session_id() {
        Some(id) => id.to_string(),
        None => current_result_id(client, &scan.scan_id).await?,
    };
    let vulnerabilities = collect_items(
        all_scan_vulnerabilities(client, &scan.scan_id, &result_id, Default::default()),
        None,
    )
    .await?;

    Ok((scan, vulnerabilities))
}

/// Result ID of the scan's current session
async fn current_result_id<C: ScanApi + ?Sized>(client: &C, scan_id: &str) -> Result<String> {
    client
        .get_scan(scan_id)
        .await?
        .scan_session_id()
        .map(str::to_string)
        .ok_or_else(|| {
            Error::InvalidInput(format!(
                "Scan {} has not run yet; pass --result to pick a past run",
                scan_id
            ))
        })
}

async fn wait_with_progress(
    ctx: &CommandContext,
    scan_id: &str,
    wait_args: &WaitArgs,
) -> Result<Scan> {
    let interval = wait_args.interval(ctx.poll_interval_secs());
    let progress = WaitProgress::start(ctx.format, format!("scan {}", scan_id));

    let result = with_timeout(
        wait_args.timeout(),
        watch_scan(&*ctx.client, scan_id, interval, |s| progress.update(s.status())),
    )
    .await;

    progress.finish();
    result
}

fn detail_lines(scan: &Scan) -> Vec<(&'static str, String)> {
    let session = scan.current_session.as_ref();

    vec![
        ("Scan ID", scan.scan_id.clone()),
        ("Target", scan.target_address().unwrap_or_default().to_string()),
        ("Target ID", scan.target_id.clone()),
        ("Profile", scan.profile_name.clone().unwrap_or_default()),
        ("Status", colorize_status(scan.status()).to_string()),
        (
            "Progress",
            session.map(|s| format!("{}%", s.progress)).unwrap_or_default(),
        ),
        (
            "Findings",
            format_severity_counts(session.and_then(|s| s.severity_counts.as_ref())),
        ),
        (
            "Started",
            format_datetime(session.and_then(|s| s.start_date.as_ref())),
        ),
        (
            "Result ID",
            scan.scan_session_id().unwrap_or_default().to_string(),
        ),
        (
            "Next run",
            scan.next_run
                .as_ref()
                .map(|d| format_datetime(Some(d)))
                .unwrap_or_default(),
        ),
    ]
}
