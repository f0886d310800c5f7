//! Report commands

use colored::Colorize;
use log::debug;
use serde::Serialize;

use crate::cli::args::GlobalOptions;
use crate::cli::context::with_timeout;
use crate::cli::handlers::{
    WaitProgress, confirm_delete, ensure_completed, print_deleted, run_list_command,
};
use crate::cli::{CommandContext, ListArgs, OutputFormat, WaitArgs};
use crate::client::ReportingApi;
use crate::client::helpers::{all_reports, collect_items, watch_report};
use crate::client::models::{Report, ReportCreate, ReportSourceType};
use crate::error::Result;
use crate::models::ReportDisplay;
use crate::output::formatters::{colorize_status, download_url, format_datetime};
use crate::output::print_detail;

/// A report or export with its download paths resolved to full URLs
#[derive(Debug, Serialize)]
pub(crate) struct WithDownloads<'a, T> {
    #[serde(flatten)]
    pub item: &'a T,
    pub download_urls: Vec<String>,
}

/// Resolve every server-relative download path against `server_root`.
pub(crate) fn resolve_downloads(server_root: &str, paths: &[String]) -> Vec<String> {
    paths.iter().map(|p| download_url(server_root, p)).collect()
}

/// Run the report list command
pub async fn list(opts: &GlobalOptions, args: &ListArgs) -> Result<()> {
    run_list_command::<Report, ReportDisplay, _, _>(
        opts,
        args,
        "reports",
        |client, params, limit| async move {
            collect_items(all_reports(&*client, params), limit).await
        },
    )
    .await
}

/// Run the report get command
pub async fn get(opts: &GlobalOptions, report_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let report = ctx.client.get_report(report_id).await?;
    print_report(&ctx, &report)
}

/// Run the report generate command
pub async fn generate(
    opts: &GlobalOptions,
    template_id: &str,
    source: ReportSourceType,
    ids: Vec<String>,
    wait: bool,
    wait_args: &WaitArgs,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let report = ctx
        .client
        .create_report(ReportCreate::new(template_id, source, ids))
        .await?;
    debug!("Requested report {}", report.report_id);

    if !wait {
        if ctx.format != OutputFormat::Json {
            eprintln!(
                "{} Report {} requested",
                "✓".green(),
                report.report_id.bold()
            );
        }
        return print_report(&ctx, &report);
    }

    let report = wait_with_progress(&ctx, &report.report_id, wait_args).await?;
    print_report(&ctx, &report)?;
    ensure_completed("report", &report.report_id, &report.status)
}

/// Run the report wait command
pub async fn wait(opts: &GlobalOptions, report_id: &str, wait_args: &WaitArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let report = wait_with_progress(&ctx, report_id, wait_args).await?;
    print_report(&ctx, &report)?;
    ensure_completed("report", &report.report_id, &report.status)
}

/// Run the report delete command
pub async fn delete(opts: &GlobalOptions, report_id: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    if !confirm_delete("report", report_id, yes)? {
        return Ok(());
    }

    ctx.client.delete_report(report_id).await?;
    print_deleted(ctx.format, "report", report_id)
}

async fn wait_with_progress(
    ctx: &CommandContext,
    report_id: &str,
    wait_args: &WaitArgs,
) -> Result<Report> {
    let interval = wait_args.interval(ctx.poll_interval_secs());
    let progress = WaitProgress::start(ctx.format, format!("report {}", report_id));

    let result = with_timeout(
        wait_args.timeout(),
        watch_report(&*ctx.client, report_id, interval, |r| {
            progress.update(&r.status)
        }),
    )
    .await;

    progress.finish();
    result
}

fn print_report(ctx: &CommandContext, report: &Report) -> Result<()> {
    let downloads = resolve_downloads(&ctx.server_root()?, &report.download);

    let mut lines = vec![
        ("Report ID", report.report_id.clone()),
        ("Template", report.template_name.clone()),
        (
            "Source",
            report
                .source
                .as_ref()
                .map(|s| format!("{} {}", s.list_type, s.id_list.join(", ")))
                .unwrap_or_default(),
        ),
        ("Status", colorize_status(&report.status).to_string()),
        ("Generated", format_datetime(report.generation_date.as_ref())),
    ];
    lines.extend(downloads.iter().map(|url| ("Download", url.clone())));

    let data = WithDownloads {
        item: report,
        download_urls: downloads,
    };
    print_detail(&data, &lines, ctx.format)
}
