//! Export commands

use colored::Colorize;
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::context::with_timeout;
use crate::cli::handlers::{
    WaitProgress, confirm_delete, ensure_completed, print_deleted, run_list_command,
};
use crate::cli::report::{WithDownloads, resolve_downloads};
use crate::cli::{CommandContext, LimitArgs, ListArgs, OutputFormat, WaitArgs};
use crate::client::ReportingApi;
use crate::client::helpers::watch_export;
use crate::client::models::{Export, ExportCreate, ExportType, ReportSourceType};
use crate::error::Result;
use crate::models::ExportTypeDisplay;
use crate::output::formatters::{colorize_status, format_datetime};
use crate::output::print_detail;

/// Run the export types command
pub async fn types(opts: &GlobalOptions, args: &LimitArgs) -> Result<()> {
    run_list_command::<ExportType, ExportTypeDisplay, _, _>(
        opts,
        &ListArgs::from(args),
        "export types",
        |client, _, _| async move { client.list_export_types().await },
    )
    .await
}

/// Run the export create command
pub async fn create(
    opts: &GlobalOptions,
    export_type_id: &str,
    source: ReportSourceType,
    ids: Vec<String>,
    waf_id: Option<String>,
    wait: bool,
    wait_args: &WaitArgs,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let export = ctx
        .client
        .create_export(ExportCreate::new(export_type_id, source, ids, waf_id))
        .await?;
    debug!("Requested export {}", export.export_id);

    if !wait {
        if ctx.format != OutputFormat::Json {
            eprintln!(
                "{} Export {} requested",
                "✓".green(),
                export.export_id.bold()
            );
        }
        return print_export(&ctx, &export);
    }

    let export = wait_with_progress(&ctx, &export.export_id, wait_args).await?;
    print_export(&ctx, &export)?;
    ensure_completed("export", &export.export_id, &export.status)
}

/// Run the export get command
pub async fn get(opts: &GlobalOptions, export_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let export = ctx.client.get_export(export_id).await?;
    print_export(&ctx, &export)
}

/// Run the export wait command
pub async fn wait(opts: &GlobalOptions, export_id: &str, wait_args: &WaitArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let export = wait_with_progress(&ctx, export_id, wait_args).await?;
    print_export(&ctx, &export)?;
    ensure_completed("export", &export.export_id, &export.status)
}

/// Run the export delete command
pub async fn delete(opts: &GlobalOptions, export_id: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    if !confirm_delete("export", export_id, yes)? {
        return Ok(());
    }

    ctx.client.delete_export(export_id).await?;
    print_deleted(ctx.format, "export", export_id)
}

async fn wait_with_progress(
    ctx: &CommandContext,
    export_id: &str,
    wait_args: &WaitArgs,
) -> Result<Export> {
    let interval = wait_args.interval(ctx.poll_interval_secs());
    let progress = WaitProgress::start(ctx.format, format!("export {}", export_id));

    let result = with_timeout(
        wait_args.timeout(),
        watch_export(&*ctx.client, export_id, interval, |e| {
            progress.update(&e.status)
        }),
    )
    .await;

    progress.finish();
    result
}

fn print_export(ctx: &CommandContext, export: &Export) -> Result<()> {
    let downloads = resolve_downloads(&ctx.server_root()?, &export.download);

    let mut lines = vec![
        ("Export ID", export.export_id.clone()),
        ("Export type", export.export_type_id.clone()),
        ("Name", export.template_name.clone()),
        (
            "Source",
            export
                .source
                .as_ref()
                .map(|s| format!("{} {}", s.list_type, s.id_list.join(", ")))
                .unwrap_or_default(),
        ),
        (
            "WAF",
            export
                .source
                .as_ref()
                .and_then(|s| s.waf_id.clone())
                .unwrap_or_default(),
        ),
        ("Status", colorize_status(&export.status).to_string()),
        ("Generated", format_datetime(export.generation_date.as_ref())),
    ];
    lines.extend(downloads.iter().map(|url| ("Download", url.clone())));

    let data = WithDownloads {
        item: export,
        download_urls: downloads,
    };
    print_detail(&data, &lines, ctx.format)
}
