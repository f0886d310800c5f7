//! Report template commands

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_list_command;
use crate::cli::{CommandContext, LimitArgs, ListArgs};
use crate::client::ReportingApi;
use crate::client::models::ReportTemplate;
use crate::error::Result;
use crate::models::ReportTemplateDisplay;
use crate::output::print_detail;

/// Run the template list command
pub async fn list(opts: &GlobalOptions, args: &LimitArgs) -> Result<()> {
    run_list_command::<ReportTemplate, ReportTemplateDisplay, _, _>(
        opts,
        &ListArgs::from(args),
        "report templates",
        |client, _, _| async move { client.list_report_templates().await },
    )
    .await
}

/// Run the template get command
pub async fn get(opts: &GlobalOptions, template_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let template = ctx.client.get_report_template(template_id).await?;

    let lines = [
        ("Template ID", template.template_id.clone()),
        ("Name", template.name.clone()),
        ("Group", template.group.clone()),
        ("Sources", template.accepted_sources.join(", ")),
    ];
    print_detail(&template, &lines, ctx.format)
}
