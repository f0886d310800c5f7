//! Excluded-hours profile commands

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{confirm_delete, print_deleted, run_list_command};
use crate::cli::{CommandContext, LimitArgs, ListArgs, OutputFormat};
use crate::client::AdminApi;
use crate::client::models::{
    ExcludedHoursProfile, ExcludedHoursRequest, validate_exclusion_matrix,
};
use crate::error::{Error, Result};
use crate::models::ExcludedHoursDisplay;
use crate::models::display::format_offset;
use crate::output::print_detail;

const DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Run the excluded-hours list command
pub async fn list(opts: &GlobalOptions, args: &LimitArgs) -> Result<()> {
    run_list_command::<ExcludedHoursProfile, ExcludedHoursDisplay, _, _>(
        opts,
        &ListArgs::from(args),
        "excluded hours profiles",
        |client, _, _| async move { client.list_excluded_hours().await },
    )
    .await
}

/// Run the excluded-hours get command
pub async fn get(opts: &GlobalOptions, profile_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let profile = ctx.client.get_excluded_hours(profile_id).await?;
    print_profile(&ctx, &profile)
}

/// Run the excluded-hours create command
pub async fn create(opts: &GlobalOptions, name: &str, matrix: &str, time_offset: i32) -> Result<()> {
    let request = ExcludedHoursRequest {
        name: name.to_string(),
        time_offset,
        exclusion_matrix: validate_exclusion_matrix(matrix)?,
    };

    let ctx = CommandContext::new(opts)?;
    let profile = ctx.client.create_excluded_hours(request).await?;

    if ctx.format != OutputFormat::Json {
        eprintln!(
            "{} Created excluded hours profile {}",
            "✓".green(),
            profile.name.bold()
        );
    }
    print_profile(&ctx, &profile)
}

/// Run the excluded-hours update command
///
/// The server replaces the whole profile, so unchanged fields are carried
/// over from the current one.
pub async fn update(
    opts: &GlobalOptions,
    profile_id: &str,
    name: Option<String>,
    matrix: Option<&str>,
    time_offset: Option<i32>,
) -> Result<()> {
    if name.is_none() && matrix.is_none() && time_offset.is_none() {
        return Err(Error::InvalidInput(
            "Nothing to update. Pass --name, --matrix, and/or --time-offset.".to_string(),
        ));
    }
    let matrix = matrix.map(validate_exclusion_matrix).transpose()?;

    let ctx = CommandContext::new(opts)?;
    let current = ctx.client.get_excluded_hours(profile_id).await?;
    let request = merge_update(current, name, matrix, time_offset);

    ctx.client.update_excluded_hours(profile_id, request).await?;

    let profile = ctx.client.get_excluded_hours(profile_id).await?;
    print_profile(&ctx, &profile)
}

/// Run the excluded-hours delete command
pub async fn delete(opts: &GlobalOptions, profile_id: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let label = if yes {
        profile_id.to_string()
    } else {
        ctx.client.get_excluded_hours(profile_id).await?.name
    };
    if !confirm_delete("excluded hours profile", &label, yes)? {
        return Ok(());
    }

    ctx.client.delete_excluded_hours(profile_id).await?;
    print_deleted(ctx.format, "excluded hours profile", profile_id)
}

fn merge_update(
    current: ExcludedHoursProfile,
    name: Option<String>,
    matrix: Option<Vec<bool>>,
    time_offset: Option<i32>,
) -> ExcludedHoursRequest {
    ExcludedHoursRequest {
        name: name.unwrap_or(current.name),
        time_offset: time_offset.unwrap_or(current.time_offset),
        exclusion_matrix: matrix.unwrap_or(current.exclusion_matrix),
    }
}

/// One line per weekday, `#` for an excluded hour and `.` otherwise.
fn render_matrix(matrix: &[bool]) -> String {
    let mut out = String::from("    0         1         2   \n    012345678901234567890123");
    for (day, hours) in DAYS.iter().zip(matrix.chunks(24)) {
        let row: String = hours.iter().map(|h| if *h { '#' } else { '.' }).collect();
        out.push_str(&format!("\n{} {}", day, row));
    }
    out
}

fn print_profile(ctx: &CommandContext, profile: &ExcludedHoursProfile) -> Result<()> {
    let lines = [
        ("Profile ID", profile.excluded_hours_id.clone()),
        ("Name", profile.name.clone()),
        ("UTC offset", format_offset(profile.time_offset)),
        (
            "Excluded",
            format!("{} hours per week", profile.excluded_count()),
        ),
    ];
    print_detail(profile, &lines, ctx.format)?;

    if ctx.format != OutputFormat::Json && !profile.exclusion_matrix.is_empty() {
        println!("\n{}", render_matrix(&profile.exclusion_matrix));
    }
    Ok(())
}
