//! Scanning profile commands

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_list_command;
use crate::cli::{CommandContext, LimitArgs, ListArgs};
use crate::client::ScanApi;
use crate::client::models::ScanningProfile;
use crate::error::Result;
use crate::models::ScanningProfileDisplay;
use crate::output::print_detail;

/// Run the profile list command
pub async fn list(opts: &GlobalOptions, args: &LimitArgs) -> Result<()> {
    run_list_command::<ScanningProfile, ScanningProfileDisplay, _, _>(
        opts,
        &ListArgs::from(args),
        "scanning profiles",
        |client, _, _| async move {
            let mut profiles = client.list_scanning_profiles().await?;
            profiles.sort_by_key(|p| p.sort_order);
            Ok(profiles)
        },
    )
    .await
}

/// Run the profile get command
pub async fn get(opts: &GlobalOptions, profile_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let profile = ctx.client.get_scanning_profile(profile_id).await?;

    let lines = [
        ("Profile ID", profile.profile_id.clone()),
        ("Name", profile.name.clone()),
        (
            "Type",
            if profile.custom { "custom" } else { "built-in" }.to_string(),
        ),
        ("Checks", profile.checks.len().to_string()),
    ];
    print_detail(&profile, &lines, ctx.format)
}
