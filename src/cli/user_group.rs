//! User group commands

use clap::Args;
use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{confirm_delete, print_deleted, run_list_command};
use crate::cli::user::{format_role_mapping, parse_role_mappings};
use crate::cli::{CommandContext, ListArgs, OutputFormat};
use crate::client::AdminApi;
use crate::client::helpers::{all_user_groups, collect_items};
use crate::client::models::{UserGroup, UserGroupCreate, UserGroupUpdate};
use crate::error::{Error, Result};
use crate::models::UserGroupDisplay;
use crate::output::print_detail;

/// Arguments for `user-group create`
#[derive(Args, Debug)]
pub struct UserGroupCreateArgs {
    /// Group name
    pub name: String,

    /// Group description
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// Member user IDs, comma-separated
    #[arg(long, value_delimiter = ',')]
    pub user_ids: Vec<String>,

    /// Role mappings as a JSON array
    #[arg(long)]
    pub role_mappings: Option<String>,
}

/// Arguments for `user-group update`
#[derive(Args, Debug)]
pub struct UserGroupUpdateArgs {
    /// User group ID
    pub group_id: String,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New description
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// Replace the member list (comma-separated user IDs; empty clears it)
    #[arg(long, value_delimiter = ',', num_args = 0..)]
    pub user_ids: Option<Vec<String>>,

    /// Replace role mappings (JSON array)
    #[arg(long)]
    pub role_mappings: Option<String>,
}

impl UserGroupUpdateArgs {
    fn to_update(&self) -> Result<UserGroupUpdate> {
        Ok(UserGroupUpdate {
            name: self.name.clone(),
            description: self.description.clone(),
            user_ids: self.user_ids.clone().map(clean_ids),
            role_mappings: self
                .role_mappings
                .as_deref()
                .map(parse_role_mappings)
                .transpose()?,
        })
    }
}

/// Run the user-group list command
pub async fn list(opts: &GlobalOptions, args: &ListArgs, extended: bool) -> Result<()> {
    run_list_command::<UserGroup, UserGroupDisplay, _, _>(
        opts,
        args,
        "user groups",
        |client, params, limit| async move {
            collect_items(all_user_groups(&*client, params, extended), limit).await
        },
    )
    .await
}

/// Run the user-group get command
pub async fn get(opts: &GlobalOptions, group_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let group = ctx.client.get_user_group(group_id).await?;
    print_detail(&group, &detail_lines(&group), ctx.format)
}

/// Run the user-group create command
pub async fn create(opts: &GlobalOptions, args: &UserGroupCreateArgs) -> Result<()> {
    let role_mappings = args
        .role_mappings
        .as_deref()
        .map(parse_role_mappings)
        .transpose()?
        .unwrap_or_default();

    let ctx = CommandContext::new(opts)?;

    let request = UserGroupCreate {
        name: args.name.clone(),
        description: args.description.clone().unwrap_or_default(),
        user_ids: clean_ids(args.user_ids.clone()),
        role_mappings,
    };
    let group = ctx.client.create_user_group(request).await?;

    if ctx.format != OutputFormat::Json {
        eprintln!("{} Created user group {}", "✓".green(), group.name.bold());
    }
    print_detail(&group, &detail_lines(&group), ctx.format)
}

/// Run the user-group update command
pub async fn update(opts: &GlobalOptions, args: &UserGroupUpdateArgs) -> Result<()> {
    let update = args.to_update()?;
    if update.is_empty() {
        return Err(Error::InvalidInput(
            "Nothing to update. Pass at least one field to change.".to_string(),
        ));
    }

    let ctx = CommandContext::new(opts)?;
    ctx.client.update_user_group(&args.group_id, update).await?;

    let group = ctx.client.get_user_group(&args.group_id).await?;
    print_detail(&group, &detail_lines(&group), ctx.format)
}

/// Run the user-group delete command
pub async fn delete(opts: &GlobalOptions, group_id: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let label = if yes {
        group_id.to_string()
    } else {
        ctx.client.get_user_group(group_id).await?.name
    };
    if !confirm_delete("user group", &label, yes)? {
        return Ok(());
    }

    ctx.client.delete_user_group(group_id).await?;
    print_deleted(ctx.format, "user group", group_id)
}

/// Run the user-group add-users command
pub async fn add_users(opts: &GlobalOptions, group_id: &str, user_ids: Vec<String>) -> Result<()> {
    let user_ids = require_ids(user_ids, "user")?;
    let ctx = CommandContext::new(opts)?;

    ctx.client.add_group_users(group_id, &user_ids).await?;
    if ctx.format != OutputFormat::Json {
        eprintln!("{} Added {} user(s) to {}", "✓".green(), user_ids.len(), group_id);
    }

    let group = ctx.client.get_user_group(group_id).await?;
    print_detail(&group, &detail_lines(&group), ctx.format)
}

/// Run the user-group remove-users command
pub async fn remove_users(
    opts: &GlobalOptions,
    group_id: &str,
    user_ids: Vec<String>,
) -> Result<()> {
    let user_ids = require_ids(user_ids, "user")?;
    let ctx = CommandContext::new(opts)?;

    ctx.client.remove_group_users(group_id, &user_ids).await?;
    if ctx.format != OutputFormat::Json {
        eprintln!(
            "{} Removed {} user(s) from {}",
            "✓".green(),
            user_ids.len(),
            group_id
        );
    }

    let group = ctx.client.get_user_group(group_id).await?;
    print_detail(&group, &detail_lines(&group), ctx.format)
}

/// Run the user-group add-role-mappings command
pub async fn add_role_mappings(opts: &GlobalOptions, group_id: &str, json: &str) -> Result<()> {
    let role_mappings = parse_role_mappings(json)?;
    if role_mappings.is_empty() {
        return Err(Error::InvalidInput(
            "Role mappings JSON is an empty array.".to_string(),
        ));
    }

    let ctx = CommandContext::new(opts)?;
    let created = ctx
        .client
        .add_group_role_mappings(group_id, role_mappings)
        .await?;

    if ctx.format != OutputFormat::Json {
        eprintln!(
            "{} Added {} role mapping(s) to {}",
            "✓".green(),
            created.len(),
            group_id
        );
    }

    let group = ctx.client.get_user_group(group_id).await?;
    print_detail(&group, &detail_lines(&group), ctx.format)
}

/// Run the user-group remove-role-mappings command
pub async fn remove_role_mappings(
    opts: &GlobalOptions,
    group_id: &str,
    mapping_ids: Vec<String>,
) -> Result<()> {
    let mapping_ids = require_ids(mapping_ids, "role mapping")?;
    let ctx = CommandContext::new(opts)?;

    ctx.client
        .remove_group_role_mappings(group_id, &mapping_ids)
        .await?;
    if ctx.format != OutputFormat::Json {
        eprintln!(
            "{} Removed {} role mapping(s) from {}",
            "✓".green(),
            mapping_ids.len(),
            group_id
        );
    }

    let group = ctx.client.get_user_group(group_id).await?;
    print_detail(&group, &detail_lines(&group), ctx.format)
}

/// Trim IDs and drop blanks left by stray commas.
fn clean_ids(ids: Vec<String>) -> Vec<String> {
    ids.into_iter()
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .collect()
}

fn require_ids(ids: Vec<String>, what: &str) -> Result<Vec<String>> {
    let ids = clean_ids(ids);
    if ids.is_empty() {
        return Err(Error::InvalidInput(format!("No {} IDs given.", what)));
    }
    Ok(ids)
}

fn detail_lines(group: &UserGroup) -> Vec<(&'static str, String)> {
    let mappings = group
        .role_mappings
        .iter()
        .map(format_role_mapping)
        .collect::<Vec<_>>()
        .join(", ");

    vec![
        ("Group ID", group.user_group_id.clone()),
        ("Name", group.name.clone()),
        ("Description", group.description.clone()),
        ("Created", group.created.clone().unwrap_or_default()),
        ("Users", group.user_count().to_string()),
        ("Members", group.user_ids.join(", ")),
        ("Roles", mappings),
    ]
}
