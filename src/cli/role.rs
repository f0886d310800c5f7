//! Role and permission commands

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{confirm_delete, print_deleted, run_list_command};
use crate::cli::{CommandContext, LimitArgs, ListArgs, OutputFormat};
use crate::client::AdminApi;
use crate::client::helpers::{all_roles, collect_items};
use crate::client::models::{Permission, Role, RoleCreate, RoleUpdate};
use crate::error::{Error, Result};
use crate::models::{PermissionDisplay, RoleDisplay};
use crate::output::print_detail;

/// Run the role list command
pub async fn list(opts: &GlobalOptions, args: &ListArgs) -> Result<()> {
    run_list_command::<Role, RoleDisplay, _, _>(
        opts,
        args,
        "roles",
        |client, params, limit| async move {
            collect_items(all_roles(&*client, params), limit).await
        },
    )
    .await
}

/// Run the role get command
pub async fn get(opts: &GlobalOptions, role_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let role = ctx.client.get_role(role_id).await?;
    print_detail(&role, &detail_lines(&role), ctx.format)
}

/// Run the role create command
pub async fn create(
    opts: &GlobalOptions,
    name: &str,
    description: Option<String>,
    permissions: Vec<String>,
) -> Result<()> {
    let permissions = clean_permissions(permissions);
    if permissions.is_empty() {
        return Err(Error::InvalidInput(
            "A role needs at least one permission. See `awvs role permissions`.".to_string(),
        ));
    }

    let ctx = CommandContext::new(opts)?;

    let request = RoleCreate {
        name: name.to_string(),
        description: description.unwrap_or_default(),
        permissions,
    };
    let role = ctx.client.create_role(request).await?;

    if ctx.format != OutputFormat::Json {
        eprintln!("{} Created role {}", "✓".green(), role.name.bold());
    }
    print_detail(&role, &detail_lines(&role), ctx.format)
}

/// Run the role update command
pub async fn update(
    opts: &GlobalOptions,
    role_id: &str,
    name: Option<String>,
    description: Option<String>,
    permissions: Option<Vec<String>>,
) -> Result<()> {
    let update = RoleUpdate {
        name,
        description,
        permissions: permissions.map(clean_permissions),
    };
    if update.is_empty() {
        return Err(Error::InvalidInput(
            "Nothing to update. Pass --name, --description, or --permissions.".to_string(),
        ));
    }

    let ctx = CommandContext::new(opts)?;
    ctx.client.update_role(role_id, update).await?;

    let role = ctx.client.get_role(role_id).await?;
    print_detail(&role, &detail_lines(&role), ctx.format)
}

/// Run the role delete command
pub async fn delete(opts: &GlobalOptions, role_id: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let label = if yes {
        role_id.to_string()
    } else {
        ctx.client.get_role(role_id).await?.name
    };
    if !confirm_delete("role", &label, yes)? {
        return Ok(());
    }

    ctx.client.delete_role(role_id).await?;
    print_deleted(ctx.format, "role", role_id)
}

/// Run the role permissions command
pub async fn permissions(opts: &GlobalOptions, args: &LimitArgs) -> Result<()> {
    run_list_command::<Permission, PermissionDisplay, _, _>(
        opts,
        &ListArgs::from(args),
        "permissions",
        |client, _, _| async move {
            let mut permissions = client.list_permissions().await?;
            permissions.sort_by(|a, b| (&a.category, &a.name).cmp(&(&b.category, &b.name)));
            Ok(permissions)
        },
    )
    .await
}

/// Trim names and drop blanks left by stray commas.
fn clean_permissions(permissions: Vec<String>) -> Vec<String> {
    permissions
        .into_iter()
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

fn detail_lines(role: &Role) -> Vec<(&'static str, String)> {
    let stats = role.stats.clone().unwrap_or_default();

    vec![
        ("Role ID", role.role_id.clone()),
        ("Name", role.name.clone()),
        ("Description", role.description.clone()),
        ("Created", role.created.clone().unwrap_or_default()),
        ("Permissions", role.permissions.join(", ")),
        ("Users", stats.user_count.to_string()),
        ("Groups", stats.group_count.to_string()),
        ("All users", stats.all_user_count.to_string()),
    ]
}
