//! User management commands

use clap::Args;
use colored::Colorize;
use dialoguer::Password;
use dialoguer::theme::ColorfulTheme;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{confirm_delete, print_deleted, run_list_command};
use crate::cli::{CommandContext, ListArgs, OutputFormat};
use crate::client::AdminApi;
use crate::client::helpers::{all_users, collect_items};
use crate::client::models::{RoleMapping, User, UserCreate, UserUpdate, hash_password};
use crate::error::{Error, Result};
use crate::models::UserDisplay;
use crate::output::print_detail;

/// Arguments for `user create`
#[derive(Args, Debug)]
pub struct UserCreateArgs {
    /// Email address (login)
    pub email: String,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Password (prompted for when omitted)
    #[arg(long, env = "AWVS_USER_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Role mappings as a JSON array
    #[arg(long)]
    pub role_mappings: Option<String>,

    /// Create the account disabled
    #[arg(long)]
    pub disabled: bool,

    /// Email the user an invitation
    #[arg(long)]
    pub send_email: bool,
}

/// Arguments for `user update`
#[derive(Args, Debug)]
pub struct UserUpdateArgs {
    /// User ID
    pub user_id: String,

    /// New email address
    #[arg(long)]
    pub email: Option<String>,

    /// New first name
    #[arg(long)]
    pub first_name: Option<String>,

    /// New last name
    #[arg(long)]
    pub last_name: Option<String>,

    /// Replace role mappings (JSON array)
    #[arg(long)]
    pub role_mappings: Option<String>,

    /// Enable the account
    #[arg(long, conflicts_with = "disable")]
    pub enable: bool,

    /// Disable the account
    #[arg(long)]
    pub disable: bool,
}

impl UserUpdateArgs {
    fn to_update(&self) -> Result<UserUpdate> {
        let enabled = match (self.enable, self.disable) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };

        Ok(UserUpdate {
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            enabled,
            role_mappings: self
                .role_mappings
                .as_deref()
                .map(parse_role_mappings)
                .transpose()?,
        })
    }
}

/// Run the user list command
pub async fn list(opts: &GlobalOptions, args: &ListArgs) -> Result<()> {
    run_list_command::<User, UserDisplay, _, _>(
        opts,
        args,
        "users",
        |client, params, limit| async move {
            collect_items(all_users(&*client, params), limit).await
        },
    )
    .await
}

/// Run the user get command
pub async fn get(opts: &GlobalOptions, user_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let user = ctx.client.get_user(user_id).await?;
    print_detail(&user, &detail_lines(&user), ctx.format)
}

/// Run the user create command
pub async fn create(opts: &GlobalOptions, args: &UserCreateArgs) -> Result<()> {
    let role_mappings = args
        .role_mappings
        .as_deref()
        .map(parse_role_mappings)
        .transpose()?
        .unwrap_or_default();

    let ctx = CommandContext::new(opts)?;

    let password = match args.password {
        Some(ref password) => password.clone(),
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Password for {}", args.email))
            .with_confirmation("Repeat password", "Passwords do not match")
            .interact()?,
    };

    let request = UserCreate {
        email: args.email.clone(),
        first_name: args.first_name.clone(),
        last_name: args.last_name.clone(),
        password: hash_password(&password),
        enabled: !args.disabled,
        role_mappings,
    };
    let user = ctx.client.create_user(request, args.send_email).await?;

    if ctx.format != OutputFormat::Json {
        eprintln!("{} Created user {}", "✓".green(), user.email.bold());
    }
    print_detail(&user, &detail_lines(&user), ctx.format)
}

/// Run the user update command
pub async fn update(opts: &GlobalOptions, args: &UserUpdateArgs) -> Result<()> {
    let update = args.to_update()?;
    if update.is_empty() {
        return Err(Error::InvalidInput(
            "Nothing to update. Pass at least one field to change.".to_string(),
        ));
    }

    let ctx = CommandContext::new(opts)?;
    ctx.client.update_user(&args.user_id, update).await?;

    let user = ctx.client.get_user(&args.user_id).await?;
    print_detail(&user, &detail_lines(&user), ctx.format)
}

/// Run the user delete command
pub async fn delete(opts: &GlobalOptions, user_id: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let label = if yes {
        user_id.to_string()
    } else {
        ctx.client.get_user(user_id).await?.email
    };
    if !confirm_delete("user", &label, yes)? {
        return Ok(());
    }

    ctx.client.delete_user(user_id).await?;
    print_deleted(ctx.format, "user", user_id)
}

/// Parse role mappings given as a JSON array of role mapping objects.
pub(crate) fn parse_role_mappings(json: &str) -> Result<Vec<RoleMapping>> {
    serde_json::from_str(json)
        .map_err(|e| Error::InvalidInput(format!("Invalid role mappings JSON: {}", e)))
}

/// One line per mapping: role, then its target scope.
pub(crate) fn format_role_mapping(mapping: &RoleMapping) -> String {
    let scope = if mapping.access_all_targets {
        "all targets".to_string()
    } else {
        format!("{} groups", mapping.target_group_ids.len())
    };
    match mapping.role_mapping_id {
        Some(ref id) => format!("{}: {} ({})", id, mapping.role_id, scope),
        None => format!("{} ({})", mapping.role_id, scope),
    }
}

fn detail_lines(user: &User) -> Vec<(&'static str, String)> {
    let mappings = user
        .role_mappings
        .iter()
        .map(format_role_mapping)
        .collect::<Vec<_>>()
        .join(", ");

    vec![
        ("User ID", user.user_id.clone()),
        ("Email", user.email.clone()),
        ("Name", user.full_name()),
        ("Enabled", if user.enabled { "yes" } else { "no" }.to_string()),
        ("Locked", if user.locked { "yes" } else { "no" }.to_string()),
        ("2FA", if user.totp_enabled { "yes" } else { "no" }.to_string()),
        ("Expires", user.expiration_date.clone().unwrap_or_default()),
        ("Roles", mappings),
    ]
}
