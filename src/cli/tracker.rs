//! Issue tracker commands

use colored::Colorize;
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{confirm_delete, print_deleted, run_list_command};
use crate::cli::{CommandContext, LimitArgs, ListArgs, OutputFormat};
use crate::client::AdminApi;
use crate::client::models::{
    ConnectionStatus, IssueTracker, IssueTrackerConfig, IssueTrackerRequest,
};
use crate::error::{Error, Result};
use crate::models::IssueTrackerDisplay;
use crate::output::{print_detail, print_json};

const MASK: &str = "********";

/// Run the tracker list command
pub async fn list(opts: &GlobalOptions, args: &LimitArgs) -> Result<()> {
    run_list_command::<IssueTracker, IssueTrackerDisplay, _, _>(
        opts,
        &ListArgs::from(args),
        "issue trackers",
        |client, _, _| async move { client.list_issue_trackers().await },
    )
    .await
}

/// Run the tracker get command
pub async fn get(opts: &GlobalOptions, tracker_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let tracker = ctx.client.get_issue_tracker(tracker_id).await?;
    print_tracker(&ctx, tracker)
}

/// Run the tracker create command
pub async fn create(opts: &GlobalOptions, name: &str, config_file: &str) -> Result<()> {
    let config = read_config(config_file)?;

    let ctx = CommandContext::new(opts)?;
    let tracker = ctx
        .client
        .create_issue_tracker(IssueTrackerRequest {
            name: name.to_string(),
            config,
        })
        .await?;

    if ctx.format != OutputFormat::Json {
        eprintln!("{} Created issue tracker {}", "✓".green(), tracker.name.bold());
    }
    print_tracker(&ctx, tracker)
}

/// Run the tracker update command
///
/// The server replaces the whole tracker, so an unchanged name or config is
/// carried over from the current one.
pub async fn update(
    opts: &GlobalOptions,
    tracker_id: &str,
    name: Option<String>,
    config_file: Option<&str>,
) -> Result<()> {
    if name.is_none() && config_file.is_none() {
        return Err(Error::InvalidInput(
            "Nothing to update. Pass --name and/or --config-file.".to_string(),
        ));
    }
    let config = config_file.map(read_config).transpose()?;

    let ctx = CommandContext::new(opts)?;
    let current = ctx.client.get_issue_tracker(tracker_id).await?;
    let request = IssueTrackerRequest {
        name: name.unwrap_or(current.name),
        config: config.unwrap_or(current.config),
    };

    ctx.client.update_issue_tracker(tracker_id, request).await?;

    let tracker = ctx.client.get_issue_tracker(tracker_id).await?;
    print_tracker(&ctx, tracker)
}

/// Run the tracker delete command
pub async fn delete(opts: &GlobalOptions, tracker_id: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let label = if yes {
        tracker_id.to_string()
    } else {
        ctx.client.get_issue_tracker(tracker_id).await?.name
    };
    if !confirm_delete("issue tracker", &label, yes)? {
        return Ok(());
    }

    ctx.client.delete_issue_tracker(tracker_id).await?;
    print_deleted(ctx.format, "issue tracker", tracker_id)
}

/// Run the tracker test command
pub async fn test(
    opts: &GlobalOptions,
    tracker_id: Option<&str>,
    config_file: Option<&str>,
) -> Result<()> {
    let file_config = config_file.map(read_config).transpose()?;

    let ctx = CommandContext::new(opts)?;
    let status = check_connection(&*ctx.client, tracker_id, file_config).await?;

    match ctx.format {
        OutputFormat::Json => print_json(&status)?,
        _ if status.success => println!("{} Connection succeeded", "✓".green()),
        _ => println!(
            "{} Connection failed: {}",
            "✗".red(),
            status.message.as_deref().unwrap_or("no details from server")
        ),
    }

    if status.success {
        Ok(())
    } else {
        Err(Error::Other("Issue tracker connection check failed".to_string()))
    }
}

/// Check connectivity for a stored tracker or for unsaved settings.
async fn check_connection<C: AdminApi + ?Sized>(
    client: &C,
    tracker_id: Option<&str>,
    file_config: Option<IssueTrackerConfig>,
) -> Result<ConnectionStatus> {
    let config = match (file_config, tracker_id) {
        (Some(config), _) => config,
        (None, Some(id)) => {
            debug!("Loading settings of issue tracker {}", id);
            client.get_issue_tracker(id).await?.config
        }
        (None, None) => {
            return Err(Error::InvalidInput(
                "Pass a tracker ID or --config-file".to_string(),
            ));
        }
    };

    client.check_issue_tracker_connection(&config).await
}

fn read_config(path: &str) -> Result<IssueTrackerConfig> {
    let json = std::fs::read_to_string(path).map_err(|e| {
        Error::InvalidInput(format!("Cannot read config file '{}': {}", path, e))
    })?;
    IssueTrackerConfig::from_json(&json)
}

/// Hide stored credentials before printing.
fn redact(mut tracker: IssueTracker) -> IssueTracker {
    if let Some(auth) = tracker.config.auth.as_mut() {
        if auth.password.is_some() {
            auth.password = Some(MASK.to_string());
        }
    }
    tracker
}

fn print_tracker(ctx: &CommandContext, tracker: IssueTracker) -> Result<()> {
    let tracker = redact(tracker);
    let config = &tracker.config;

    let lines = [
        ("Tracker ID", tracker.issue_tracker_id.clone()),
        ("Name", tracker.name.clone()),
        ("Platform", config.platform.clone()),
        ("URL", config.url.clone()),
        (
            "Auth",
            config
                .auth
                .as_ref()
                .map(|a| match a.user {
                    Some(ref user) => format!("{} ({})", a.kind, user),
                    None => a.kind.clone(),
                })
                .unwrap_or_default(),
        ),
        (
            "Project",
            config
                .project
                .as_ref()
                .and_then(|p| p.project_name.clone().or_else(|| p.project_id.clone()))
                .unwrap_or_default(),
        ),
        (
            "Issue type",
            config
                .issue_type
                .as_ref()
                .and_then(|t| t.issue_name.clone().or_else(|| t.issue_id.clone()))
                .unwrap_or_default(),
        ),
    ];
    print_detail(&tracker, &lines, ctx.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockAcunetixClient;
    use crate::error::ApiError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const JIRA: &str = r#"{
        "platform": "jira",
        "url": "https://jira.example.com",
        "auth": {"kind": "http_basic", "user": "bot", "password": "s3cret"},
        "project": {"project_id": "10000", "project_name": "SEC"}
    }"#;

    #[test]
    fn test_read_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(JIRA.as_bytes()).unwrap();

        let config = read_config(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.platform, "jira");
    }

    #[test]
    fn test_read_config_missing_file() {
        assert!(matches!(
            read_config("/nonexistent/awvs/tracker.json"),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_redact_masks_password() {
        let tracker = IssueTracker {
            issue_tracker_id: "it1".to_string(),
            name: "Jira".to_string(),
            config: IssueTrackerConfig::from_json(JIRA).unwrap(),
        };

        let redacted = redact(tracker);
        let auth = redacted.config.auth.unwrap();
        assert_eq!(auth.password.as_deref(), Some(MASK));
        assert_eq!(auth.user.as_deref(), Some("bot"));
    }

    #[tokio::test]
    async fn test_check_connection_with_file_settings() {
        let client = MockAcunetixClient::new();
        let config = IssueTrackerConfig::from_json(JIRA).unwrap();

        let status = check_connection(&client, None, Some(config)).await.unwrap();
        assert!(status.success);
    }

    #[tokio::test]
    async fn test_check_connection_unknown_tracker() {
        let client = MockAcunetixClient::new();

        let result = check_connection(&client, Some("missing"), None).await;
        assert!(matches!(result, Err(Error::Api(ApiError::NotFound(_)))));
        assert_eq!(client.call_counts().await.total(), 1);
    }
}
