//! Issue tracker integration models

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Connection settings shared by stored trackers and create/update requests
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueTrackerConfig {
    /// `github`, `gitlab`, `jira`, `tfs`, `bugzilla`, `mantis`, ...
    pub platform: String,

    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<IssueTrackerAuth>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<IssueTrackerProject>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_type: Option<IssueTrackerIssueType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy: Option<IssueTrackerProxy>,

    /// Any platform-specific fields, passed through unchanged
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl IssueTrackerConfig {
    /// Parse tracker settings from the contents of a JSON file.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            Error::InvalidInput(format!("Invalid issue tracker configuration: {}", e))
        })?;

        if config.platform.trim().is_empty() {
            return Err(Error::InvalidInput(
                "Issue tracker configuration needs a 'platform'".to_string(),
            ));
        }
        if config.url.trim().is_empty() {
            return Err(Error::InvalidInput(
                "Issue tracker configuration needs a 'url'".to_string(),
            ));
        }

        Ok(config)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueTrackerAuth {
    /// `cookie`, `http_basic`, `ntlm`, `token`, ...
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueTrackerProject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueTrackerIssueType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueTrackerProxy {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

/// A stored issue tracker integration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueTracker {
    pub issue_tracker_id: String,
    pub name: String,
    #[serde(flatten)]
    pub config: IssueTrackerConfig,
}

/// Request body for creating or replacing an issue tracker
#[derive(Debug, Clone, Serialize)]
pub struct IssueTrackerRequest {
    pub name: String,
    #[serde(flatten)]
    pub config: IssueTrackerConfig,
}

/// Result of `POST /issue_trackers/check_connection`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionStatus {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
