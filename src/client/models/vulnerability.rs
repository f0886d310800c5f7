//! Vulnerability models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A vulnerability as returned by listing endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vulnerability {
    /// Vulnerability ID
    pub vuln_id: String,

    /// Vulnerability type name
    #[serde(default)]
    pub vt_name: String,

    /// Severity (0 info .. 4 critical)
    #[serde(default)]
    pub severity: i32,

    /// Triage status
    #[serde(default)]
    pub status: String,

    /// Affected URL
    #[serde(default)]
    pub affects_url: String,

    /// Affected parameter or detail
    #[serde(default)]
    pub affects_detail: String,

    /// Confidence percentage
    #[serde(default)]
    pub confidence: u32,

    /// Owning target
    #[serde(default)]
    pub target_id: String,

    /// Owning target description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_seen: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<DateTime<Utc>>,
}

/// Full vulnerability record from `GET /vulnerabilities/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VulnerabilityDetail {
    #[serde(flatten)]
    pub summary: Vulnerability,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub long_description: String,

    #[serde(default)]
    pub impact: String,

    #[serde(default)]
    pub recommendation: String,

    /// Scanner-specific details (HTML)
    #[serde(default)]
    pub details: String,

    /// Raw HTTP request that triggered the finding
    #[serde(default)]
    pub request: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cvss_score: Option<f64>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub references: Vec<VulnerabilityReference>,
}

/// External reference link
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VulnerabilityReference {
    #[serde(default)]
    pub rel: String,
    #[serde(default)]
    pub href: String,
}

/// Triage status values accepted by `PUT /vulnerabilities/{id}/status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum VulnerabilityStatus {
    Open,
    Fixed,
    Ignored,
    FalsePositive,
}

impl std::fmt::Display for VulnerabilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            VulnerabilityStatus::Open => "open",
            VulnerabilityStatus::Fixed => "fixed",
            VulnerabilityStatus::Ignored => "ignored",
            VulnerabilityStatus::FalsePositive => "false_positive",
        };
        write!(f, "{}", s)
    }
}

/// Request body for `PUT /vulnerabilities/{id}/status`
#[derive(Debug, Clone, Serialize)]
pub struct VulnerabilityStatusUpdate {
    pub status: VulnerabilityStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}
