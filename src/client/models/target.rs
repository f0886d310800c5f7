//! Target and target group models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::SeverityCounts;

/// A scan target (web site or API address)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    /// Target ID
    pub target_id: String,

    /// Target address (URL)
    pub address: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Business criticality (30 critical, 20 high, 10 normal, 0 low)
    #[serde(default)]
    pub criticality: i32,

    /// Target type (`default`, `demo`, `network`)
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,

    /// Highest threat level found
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threat: Option<i32>,

    /// When the target was last scanned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_scan_date: Option<DateTime<Utc>>,

    /// Most recent scan ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_scan_id: Option<String>,

    /// Status of the most recent scan session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_scan_session_status: Option<String>,

    /// Vulnerability counts from the most recent scan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity_counts: Option<SeverityCounts>,
}

/// Target business criticality
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Criticality {
    Critical,
    High,
    #[default]
    Normal,
    Low,
}

impl Criticality {
    /// Numeric value used on the wire
    pub fn value(&self) -> i32 {
        match self {
            Criticality::Critical => 30,
            Criticality::High => 20,
            Criticality::Normal => 10,
            Criticality::Low => 0,
        }
    }

    /// Label for a numeric criticality
    pub fn label(value: i32) -> &'static str {
        match value {
            v if v >= 30 => "Critical",
            v if v >= 20 => "High",
            v if v >= 10 => "Normal",
            _ => "Low",
        }
    }
}

/// Request body for `POST /targets`
#[derive(Debug, Clone, Serialize)]
pub struct TargetCreate {
    pub address: String,
    pub description: String,
    #[serde(rename = "type")]
    pub target_type: String,
    pub criticality: i32,
}

impl TargetCreate {
    pub fn new(address: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            description: description.into(),
            target_type: "default".to_string(),
            criticality: Criticality::Normal.value(),
        }
    }

    pub fn criticality(mut self, criticality: Criticality) -> Self {
        self.criticality = criticality.value();
        self
    }
}

/// Request body for `PATCH /targets/{id}`; unset fields are left unchanged
#[derive(Debug, Clone, Default, Serialize)]
pub struct TargetUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criticality: Option<i32>,
}

impl TargetUpdate {
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.criticality.is_none()
    }
}

/// A named group of targets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetGroup {
    /// Group ID
    pub group_id: String,

    /// Group name
    pub name: String,

    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Number of targets in the group
    #[serde(default)]
    pub target_count: u32,

    /// Vulnerability counts across the group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vuln_count: Option<SeverityCounts>,
}

/// Request body for creating or updating a target group
#[derive(Debug, Clone, Default, Serialize)]
pub struct TargetGroupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
