//! Target and target group display models

use chrono::Utc;
use serde::Serialize;
use tabled::Tabled;

use super::common::{or_dash, truncate_string};
use crate::client::models::{Criticality, Target, TargetGroup};
use crate::output::formatters::{format_relative_time, format_severity_counts};

/// Target display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TargetDisplay {
    #[tabled(rename = "TARGET ID")]
    pub id: String,

    #[tabled(rename = "ADDRESS")]
    pub address: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,

    #[tabled(rename = "CRITICALITY")]
    pub criticality: String,

    /// Findings from the last scan (e.g. "0C 2H 5M 1L 3I")
    #[tabled(rename = "FINDINGS")]
    pub findings: String,

    #[tabled(rename = "LAST SCAN")]
    pub last_scan: String,
}

impl From<Target> for TargetDisplay {
    fn from(target: Target) -> Self {
        Self {
            findings: format_severity_counts(target.severity_counts.as_ref()),
            last_scan: target
                .last_scan_date
                .as_ref()
                .map(|dt| format_relative_time(dt, Utc::now()))
                .unwrap_or_else(|| "--".to_string()),
            criticality: Criticality::label(target.criticality).to_string(),
            description: truncate_string(&target.description, 40),
            address: target.address,
            id: target.target_id,
        }
    }
}

/// Target group display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TargetGroupDisplay {
    #[tabled(rename = "GROUP ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "TARGETS")]
    pub targets: u32,

    #[tabled(rename = "FINDINGS")]
    pub findings: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,
}

impl From<TargetGroup> for TargetGroupDisplay {
    fn from(group: TargetGroup) -> Self {
        Self {
            id: group.group_id,
            name: group.name,
            targets: group.target_count,
            findings: format_severity_counts(group.vuln_count.as_ref()),
            description: or_dash(group.description.as_deref()),
        }
    }
}
