//! Scan display models

use serde::Serialize;
use tabled::Tabled;

use super::common::or_dash;
use crate::client::models::{Scan, ScanResult, ScanningProfile};
use crate::output::formatters::{format_datetime, format_elapsed, format_severity_counts};

/// Scan display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ScanDisplay {
    #[tabled(rename = "SCAN ID")]
    pub id: String,

    #[tabled(rename = "TARGET")]
    pub target: String,

    #[tabled(rename = "PROFILE")]
    pub profile: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "PROGRESS")]
    pub progress: String,

    #[tabled(rename = "FINDINGS")]
    pub findings: String,

    #[tabled(rename = "STARTED")]
    pub started: String,
}

impl From<Scan> for ScanDisplay {
    fn from(scan: Scan) -> Self {
        let session = scan.current_session.as_ref();
        let target = scan
            .target_address()
            .map(str::to_string)
            .unwrap_or_else(|| scan.target_id.clone());

        Self {
            status: scan.status().to_string(),
            progress: session
                .map(|s| format!("{}%", s.progress))
                .unwrap_or_else(|| "--".to_string()),
            findings: format_severity_counts(session.and_then(|s| s.severity_counts.as_ref())),
            started: format_datetime(session.and_then(|s| s.start_date.as_ref())),
            profile: or_dash(scan.profile_name.as_deref()),
            target,
            id: scan.scan_id,
        }
    }
}

/// One past run of a scan.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ScanResultDisplay {
    #[tabled(rename = "RESULT ID")]
    pub id: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "STARTED")]
    pub started: String,

    #[tabled(rename = "DURATION")]
    pub duration: String,
}

impl From<ScanResult> for ScanResultDisplay {
    fn from(result: ScanResult) -> Self {
        Self {
            started: format_datetime(result.start_date.as_ref()),
            duration: format_elapsed(result.start_date.as_ref(), result.end_date.as_ref()),
            status: result.status,
            id: result.result_id,
        }
    }
}

/// Scanning profile display model.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ScanningProfileDisplay {
    #[tabled(rename = "PROFILE ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "TYPE")]
    pub kind: String,
}

impl From<ScanningProfile> for ScanningProfileDisplay {
    fn from(profile: ScanningProfile) -> Self {
        Self {
            id: profile.profile_id,
            name: profile.name,
            kind: if profile.custom { "custom" } else { "built-in" }.to_string(),
        }
    }
}
