//! Scan models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::SeverityCounts;
use crate::client::poll::{JobState, Snapshot};

/// Built-in "Full Scan" scanning profile
pub const FULL_SCAN_PROFILE_ID: &str = "11111111-1111-1111-1111-111111111111";

/// A scan definition and its most recent session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scan {
    /// Scan ID
    pub scan_id: String,

    /// Target being scanned
    #[serde(default)]
    pub target_id: String,

    /// Scanning profile ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,

    /// Scanning profile name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_name: Option<String>,

    /// Embedded target summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<ScanTarget>,

    /// Latest run of this scan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_session: Option<ScanSession>,

    /// Schedule the scan was created with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<ScanSchedule>,

    /// Next scheduled run, for recurring scans
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_run: Option<DateTime<Utc>>,
}

impl Scan {
    /// Raw status of the current session, or `"scheduled"` before the first run
    pub fn status(&self) -> &str {
        self.current_session
            .as_ref()
            .map(|s| s.status.as_str())
            .filter(|s| !s.is_empty())
            .unwrap_or("scheduled")
    }

    /// Result ID of the current session, used to list its vulnerabilities
    pub fn scan_session_id(&self) -> Option<&str> {
        self.current_session
            .as_ref()
            .and_then(|s| s.scan_session_id.as_deref())
    }

    /// Address of the scanned target, when embedded in the response
    pub fn target_address(&self) -> Option<&str> {
        self.target.as_ref().map(|t| t.address.as_str())
    }
}

impl Snapshot for Scan {
    fn job_state(&self) -> JobState {
        JobState::from_status(self.status())
    }
}

/// Target summary embedded in a scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanTarget {
    pub address: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub criticality: i32,
}

/// One run of a scan
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanSession {
    /// Result ID of this run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_session_id: Option<String>,

    /// Session status (`scheduled`, `queued`, `starting`, `processing`,
    /// `aborting`, `aborted`, `completed`, `failed`)
    #[serde(default)]
    pub status: String,

    /// Progress percentage
    #[serde(default)]
    pub progress: u32,

    /// When the run started
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,

    /// Highest threat level found
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threat: Option<i32>,

    /// Vulnerability counts found by this run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity_counts: Option<SeverityCounts>,
}

/// Scan schedule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanSchedule {
    /// Disable the schedule
    #[serde(default)]
    pub disable: bool,

    /// Start time; `None` starts immediately
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,

    /// Interpret start time in the server's time zone
    #[serde(default)]
    pub time_sensitive: bool,
}

/// Request body for `POST /scans`
#[derive(Debug, Clone, Serialize)]
pub struct ScanCreate {
    pub target_id: String,
    pub profile_id: String,
    pub schedule: ScanSchedule,
}

impl ScanCreate {
    /// Scan `target_id` with `profile_id`, starting immediately
    pub fn immediate(target_id: impl Into<String>, profile_id: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
            profile_id: profile_id.into(),
            schedule: ScanSchedule::default(),
        }
    }
}

/// A past run of a scan, from `GET /scans/{id}/results`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    pub result_id: String,
    #[serde(default)]
    pub scan_id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

/// A scanning profile (set of checks)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanningProfile {
    pub profile_id: String,
    pub name: String,
    /// User-defined (as opposed to built-in)
    #[serde(default)]
    pub custom: bool,
    #[serde(default)]
    pub sort_order: i32,
    /// Checks excluded from this profile
    #[serde(default)]
    pub checks: Vec<String>,
}
