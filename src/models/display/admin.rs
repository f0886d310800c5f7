//! Excluded-hours and issue tracker display models

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{EXCLUSION_MATRIX_LEN, ExcludedHoursProfile, IssueTracker};

/// Excluded-hours profile display model.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ExcludedHoursDisplay {
    #[tabled(rename = "PROFILE ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    /// Minutes east of UTC
    #[tabled(rename = "UTC OFFSET")]
    pub time_offset: String,

    #[tabled(rename = "EXCLUDED")]
    pub excluded: String,
}

impl From<ExcludedHoursProfile> for ExcludedHoursDisplay {
    fn from(profile: ExcludedHoursProfile) -> Self {
        Self {
            excluded: format!("{}/{} h", profile.excluded_count(), EXCLUSION_MATRIX_LEN),
            time_offset: format_offset(profile.time_offset),
            id: profile.excluded_hours_id,
            name: profile.name,
        }
    }
}

/// `+02:00` style offset from minutes
pub fn format_offset(minutes: i32) -> String {
    let sign = if minutes < 0 { '-' } else { '+' };
    let minutes = minutes.abs();
    format!("{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
}

/// Issue tracker display model.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct IssueTrackerDisplay {
    #[tabled(rename = "TRACKER ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "PLATFORM")]
    pub platform: String,

    #[tabled(rename = "URL")]
    pub url: String,

    #[tabled(rename = "PROJECT")]
    pub project: String,
}

impl From<IssueTracker> for IssueTrackerDisplay {
    fn from(tracker: IssueTracker) -> Self {
        let project = tracker
            .config
            .project
            .as_ref()
            .and_then(|p| p.project_name.clone().or_else(|| p.project_id.clone()))
            .unwrap_or_else(|| "--".to_string());

        Self {
            id: tracker.issue_tracker_id,
            name: tracker.name,
            platform: tracker.config.platform,
            url: tracker.config.url,
            project,
        }
    }
}
