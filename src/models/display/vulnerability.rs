//! Vulnerability display models

use serde::Serialize;
use tabled::Tabled;

use super::common::truncate_string;
use crate::client::models::{Vulnerability, severity_label};
use crate::output::formatters::format_datetime;

/// Vulnerability display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct VulnerabilityDisplay {
    #[tabled(rename = "VULN ID")]
    pub id: String,

    #[tabled(rename = "SEVERITY")]
    pub severity: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "URL")]
    pub url: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "LAST SEEN")]
    pub last_seen: String,
}

impl From<Vulnerability> for VulnerabilityDisplay {
    fn from(vuln: Vulnerability) -> Self {
        Self {
            severity: severity_label(vuln.severity).to_string(),
            name: truncate_string(&vuln.vt_name, 50),
            url: truncate_string(&vuln.affects_url, 60),
            last_seen: format_datetime(vuln.last_seen.as_ref()),
            status: vuln.status,
            id: vuln.vuln_id,
        }
    }
}

/// Outcome of one status update in `vuln set-status`
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct StatusUpdateDisplay {
    #[tabled(rename = "VULN ID")]
    pub id: String,

    #[tabled(rename = "RESULT")]
    pub result: String,
}
