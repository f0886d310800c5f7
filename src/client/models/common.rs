//! Types shared by several resources

use serde::{Deserialize, Serialize};

/// Per-severity vulnerability counts attached to targets, groups, and scan sessions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    #[serde(default)]
    pub critical: u32,
    #[serde(default)]
    pub high: u32,
    #[serde(default)]
    pub medium: u32,
    #[serde(default)]
    pub low: u32,
    #[serde(default)]
    pub info: u32,
}

impl SeverityCounts {
    /// Sum of all severities
    pub fn total(&self) -> u32 {
        self.critical + self.high + self.medium + self.low + self.info
    }
}

/// Human label for a numeric Acunetix severity (0 = info .. 4 = critical)
pub fn severity_label(severity: i32) -> &'static str {
    match severity {
        4 => "Critical",
        3 => "High",
        2 => "Medium",
        1 => "Low",
        0 => "Info",
        _ => "Unknown",
    }
}

/// What a report or export is generated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum ReportSourceType {
    AllVulnerabilities,
    Targets,
    Groups,
    Scans,
    ScanResult,
    Vulnerabilities,
    ScanVulnerabilities,
    ScanPair,
    ScanResultPair,
}

impl std::fmt::Display for ReportSourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ReportSourceType::AllVulnerabilities => "all_vulnerabilities",
            ReportSourceType::Targets => "targets",
            ReportSourceType::Groups => "groups",
            ReportSourceType::Scans => "scans",
            ReportSourceType::ScanResult => "scan_result",
            ReportSourceType::Vulnerabilities => "vulnerabilities",
            ReportSourceType::ScanVulnerabilities => "scan_vulnerabilities",
            ReportSourceType::ScanPair => "scan_pair",
            ReportSourceType::ScanResultPair => "scan_result_pair",
        };
        write!(f, "{}", s)
    }
}
