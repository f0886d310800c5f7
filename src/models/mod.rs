//! Display models for CLI output
//!
//! This module converts API response types into CLI-friendly display rows.

pub mod display;

pub use display::{
    ExcludedHoursDisplay, ExportTypeDisplay, IssueTrackerDisplay, PermissionDisplay, ReportDisplay,
    ReportTemplateDisplay, RoleDisplay, ScanDisplay, ScanResultDisplay, ScanningProfileDisplay,
    StatusUpdateDisplay, TargetDisplay, TargetGroupDisplay, UserDisplay, UserGroupDisplay,
    VulnerabilityDisplay,
};
