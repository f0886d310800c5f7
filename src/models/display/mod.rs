//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names and serialization.

mod admin;
mod common;
mod report;
mod scan;
mod target;
mod user;
mod vulnerability;

pub use admin::{ExcludedHoursDisplay, IssueTrackerDisplay, format_offset};
pub use report::{ExportTypeDisplay, ReportDisplay, ReportTemplateDisplay};
pub use scan::{ScanDisplay, ScanResultDisplay, ScanningProfileDisplay};
pub use target::{TargetDisplay, TargetGroupDisplay};
pub use user::{PermissionDisplay, RoleDisplay, UserDisplay, UserGroupDisplay};
pub use vulnerability::{StatusUpdateDisplay, VulnerabilityDisplay};
