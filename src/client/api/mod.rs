//! API trait definitions split by responsibility
//!
//! This module organizes the Acunetix API surface into focused sub-traits:
//! - [`TargetApi`] - Targets and target groups
//! - [`ScanApi`] - Scans, scan results, and scanning profiles
//! - [`ReportingApi`] - Reports, report templates, and exports
//! - [`VulnerabilityApi`] - Vulnerability listing and triage
//! - [`AdminApi`] - Server info, users, excluded hours, issue trackers
//!
//! The [`AcunetixApi`](super::AcunetixApi) super-trait combines all five.

mod admin;
mod reporting;
mod scan;
mod target;
mod vulnerability;

pub use admin::AdminApi;
pub use reporting::ReportingApi;
pub use scan::ScanApi;
pub use target::TargetApi;
pub use vulnerability::VulnerabilityApi;
