//! Acunetix API data models
//!
//! This module contains the domain types exchanged with the Acunetix REST API.
//! Models are organized by resource type for easy discovery.

// Allow unused imports - we export all API types for completeness,
// even if not all are currently used by CLI commands.
#![allow(unused_imports)]

mod common;
mod excluded_hours;
mod info;
mod issue_tracker;
mod report;
mod role;
mod scan;
mod target;
mod user;
mod vulnerability;

// Re-export all models for convenient access
pub use common::{ReportSourceType, SeverityCounts, severity_label};
pub use excluded_hours::{
    EXCLUSION_MATRIX_LEN, ExcludedHoursProfile, ExcludedHoursRequest, validate_exclusion_matrix,
};
pub use info::ServerInfo;
pub use issue_tracker::{
    ConnectionStatus, IssueTracker, IssueTrackerAuth, IssueTrackerConfig, IssueTrackerIssueType,
    IssueTrackerProject, IssueTrackerProxy, IssueTrackerRequest,
};
pub use report::{
    Export, ExportCreate, ExportSource, ExportType, Report, ReportCreate, ReportCreateSource,
    ReportSource, ReportTemplate,
};
pub use role::{
    Permission, Role, RoleCreate, RoleStats, RoleUpdate, UserGroup, UserGroupCreate,
    UserGroupStats, UserGroupUpdate,
};
pub use scan::{
    FULL_SCAN_PROFILE_ID, Scan, ScanCreate, ScanResult, ScanSchedule, ScanSession, ScanTarget,
    ScanningProfile,
};
pub use target::{
    Criticality, Target, TargetCreate, TargetGroup, TargetGroupRequest, TargetUpdate,
};
pub use user::{RoleMapping, User, UserCreate, UserUpdate, hash_password};
pub use vulnerability::{
    Vulnerability, VulnerabilityDetail, VulnerabilityReference, VulnerabilityStatus,
    VulnerabilityStatusUpdate,
};
