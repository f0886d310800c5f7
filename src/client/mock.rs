//! Mock Acunetix API client for testing
//!
//! Provides a mock implementation of the API traits for unit testing
//! without making real API calls.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::api::{AdminApi, ReportingApi, ScanApi, TargetApi, VulnerabilityApi};
use super::models::{
    ConnectionStatus, ExcludedHoursProfile, ExcludedHoursRequest, Export, ExportCreate,
    ExportType, IssueTracker, IssueTrackerConfig, IssueTrackerRequest, Permission, Report,
    ReportCreate, ReportTemplate, Role, RoleCreate, RoleMapping, RoleUpdate, Scan, ScanCreate,
    ScanResult, ScanSession, ScanningProfile, ServerInfo, Target, TargetCreate, TargetGroup,
    TargetGroupRequest, TargetUpdate, User, UserCreate, UserGroup, UserGroupCreate,
    UserGroupUpdate, UserUpdate, Vulnerability, VulnerabilityDetail, VulnerabilityStatusUpdate,
};
use super::pagination::{Page, PaginationParams};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Listings are served from in-memory vectors and paged the way the server
/// does it: the cursor is the offset of the next item. `get_scan`,
/// `get_report`, and `get_export` walk through a scripted status sequence,
/// repeating the last status once the script runs out.
///
/// # Example
/// ```ignore
/// let mock = MockAcunetixClient::new()
///     .with_scan_states(&["queued", "processing", "completed"])
///     .await;
///
/// let scan = wait_for_scan(&mock, "s1", Duration::from_millis(1)).await?;
/// assert_eq!(mock.call_counts().await.get_scan, 3);
/// ```
#[derive(Default)]
pub struct MockAcunetixClient {
    /// Targets to page through in list_targets
    targets: Arc<Mutex<Vec<Target>>>,
    /// Groups to page through in list_target_groups
    groups: Arc<Mutex<Vec<TargetGroup>>>,
    /// Scans to page through in list_scans
    scans: Arc<Mutex<Vec<Scan>>>,
    /// Vulnerabilities for both vulnerability listings
    vulnerabilities: Arc<Mutex<Vec<Vulnerability>>>,
    /// Reports to page through in list_reports
    reports: Arc<Mutex<Vec<Report>>>,
    /// Users to page through in list_users
    users: Arc<Mutex<Vec<User>>>,
    /// Roles to page through in list_roles
    roles: Arc<Mutex<Vec<Role>>>,
    /// User groups to page through in list_user_groups
    user_groups: Arc<Mutex<Vec<UserGroup>>>,
    /// Status script for get_scan
    scan_states: Arc<Mutex<VecDeque<String>>>,
    /// Status script for get_report
    report_states: Arc<Mutex<VecDeque<String>>>,
    /// Status script for get_export
    export_states: Arc<Mutex<VecDeque<String>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Error to return on the Nth call overall (1-based)
    fail_on: Arc<Mutex<Option<(usize, ApiError)>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub list_targets: usize,
    pub list_target_groups: usize,
    pub list_scans: usize,
    pub get_scan: usize,
    pub create_scan: usize,
    pub list_scan_vulnerabilities: usize,
    pub list_vulnerabilities: usize,
    pub list_reports: usize,
    pub get_report: usize,
    pub get_export: usize,
    pub list_users: usize,
    pub list_roles: usize,
    pub list_user_groups: usize,
    pub other: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.list_targets
            + self.list_target_groups
            + self.list_scans
            + self.get_scan
            + self.create_scan
            + self.list_scan_vulnerabilities
            + self.list_vulnerabilities
            + self.list_reports
            + self.get_report
            + self.get_export
            + self.list_users
            + self.list_roles
            + self.list_user_groups
            + self.other
    }
}

/// A captured API request for test assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    /// The API method called (e.g., "list_targets", "get_scan")
    pub method: String,
    /// Resource ID(s) if the call addressed one
    pub id: Option<String>,
    /// Cursor sent with a listing call
    pub cursor: Option<String>,
    /// Page size sent with a listing call
    pub limit: Option<usize>,
    /// Filter sent with a listing call
    pub query: Option<String>,
}

/// Build a target with only the identifying fields set.
pub fn mock_target(id: &str) -> Target {
    Target {
        target_id: id.to_string(),
        address: format!("http://{}.example.com", id),
        description: format!("Target {}", id),
        criticality: 10,
        target_type: Some("default".to_string()),
        threat: None,
        last_scan_date: None,
        last_scan_id: None,
        last_scan_session_status: None,
        severity_counts: None,
    }
}

/// Build a scan whose current session has `status`.
pub fn mock_scan(id: &str, status: &str) -> Scan {
    Scan {
        scan_id: id.to_string(),
        target_id: "t1".to_string(),
        profile_id: Some(super::models::FULL_SCAN_PROFILE_ID.to_string()),
        profile_name: Some("Full Scan".to_string()),
        target: None,
        current_session: Some(ScanSession {
            scan_session_id: Some(format!("{}-result", id)),
            status: status.to_string(),
            ..Default::default()
        }),
        schedule: None,
        next_run: None,
    }
}

/// Build a vulnerability with only the identifying fields set.
pub fn mock_vulnerability(id: &str) -> Vulnerability {
    Vulnerability {
        vuln_id: id.to_string(),
        vt_name: "Cross-site Scripting".to_string(),
        severity: 3,
        status: "open".to_string(),
        affects_url: "http://t1.example.com/search".to_string(),
        affects_detail: "q".to_string(),
        confidence: 95,
        target_id: "t1".to_string(),
        target_description: None,
        first_seen: None,
        last_seen: None,
    }
}

/// Build a role with no permissions.
pub fn mock_role(id: &str, name: &str) -> Role {
    Role {
        role_id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        permissions: Vec::new(),
        created: None,
        stats: None,
    }
}

/// Build an empty user group.
pub fn mock_user_group(id: &str, name: &str) -> UserGroup {
    UserGroup {
        user_group_id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        created: None,
        user_ids: Vec::new(),
        role_mappings: Vec::new(),
        stats: None,
    }
}

fn mock_report(id: &str, status: &str) -> Report {
    Report {
        report_id: id.to_string(),
        template_id: "tpl".to_string(),
        template_name: "Developer".to_string(),
        template_type: None,
        source: None,
        status: status.to_string(),
        generation_date: None,
        download: Vec::new(),
    }
}

fn mock_export(id: &str, status: &str) -> Export {
    Export {
        export_id: id.to_string(),
        export_type_id: "type".to_string(),
        template_name: "Export".to_string(),
        source: None,
        status: status.to_string(),
        generation_date: None,
        download: Vec::new(),
    }
}

/// Serve one page of `items` using offset cursors.
fn page_of<T: Clone>(items: &[T], params: &PaginationParams) -> Page<T> {
    let offset = params
        .cursor
        .as_deref()
        .and_then(|c| c.parse::<usize>().ok())
        .unwrap_or(0)
        .min(items.len());
    let end = (offset + params.page_size()).min(items.len());
    let next = (end < items.len()).then(|| end.to_string());
    Page::new(items[offset..end].to_vec(), next)
}

/// Pop the next scripted status, keeping the last one sticky.
fn next_state(states: &mut VecDeque<String>) -> String {
    if states.len() > 1 {
        states.pop_front().unwrap_or_default()
    } else {
        states
            .front()
            .cloned()
            .unwrap_or_else(|| "completed".to_string())
    }
}

fn not_found(what: &str, id: &str) -> crate::error::Error {
    ApiError::NotFound(format!("{} {}", what, id)).into()
}

impl MockAcunetixClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure targets to serve from list_targets.
    pub async fn with_targets(self, targets: Vec<Target>) -> Self {
        *self.targets.lock().await = targets;
        self
    }

    /// Configure target groups to serve from list_target_groups.
    pub async fn with_groups(self, groups: Vec<TargetGroup>) -> Self {
        *self.groups.lock().await = groups;
        self
    }

    /// Configure scans to serve from list_scans.
    pub async fn with_scans(self, scans: Vec<Scan>) -> Self {
        *self.scans.lock().await = scans;
        self
    }

    /// Configure vulnerabilities for both vulnerability listings.
    pub async fn with_vulnerabilities(self, vulns: Vec<Vulnerability>) -> Self {
        *self.vulnerabilities.lock().await = vulns;
        self
    }

    /// Configure users to serve from list_users.
    pub async fn with_users(self, users: Vec<User>) -> Self {
        *self.users.lock().await = users;
        self
    }

    /// Configure roles to serve from list_roles.
    pub async fn with_roles(self, roles: Vec<Role>) -> Self {
        *self.roles.lock().await = roles;
        self
    }

    /// Configure user groups to serve from list_user_groups.
    pub async fn with_user_groups(self, groups: Vec<UserGroup>) -> Self {
        *self.user_groups.lock().await = groups;
        self
    }

    /// Script the statuses returned by successive get_scan calls.
    pub async fn with_scan_states(self, states: &[&str]) -> Self {
        *self.scan_states.lock().await = states.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Script the statuses returned by successive get_report calls.
    pub async fn with_report_states(self, states: &[&str]) -> Self {
        *self.report_states.lock().await = states.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Script the statuses returned by successive get_export calls.
    pub async fn with_export_states(self, states: &[&str]) -> Self {
        *self.export_states.lock().await = states.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Configure an error to return on the Nth API call (1-based).
    pub async fn fail_on_call(self, call: usize, error: ApiError) -> Self {
        *self.fail_on.lock().await = Some((call, error));
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured requests for test assertions.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// Record a call, then return any configured error for it.
    async fn record(
        &self,
        method: &str,
        id: Option<&str>,
        params: Option<&PaginationParams>,
        count: impl FnOnce(&mut CallCounts),
    ) -> Result<()> {
        self.captured_requests.lock().await.push(CapturedRequest {
            method: method.to_string(),
            id: id.map(|s| s.to_string()),
            cursor: params.and_then(|p| p.cursor.clone()),
            limit: params.and_then(|p| p.limit),
            query: params.and_then(|p| p.query.clone()),
        });

        let total = {
            let mut counts = self.call_count.lock().await;
            count(&mut counts);
            counts.total()
        };

        if let Some(e) = self.error.lock().await.take() {
            return Err(e.into());
        }

        let mut fail_on = self.fail_on.lock().await;
        if matches!(*fail_on, Some((n, _)) if n == total) {
            if let Some((_, e)) = fail_on.take() {
                return Err(e.into());
            }
        }

        Ok(())
    }
}

// ============================================================================
// TargetApi Implementation
// ============================================================================

#[async_trait]
impl TargetApi for MockAcunetixClient {
    async fn list_targets(&self, params: &PaginationParams) -> Result<Page<Target>> {
        self.record("list_targets", None, Some(params), |c| c.list_targets += 1)
            .await?;
        Ok(page_of(&self.targets.lock().await, params))
    }

    async fn get_target(&self, target_id: &str) -> Result<Target> {
        self.record("get_target", Some(target_id), None, |c| c.other += 1)
            .await?;
        self.targets
            .lock()
            .await
            .iter()
            .find(|t| t.target_id == target_id)
            .cloned()
            .ok_or_else(|| not_found("Target", target_id))
    }

    async fn create_target(&self, request: TargetCreate) -> Result<Target> {
        self.record("create_target", None, None, |c| c.other += 1)
            .await?;
        let mut targets = self.targets.lock().await;
        let mut target = mock_target(&format!("t{}", targets.len() + 1));
        target.address = request.address;
        target.description = request.description;
        target.criticality = request.criticality;
        targets.push(target.clone());
        Ok(target)
    }

    async fn update_target(&self, target_id: &str, _request: TargetUpdate) -> Result<()> {
        self.record("update_target", Some(target_id), None, |c| c.other += 1)
            .await
    }

    async fn delete_target(&self, target_id: &str) -> Result<()> {
        self.record("delete_target", Some(target_id), None, |c| c.other += 1)
            .await?;
        self.targets.lock().await.retain(|t| t.target_id != target_id);
        Ok(())
    }

    async fn list_target_groups(&self, params: &PaginationParams) -> Result<Page<TargetGroup>> {
        self.record("list_target_groups", None, Some(params), |c| {
            c.list_target_groups += 1
        })
        .await?;
        Ok(page_of(&self.groups.lock().await, params))
    }

    async fn get_target_group(&self, group_id: &str) -> Result<TargetGroup> {
        self.record("get_target_group", Some(group_id), None, |c| c.other += 1)
            .await?;
        self.groups
            .lock()
            .await
            .iter()
            .find(|g| g.group_id == group_id)
            .cloned()
            .ok_or_else(|| not_found("Target group", group_id))
    }

    async fn create_target_group(&self, request: TargetGroupRequest) -> Result<TargetGroup> {
        self.record("create_target_group", None, None, |c| c.other += 1)
            .await?;
        let mut groups = self.groups.lock().await;
        let group = TargetGroup {
            group_id: format!("g{}", groups.len() + 1),
            name: request.name.unwrap_or_default(),
            description: request.description,
            target_count: 0,
            vuln_count: None,
        };
        groups.push(group.clone());
        Ok(group)
    }

    async fn update_target_group(
        &self,
        group_id: &str,
        _request: TargetGroupRequest,
    ) -> Result<()> {
        self.record("update_target_group", Some(group_id), None, |c| {
            c.other += 1
        })
        .await
    }

    async fn delete_target_group(&self, group_id: &str) -> Result<()> {
        self.record("delete_target_group", Some(group_id), None, |c| {
            c.other += 1
        })
        .await?;
        self.groups.lock().await.retain(|g| g.group_id != group_id);
        Ok(())
    }
}

// ============================================================================
// ScanApi Implementation
// ============================================================================

#[async_trait]
impl ScanApi for MockAcunetixClient {
    async fn list_scans(&self, params: &PaginationParams) -> Result<Page<Scan>> {
        self.record("list_scans", None, Some(params), |c| c.list_scans += 1)
            .await?;
        Ok(page_of(&self.scans.lock().await, params))
    }

    async fn get_scan(&self, scan_id: &str) -> Result<Scan> {
        self.record("get_scan", Some(scan_id), None, |c| c.get_scan += 1)
            .await?;
        let status = next_state(&mut *self.scan_states.lock().await);
        Ok(mock_scan(scan_id, &status))
    }

    async fn create_scan(&self, request: ScanCreate) -> Result<Scan> {
        self.record("create_scan", Some(&request.target_id), None, |c| {
            c.create_scan += 1
        })
        .await?;
        let mut scan = mock_scan("s1", "scheduled");
        scan.target_id = request.target_id;
        scan.profile_id = Some(request.profile_id);
        scan.current_session = None;
        Ok(scan)
    }

    async fn abort_scan(&self, scan_id: &str) -> Result<()> {
        self.record("abort_scan", Some(scan_id), None, |c| c.other += 1)
            .await
    }

    async fn delete_scan(&self, scan_id: &str) -> Result<()> {
        self.record("delete_scan", Some(scan_id), None, |c| c.other += 1)
            .await
    }

    async fn list_scan_results(
        &self,
        scan_id: &str,
        params: &PaginationParams,
    ) -> Result<Page<ScanResult>> {
        self.record("list_scan_results", Some(scan_id), Some(params), |c| {
            c.other += 1
        })
        .await?;
        Ok(Page::last(vec![ScanResult {
            result_id: format!("{}-result", scan_id),
            scan_id: scan_id.to_string(),
            status: "completed".to_string(),
            start_date: None,
            end_date: None,
        }]))
    }

    async fn list_scan_vulnerabilities(
        &self,
        scan_id: &str,
        result_id: &str,
        params: &PaginationParams,
    ) -> Result<Page<Vulnerability>> {
        let id = format!("{}/{}", scan_id, result_id);
        self.record("list_scan_vulnerabilities", Some(&id), Some(params), |c| {
            c.list_scan_vulnerabilities += 1
        })
        .await?;
        Ok(page_of(&self.vulnerabilities.lock().await, params))
    }

    async fn list_scanning_profiles(&self) -> Result<Vec<ScanningProfile>> {
        self.record("list_scanning_profiles", None, None, |c| c.other += 1)
            .await?;
        Ok(vec![ScanningProfile {
            profile_id: super::models::FULL_SCAN_PROFILE_ID.to_string(),
            name: "Full Scan".to_string(),
            custom: false,
            sort_order: 1,
            checks: Vec::new(),
        }])
    }
}

// ============================================================================
// ReportingApi Implementation
// ============================================================================

#[async_trait]
impl ReportingApi for MockAcunetixClient {
    async fn list_reports(&self, params: &PaginationParams) -> Result<Page<Report>> {
        self.record("list_reports", None, Some(params), |c| c.list_reports += 1)
            .await?;
        Ok(page_of(&self.reports.lock().await, params))
    }

    async fn get_report(&self, report_id: &str) -> Result<Report> {
        self.record("get_report", Some(report_id), None, |c| c.get_report += 1)
            .await?;
        let status = next_state(&mut *self.report_states.lock().await);
        Ok(mock_report(report_id, &status))
    }

    async fn create_report(&self, request: ReportCreate) -> Result<Report> {
        self.record("create_report", Some(&request.template_id), None, |c| {
            c.other += 1
        })
        .await?;
        Ok(mock_report("r1", "queued"))
    }

    async fn delete_report(&self, report_id: &str) -> Result<()> {
        self.record("delete_report", Some(report_id), None, |c| c.other += 1)
            .await
    }

    async fn list_report_templates(&self) -> Result<Vec<ReportTemplate>> {
        self.record("list_report_templates", None, None, |c| c.other += 1)
            .await?;
        Ok(vec![ReportTemplate {
            template_id: "tpl".to_string(),
            name: "Developer".to_string(),
            group: "Standard Reports".to_string(),
            accepted_sources: vec!["scans".to_string()],
        }])
    }

    async fn list_export_types(&self) -> Result<Vec<ExportType>> {
        self.record("list_export_types", None, None, |c| c.other += 1)
            .await?;
        Ok(Vec::new())
    }

    async fn create_export(&self, request: ExportCreate) -> Result<Export> {
        self.record("create_export", Some(&request.export_id), None, |c| {
            c.other += 1
        })
        .await?;
        Ok(mock_export("e1", "queued"))
    }

    async fn get_export(&self, export_id: &str) -> Result<Export> {
        self.record("get_export", Some(export_id), None, |c| c.get_export += 1)
            .await?;
        let status = next_state(&mut *self.export_states.lock().await);
        Ok(mock_export(export_id, &status))
    }

    async fn delete_export(&self, export_id: &str) -> Result<()> {
        self.record("delete_export", Some(export_id), None, |c| c.other += 1)
            .await
    }
}

// ============================================================================
// VulnerabilityApi Implementation
// ============================================================================

#[async_trait]
impl VulnerabilityApi for MockAcunetixClient {
    async fn list_vulnerabilities(
        &self,
        params: &PaginationParams,
    ) -> Result<Page<Vulnerability>> {
        self.record("list_vulnerabilities", None, Some(params), |c| {
            c.list_vulnerabilities += 1
        })
        .await?;
        Ok(page_of(&self.vulnerabilities.lock().await, params))
    }

    async fn get_vulnerability(&self, vuln_id: &str) -> Result<VulnerabilityDetail> {
        self.record("get_vulnerability", Some(vuln_id), None, |c| c.other += 1)
            .await?;
        let summary = self
            .vulnerabilities
            .lock()
            .await
            .iter()
            .find(|v| v.vuln_id == vuln_id)
            .cloned()
            .ok_or_else(|| not_found("Vulnerability", vuln_id))?;
        Ok(VulnerabilityDetail {
            summary,
            description: String::new(),
            long_description: String::new(),
            impact: String::new(),
            recommendation: String::new(),
            details: String::new(),
            request: String::new(),
            cvss_score: None,
            tags: Vec::new(),
            references: Vec::new(),
        })
    }

    async fn update_vulnerability_status(
        &self,
        vuln_id: &str,
        _update: &VulnerabilityStatusUpdate,
    ) -> Result<()> {
        self.record("update_vulnerability_status", Some(vuln_id), None, |c| {
            c.other += 1
        })
        .await?;
        if self
            .vulnerabilities
            .lock()
            .await
            .iter()
            .any(|v| v.vuln_id == vuln_id)
        {
            Ok(())
        } else {
            Err(not_found("Vulnerability", vuln_id))
        }
    }
}

// ============================================================================
// AdminApi Implementation
// ============================================================================

#[async_trait]
impl AdminApi for MockAcunetixClient {
    async fn server_info(&self) -> Result<ServerInfo> {
        self.record("server_info", None, None, |c| c.other += 1)
            .await?;
        Ok(ServerInfo {
            product_code: "WVSC".to_string(),
            version: "24.1".to_string(),
            ..Default::default()
        })
    }

    async fn list_users(&self, params: &PaginationParams) -> Result<Page<User>> {
        self.record("list_users", None, Some(params), |c| c.list_users += 1)
            .await?;
        Ok(page_of(&self.users.lock().await, params))
    }

    async fn get_user(&self, user_id: &str) -> Result<User> {
        self.record("get_user", Some(user_id), None, |c| c.other += 1)
            .await?;
        self.users
            .lock()
            .await
            .iter()
            .find(|u| u.user_id == user_id)
            .cloned()
            .ok_or_else(|| not_found("User", user_id))
    }

    async fn create_user(&self, request: UserCreate, _send_email: bool) -> Result<User> {
        self.record("create_user", None, None, |c| c.other += 1)
            .await?;
        Ok(User {
            user_id: "u1".to_string(),
            email: request.email,
            first_name: request.first_name,
            last_name: request.last_name,
            enabled: request.enabled,
            locked: false,
            totp_enabled: false,
            expiration_date: None,
            role_mappings: request.role_mappings,
            user_groups: Vec::new(),
        })
    }

    async fn update_user(&self, user_id: &str, _request: UserUpdate) -> Result<()> {
        self.record("update_user", Some(user_id), None, |c| c.other += 1)
            .await
    }

    async fn delete_user(&self, user_id: &str) -> Result<()> {
        self.record("delete_user", Some(user_id), None, |c| c.other += 1)
            .await
    }

    async fn list_roles(&self, params: &PaginationParams) -> Result<Page<Role>> {
        self.record("list_roles", None, Some(params), |c| c.list_roles += 1)
            .await?;
        Ok(page_of(&self.roles.lock().await, params))
    }

    async fn get_role(&self, role_id: &str) -> Result<Role> {
        self.record("get_role", Some(role_id), None, |c| c.other += 1)
            .await?;
        self.roles
            .lock()
            .await
            .iter()
            .find(|r| r.role_id == role_id)
            .cloned()
            .ok_or_else(|| not_found("Role", role_id))
    }

    async fn create_role(&self, request: RoleCreate) -> Result<Role> {
        self.record("create_role", None, None, |c| c.other += 1)
            .await?;
        Ok(Role {
            role_id: "r1".to_string(),
            name: request.name,
            description: request.description,
            permissions: request.permissions,
            created: None,
            stats: None,
        })
    }

    async fn update_role(&self, role_id: &str, _request: RoleUpdate) -> Result<()> {
        self.record("update_role", Some(role_id), None, |c| c.other += 1)
            .await
    }

    async fn delete_role(&self, role_id: &str) -> Result<()> {
        self.record("delete_role", Some(role_id), None, |c| c.other += 1)
            .await
    }

    async fn list_permissions(&self) -> Result<Vec<Permission>> {
        self.record("list_permissions", None, None, |c| c.other += 1)
            .await?;
        Ok(Vec::new())
    }

    async fn list_user_groups(
        &self,
        params: &PaginationParams,
        _extended: bool,
    ) -> Result<Page<UserGroup>> {
        self.record("list_user_groups", None, Some(params), |c| {
            c.list_user_groups += 1
        })
        .await?;
        Ok(page_of(&self.user_groups.lock().await, params))
    }

    async fn get_user_group(&self, group_id: &str) -> Result<UserGroup> {
        self.record("get_user_group", Some(group_id), None, |c| c.other += 1)
            .await?;
        self.user_groups
            .lock()
            .await
            .iter()
            .find(|g| g.user_group_id == group_id)
            .cloned()
            .ok_or_else(|| not_found("User group", group_id))
    }

    async fn create_user_group(&self, request: UserGroupCreate) -> Result<UserGroup> {
        self.record("create_user_group", None, None, |c| c.other += 1)
            .await?;
        Ok(UserGroup {
            user_group_id: "ug1".to_string(),
            name: request.name,
            description: request.description,
            created: None,
            user_ids: request.user_ids,
            role_mappings: request.role_mappings,
            stats: None,
        })
    }

    async fn update_user_group(&self, group_id: &str, _request: UserGroupUpdate) -> Result<()> {
        self.record("update_user_group", Some(group_id), None, |c| c.other += 1)
            .await
    }

    async fn delete_user_group(&self, group_id: &str) -> Result<()> {
        self.record("delete_user_group", Some(group_id), None, |c| c.other += 1)
            .await
    }

    async fn add_group_users(&self, group_id: &str, _user_ids: &[String]) -> Result<()> {
        self.record("add_group_users", Some(group_id), None, |c| c.other += 1)
            .await
    }

    async fn remove_group_users(&self, group_id: &str, _user_ids: &[String]) -> Result<()> {
        self.record("remove_group_users", Some(group_id), None, |c| c.other += 1)
            .await
    }

    async fn add_group_role_mappings(
        &self,
        group_id: &str,
        role_mappings: Vec<RoleMapping>,
    ) -> Result<Vec<RoleMapping>> {
        self.record("add_group_role_mappings", Some(group_id), None, |c| {
            c.other += 1
        })
        .await?;
        Ok(role_mappings
            .into_iter()
            .enumerate()
            .map(|(i, mapping)| RoleMapping {
                role_mapping_id: Some(format!("m{}", i + 1)),
                ..mapping
            })
            .collect())
    }

    async fn remove_group_role_mappings(
        &self,
        group_id: &str,
        _mapping_ids: &[String],
    ) -> Result<()> {
        self.record("remove_group_role_mappings", Some(group_id), None, |c| {
            c.other += 1
        })
        .await
    }

    async fn list_excluded_hours(&self) -> Result<Vec<ExcludedHoursProfile>> {
        self.record("list_excluded_hours", None, None, |c| c.other += 1)
            .await?;
        Ok(Vec::new())
    }

    async fn get_excluded_hours(&self, profile_id: &str) -> Result<ExcludedHoursProfile> {
        self.record("get_excluded_hours", Some(profile_id), None, |c| {
            c.other += 1
        })
        .await?;
        Err(not_found("Excluded hours profile", profile_id))
    }

    async fn create_excluded_hours(
        &self,
        request: ExcludedHoursRequest,
    ) -> Result<ExcludedHoursProfile> {
        self.record("create_excluded_hours", None, None, |c| c.other += 1)
            .await?;
        Ok(ExcludedHoursProfile {
            excluded_hours_id: "eh1".to_string(),
            name: request.name,
            time_offset: request.time_offset,
            exclusion_matrix: request.exclusion_matrix,
        })
    }

    async fn update_excluded_hours(
        &self,
        profile_id: &str,
        _request: ExcludedHoursRequest,
    ) -> Result<()> {
        self.record("update_excluded_hours", Some(profile_id), None, |c| {
            c.other += 1
        })
        .await
    }

    async fn delete_excluded_hours(&self, profile_id: &str) -> Result<()> {
        self.record("delete_excluded_hours", Some(profile_id), None, |c| {
            c.other += 1
        })
        .await
    }

    async fn list_issue_trackers(&self) -> Result<Vec<IssueTracker>> {
        self.record("list_issue_trackers", None, None, |c| c.other += 1)
            .await?;
        Ok(Vec::new())
    }

    async fn get_issue_tracker(&self, tracker_id: &str) -> Result<IssueTracker> {
        self.record("get_issue_tracker", Some(tracker_id), None, |c| {
            c.other += 1
        })
        .await?;
        Err(not_found("Issue tracker", tracker_id))
    }

    async fn create_issue_tracker(&self, request: IssueTrackerRequest) -> Result<IssueTracker> {
        self.record("create_issue_tracker", None, None, |c| c.other += 1)
            .await?;
        Ok(IssueTracker {
            issue_tracker_id: "it1".to_string(),
            name: request.name,
            config: request.config,
        })
    }

    async fn update_issue_tracker(
        &self,
        tracker_id: &str,
        _request: IssueTrackerRequest,
    ) -> Result<()> {
        self.record("update_issue_tracker", Some(tracker_id), None, |c| {
            c.other += 1
        })
        .await
    }

    async fn delete_issue_tracker(&self, tracker_id: &str) -> Result<()> {
        self.record("delete_issue_tracker", Some(tracker_id), None, |c| {
            c.other += 1
        })
        .await
    }

    async fn check_issue_tracker_connection(
        &self,
        _config: &IssueTrackerConfig,
    ) -> Result<ConnectionStatus> {
        self.record("check_issue_tracker_connection", None, None, |c| {
            c.other += 1
        })
        .await?;
        Ok(ConnectionStatus {
            success: true,
            message: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_pages_by_offset() {
        let mock = MockAcunetixClient::new()
            .with_targets(vec![mock_target("a"), mock_target("b"), mock_target("c")])
            .await;

        let page = mock
            .list_targets(&PaginationParams::new().limit(2))
            .await
            .unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.next_cursor.as_deref(), Some("2"));

        let page = mock
            .list_targets(&PaginationParams::new().limit(2).cursor("2"))
            .await
            .unwrap();
        assert_eq!(page.items[0].target_id, "c");
        assert!(page.next_cursor.is_none());
    }

    #[tokio::test]
    async fn test_mock_one_shot_error() {
        let mock = MockAcunetixClient::new()
            .with_error(ApiError::Unauthorized)
            .await;

        assert!(mock.list_targets(&PaginationParams::new()).await.is_err());
        assert!(mock.list_targets(&PaginationParams::new()).await.is_ok());
        assert_eq!(mock.call_counts().await.list_targets, 2);
    }

    #[tokio::test]
    async fn test_mock_scan_states_are_sticky() {
        let mock = MockAcunetixClient::new()
            .with_scan_states(&["processing", "completed"])
            .await;

        assert_eq!(mock.get_scan("s").await.unwrap().status(), "processing");
        assert_eq!(mock.get_scan("s").await.unwrap().status(), "completed");
        assert_eq!(mock.get_scan("s").await.unwrap().status(), "completed");
    }
}
