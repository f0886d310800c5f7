//! Acunetix API client implementation

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::debug;
use reqwest::{Client as HttpClient, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::api::{AdminApi, ReportingApi, ScanApi, TargetApi, VulnerabilityApi};
use super::models::{
    ConnectionStatus, ExcludedHoursProfile, ExcludedHoursRequest, Export, ExportCreate,
    ExportType, IssueTracker, IssueTrackerConfig, IssueTrackerRequest, Permission, Report,
    ReportCreate, ReportTemplate, Role, RoleCreate, RoleMapping, RoleUpdate, Scan, ScanCreate,
    ScanResult, ScanningProfile, ServerInfo, Target, TargetCreate, TargetGroup,
    TargetGroupRequest, TargetUpdate, User, UserCreate, UserGroup, UserGroupCreate,
    UserGroupUpdate, UserUpdate, Vulnerability, VulnerabilityDetail, VulnerabilityStatusUpdate,
};
use super::pagination::{Page, PaginationInfo, PaginationParams};
use crate::config::Config;
use crate::error::{ApiError, Error, Result};

/// Client-side request budget
const RATE_LIMIT_PER_SECOND: u32 = 10;

/// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Acunetix API client
pub struct AcunetixClient {
    http: HttpClient,
    base_url: String,
    api_key: String,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl AcunetixClient {
    /// Create a client for `base_url` (already normalised, ending in `/api/v1`).
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        verify_ssl: bool,
    ) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .danger_accept_invalid_certs(!verify_ssl)
            .user_agent(concat!("awvs-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let quota =
            Quota::per_second(NonZeroU32::new(RATE_LIMIT_PER_SECOND).unwrap_or(NonZeroU32::MIN));

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            rate_limiter: Arc::new(RateLimiter::direct(quota)),
        })
    }

    /// Create a client from a resolved configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate_auth()?;
        let base_url = config.api_base_url()?;
        let api_key = config.api_key.clone().unwrap_or_default();
        Self::new(base_url, api_key, config.verify_ssl)
    }

    /// REST base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a request and return the response if the status is 2xx.
    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<Response> {
        self.rate_limiter.until_ready().await;

        let url = format!("{}{}", self.base_url, path);
        debug!("{} {} {:?}", method, url, query);

        let mut request = self
            .http
            .request(method, &url)
            .header("X-Auth", &self.api_key)
            .header("Accept", "application/json");
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status();
        debug!("{} -> {}", url, status);

        if status.is_success() {
            Ok(response)
        } else {
            Err(Self::error_for_status(status, response, path).await)
        }
    }

    /// Map a non-2xx response onto the error taxonomy.
    async fn error_for_status(status: StatusCode, response: Response, path: &str) -> Error {
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());
        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body);

        let err = match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
            StatusCode::FORBIDDEN => ApiError::Forbidden,
            StatusCode::NOT_FOUND => ApiError::NotFound(message.unwrap_or_else(|| path.to_string())),
            StatusCode::CONFLICT => {
                ApiError::Conflict(message.unwrap_or_else(|| "Resource conflict".to_string()))
            }
            StatusCode::TOO_MANY_REQUESTS => {
                ApiError::RateLimit(Duration::from_secs(retry_after.unwrap_or(60)))
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ApiError::BadRequest(message.unwrap_or_else(|| "Bad request".to_string()))
            }
            s if s.is_server_error() => {
                ApiError::ServerError(message.unwrap_or_else(|| format!("Server error: {}", s)))
            }
            s => ApiError::InvalidResponse(format!("Unexpected status code: {}", s)),
        };
        err.into()
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.send(Method::GET, path, &[], None).await?;
        decode(response).await
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .send(method, path, &[], Some(serde_json::to_value(body)?))
            .await?;
        decode(response).await
    }

    /// Send a request whose response body is ignored (typically 204).
    async fn send_empty(&self, method: Method, path: &str, body: Option<Value>) -> Result<()> {
        self.send(method, path, &[], body).await?;
        Ok(())
    }

    /// Fetch one page of a cursor-paginated collection stored under `key`.
    async fn list_page<T: DeserializeOwned>(
        &self,
        path: &str,
        key: &str,
        params: &PaginationParams,
    ) -> Result<Page<T>> {
        self.list_page_with(path, key, params, Vec::new()).await
    }

    /// [`Self::list_page`] with endpoint-specific query parameters appended.
    async fn list_page_with<T: DeserializeOwned>(
        &self,
        path: &str,
        key: &str,
        params: &PaginationParams,
        extra: Vec<(&'static str, String)>,
    ) -> Result<Page<T>> {
        let mut query = params.to_query_params();
        query.extend(extra);
        let response = self.send(Method::GET, path, &query, None).await?;
        let body: Map<String, Value> = decode(response).await?;
        parse_page(body, key)
    }

    /// Fetch an unpaginated collection stored under `key`.
    async fn list_all<T: DeserializeOwned>(&self, path: &str, key: &str) -> Result<Vec<T>> {
        let body: Map<String, Value> = self.get_json(path).await?;
        Ok(parse_page(body, key)?.items)
    }

    /// POST a new resource.
    ///
    /// Some endpoints answer with an empty body or omit the new ID from it;
    /// the ID is then taken from the `Location` header and stored under the
    /// first of `id_fields`.
    async fn create<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: &B,
        id_fields: &[&str],
    ) -> Result<T> {
        let response = self
            .send(Method::POST, path, query, Some(serde_json::to_value(body)?))
            .await?;

        let location_id = response
            .headers()
            .get("location")
            .and_then(|v| v.to_str().ok())
            .and_then(|loc| loc.trim_end_matches('/').rsplit('/').next())
            .map(str::to_string);

        let text = response.text().await.map_err(ApiError::from)?;
        let mut value: Value = if text.trim().is_empty() {
            Value::Object(Map::new())
        } else {
            serde_json::from_str(&text).map_err(|e| {
                ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
            })?
        };

        if let (Value::Object(obj), Some(id)) = (&mut value, location_id) {
            let has_id = id_fields.iter().any(|f| obj.contains_key(*f));
            if let (false, Some(field)) = (has_id, id_fields.first()) {
                obj.insert(field.to_string(), Value::String(id));
            }
        }

        serde_json::from_value(value).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into()
        })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into())
}

/// Split a listing response into its items and next cursor.
fn parse_page<T: DeserializeOwned>(mut body: Map<String, Value>, key: &str) -> Result<Page<T>> {
    let items = body.remove(key).ok_or_else(|| {
        ApiError::InvalidResponse(format!("Response is missing the '{}' collection", key))
    })?;
    let items: Vec<T> = serde_json::from_value(items)
        .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse '{}': {}", key, e)))?;

    let pagination = match body.remove("pagination") {
        Some(Value::Null) | None => None,
        Some(p) => Some(serde_json::from_value::<PaginationInfo>(p).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse pagination: {}", e))
        })?),
    };

    Ok(Page::from_response(items, pagination))
}

/// Extract a readable message from an error body like
/// `{"code": 404, "message": "Object not found", "details": [...]}`.
fn error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    let Ok(Value::Object(obj)) = serde_json::from_str::<Value>(trimmed) else {
        return Some(trimmed.to_string());
    };

    let message = obj
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)?;

    let details: Vec<String> = obj
        .get("details")
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .map(|d| match d {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect()
        })
        .unwrap_or_default();

    if details.is_empty() {
        Some(message)
    } else {
        Some(format!("{} ({})", message, details.join("; ")))
    }
}

#[async_trait]
impl TargetApi for AcunetixClient {
    async fn list_targets(&self, params: &PaginationParams) -> Result<Page<Target>> {
        self.list_page("/targets", "targets", params).await
    }

    async fn get_target(&self, target_id: &str) -> Result<Target> {
        self.get_json(&format!("/targets/{}", target_id)).await
    }

    async fn create_target(&self, request: TargetCreate) -> Result<Target> {
        self.create("/targets", &[], &request, &["target_id"]).await
    }

    async fn update_target(&self, target_id: &str, request: TargetUpdate) -> Result<()> {
        let body = serde_json::to_value(&request)?;
        self.send_empty(Method::PATCH, &format!("/targets/{}", target_id), Some(body))
            .await
    }

    async fn delete_target(&self, target_id: &str) -> Result<()> {
        self.send_empty(Method::DELETE, &format!("/targets/{}", target_id), None)
            .await
    }

    async fn list_target_groups(&self, params: &PaginationParams) -> Result<Page<TargetGroup>> {
        self.list_page("/target_groups", "groups", params).await
    }

    async fn get_target_group(&self, group_id: &str) -> Result<TargetGroup> {
        self.get_json(&format!("/target_groups/{}", group_id)).await
    }

    async fn create_target_group(&self, request: TargetGroupRequest) -> Result<TargetGroup> {
        self.create("/target_groups", &[], &request, &["group_id"])
            .await
    }

    async fn update_target_group(
        &self,
        group_id: &str,
        request: TargetGroupRequest,
    ) -> Result<()> {
        let body = serde_json::to_value(&request)?;
        self.send_empty(
            Method::PATCH,
            &format!("/target_groups/{}", group_id),
            Some(body),
        )
        .await
    }

    async fn delete_target_group(&self, group_id: &str) -> Result<()> {
        self.send_empty(Method::DELETE, &format!("/target_groups/{}", group_id), None)
            .await
    }
}

#[async_trait]
impl ScanApi for AcunetixClient {
    async fn list_scans(&self, params: &PaginationParams) -> Result<Page<Scan>> {
        self.list_page("/scans", "scans", params).await
    }

    async fn get_scan(&self, scan_id: &str) -> Result<Scan> {
        self.get_json(&format!("/scans/{}", scan_id)).await
    }

    async fn create_scan(&self, request: ScanCreate) -> Result<Scan> {
        self.create("/scans", &[], &request, &["scan_id"]).await
    }

    async fn abort_scan(&self, scan_id: &str) -> Result<()> {
        self.send_empty(Method::POST, &format!("/scans/{}/abort", scan_id), None)
            .await
    }

    async fn delete_scan(&self, scan_id: &str) -> Result<()> {
        self.send_empty(Method::DELETE, &format!("/scans/{}", scan_id), None)
            .await
    }

    async fn list_scan_results(
        &self,
        scan_id: &str,
        params: &PaginationParams,
    ) -> Result<Page<ScanResult>> {
        self.list_page(&format!("/scans/{}/results", scan_id), "results", params)
            .await
    }

    async fn list_scan_vulnerabilities(
        &self,
        scan_id: &str,
        result_id: &str,
        params: &PaginationParams,
    ) -> Result<Page<Vulnerability>> {
        let path = format!("/scans/{}/results/{}/vulnerabilities", scan_id, result_id);
        self.list_page(&path, "vulnerabilities", params).await
    }

    async fn list_scanning_profiles(&self) -> Result<Vec<ScanningProfile>> {
        self.list_all("/scanning_profiles", "scanning_profiles")
            .await
    }

    async fn get_scanning_profile(&self, profile_id: &str) -> Result<ScanningProfile> {
        self.get_json(&format!("/scanning_profiles/{}", profile_id))
            .await
    }
}

#[async_trait]
impl ReportingApi for AcunetixClient {
    async fn list_reports(&self, params: &PaginationParams) -> Result<Page<Report>> {
        self.list_page("/reports", "reports", params).await
    }

    async fn get_report(&self, report_id: &str) -> Result<Report> {
        self.get_json(&format!("/reports/{}", report_id)).await
    }

    async fn create_report(&self, request: ReportCreate) -> Result<Report> {
        self.create("/reports", &[], &request, &["report_id"]).await
    }

    async fn delete_report(&self, report_id: &str) -> Result<()> {
        self.send_empty(Method::DELETE, &format!("/reports/{}", report_id), None)
            .await
    }

    async fn list_report_templates(&self) -> Result<Vec<ReportTemplate>> {
        self.list_all("/report_templates", "templates").await
    }

    async fn list_export_types(&self) -> Result<Vec<ExportType>> {
        self.list_all("/export_types", "templates").await
    }

    async fn create_export(&self, request: ExportCreate) -> Result<Export> {
        self.create("/exports", &[], &request, &["report_id", "export_id"])
            .await
    }

    async fn get_export(&self, export_id: &str) -> Result<Export> {
        self.get_json(&format!("/exports/{}", export_id)).await
    }

    async fn delete_export(&self, export_id: &str) -> Result<()> {
        self.send_empty(Method::DELETE, &format!("/exports/{}", export_id), None)
            .await
    }
}

#[async_trait]
impl VulnerabilityApi for AcunetixClient {
    async fn list_vulnerabilities(
        &self,
        params: &PaginationParams,
    ) -> Result<Page<Vulnerability>> {
        self.list_page("/vulnerabilities", "vulnerabilities", params)
            .await
    }

    async fn get_vulnerability(&self, vuln_id: &str) -> Result<VulnerabilityDetail> {
        self.get_json(&format!("/vulnerabilities/{}", vuln_id)).await
    }

    async fn update_vulnerability_status(
        &self,
        vuln_id: &str,
        update: &VulnerabilityStatusUpdate,
    ) -> Result<()> {
        let body = serde_json::to_value(update)?;
        self.send_empty(
            Method::PUT,
            &format!("/vulnerabilities/{}/status", vuln_id),
            Some(body),
        )
        .await
    }
}

#[async_trait]
impl AdminApi for AcunetixClient {
    async fn server_info(&self) -> Result<ServerInfo> {
        self.get_json("/info").await
    }

    async fn list_users(&self, params: &PaginationParams) -> Result<Page<User>> {
        self.list_page("/users", "users", params).await
    }

    async fn get_user(&self, user_id: &str) -> Result<User> {
        self.get_json(&format!("/users/{}", user_id)).await
    }

    async fn create_user(&self, request: UserCreate, send_email: bool) -> Result<User> {
        let query = [("send_email", send_email.to_string())];
        self.create("/users", &query, &request, &["user_id"]).await
    }

    async fn update_user(&self, user_id: &str, request: UserUpdate) -> Result<()> {
        let body = serde_json::to_value(&request)?;
        self.send_empty(Method::PATCH, &format!("/users/{}", user_id), Some(body))
            .await
    }

    async fn delete_user(&self, user_id: &str) -> Result<()> {
        self.send_empty(Method::DELETE, &format!("/users/{}", user_id), None)
            .await
    }

    async fn list_roles(&self, params: &PaginationParams) -> Result<Page<Role>> {
        self.list_page("/roles", "roles", params).await
    }

    async fn get_role(&self, role_id: &str) -> Result<Role> {
        self.get_json(&format!("/roles/{}", role_id)).await
    }

    async fn create_role(&self, request: RoleCreate) -> Result<Role> {
        self.create("/roles", &[], &request, &["role_id"]).await
    }

    async fn update_role(&self, role_id: &str, request: RoleUpdate) -> Result<()> {
        let body = serde_json::to_value(&request)?;
        self.send_empty(Method::PATCH, &format!("/roles/{}", role_id), Some(body))
            .await
    }

    async fn delete_role(&self, role_id: &str) -> Result<()> {
        self.send_empty(Method::DELETE, &format!("/roles/{}", role_id), None)
            .await
    }

    async fn list_permissions(&self) -> Result<Vec<Permission>> {
        self.list_all("/roles/permissions", "permissions").await
    }

    async fn list_user_groups(
        &self,
        params: &PaginationParams,
        extended: bool,
    ) -> Result<Page<UserGroup>> {
        let extra = if extended {
            vec![("extended", "true".to_string())]
        } else {
            Vec::new()
        };
        self.list_page_with("/user_groups", "user_groups", params, extra)
            .await
    }

    async fn get_user_group(&self, group_id: &str) -> Result<UserGroup> {
        self.get_json(&format!("/user_groups/{}", group_id)).await
    }

    async fn create_user_group(&self, request: UserGroupCreate) -> Result<UserGroup> {
        self.create("/user_groups", &[], &request, &["user_group_id"])
            .await
    }

    async fn update_user_group(&self, group_id: &str, request: UserGroupUpdate) -> Result<()> {
        let body = serde_json::to_value(&request)?;
        self.send_empty(
            Method::PATCH,
            &format!("/user_groups/{}", group_id),
            Some(body),
        )
        .await
    }

    async fn delete_user_group(&self, group_id: &str) -> Result<()> {
        self.send_empty(Method::DELETE, &format!("/user_groups/{}", group_id), None)
            .await
    }

    async fn add_group_users(&self, group_id: &str, user_ids: &[String]) -> Result<()> {
        let body = serde_json::json!({ "user_id_list": user_ids });
        self.send_empty(
            Method::POST,
            &format!("/user_groups/{}/users", group_id),
            Some(body),
        )
        .await
    }

    async fn remove_group_users(&self, group_id: &str, user_ids: &[String]) -> Result<()> {
        let body = serde_json::json!({ "user_id_list": user_ids });
        self.send_empty(
            Method::DELETE,
            &format!("/user_groups/{}/users", group_id),
            Some(body),
        )
        .await
    }

    async fn add_group_role_mappings(
        &self,
        group_id: &str,
        role_mappings: Vec<RoleMapping>,
    ) -> Result<Vec<RoleMapping>> {
        let body = serde_json::json!({ "role_mappings": &role_mappings });
        let response = self
            .send(
                Method::POST,
                &format!("/user_groups/{}/roles", group_id),
                &[],
                Some(body),
            )
            .await?;

        // Some server versions answer 204; report what was sent then
        let text = response.text().await.map_err(ApiError::from)?;
        if text.trim().is_empty() {
            return Ok(role_mappings);
        }
        let body: Map<String, Value> = serde_json::from_str(&text).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;
        Ok(parse_page(body, "role_mappings")?.items)
    }

    async fn remove_group_role_mappings(
        &self,
        group_id: &str,
        mapping_ids: &[String],
    ) -> Result<()> {
        let body = serde_json::json!({ "role_mapping_ids": mapping_ids });
        self.send_empty(
            Method::DELETE,
            &format!("/user_groups/{}/roles", group_id),
            Some(body),
        )
        .await
    }

    async fn list_excluded_hours(&self) -> Result<Vec<ExcludedHoursProfile>> {
        self.list_all("/excluded_hours_profiles", "values").await
    }

    async fn get_excluded_hours(&self, profile_id: &str) -> Result<ExcludedHoursProfile> {
        self.get_json(&format!("/excluded_hours_profiles/{}", profile_id))
            .await
    }

    async fn create_excluded_hours(
        &self,
        request: ExcludedHoursRequest,
    ) -> Result<ExcludedHoursProfile> {
        self.create(
            "/excluded_hours_profiles",
            &[],
            &request,
            &["excluded_hours_id"],
        )
        .await
    }

    async fn update_excluded_hours(
        &self,
        profile_id: &str,
        request: ExcludedHoursRequest,
    ) -> Result<()> {
        let body = serde_json::to_value(&request)?;
        self.send_empty(
            Method::PATCH,
            &format!("/excluded_hours_profiles/{}", profile_id),
            Some(body),
        )
        .await
    }

    async fn delete_excluded_hours(&self, profile_id: &str) -> Result<()> {
        self.send_empty(
            Method::DELETE,
            &format!("/excluded_hours_profiles/{}", profile_id),
            None,
        )
        .await
    }

    async fn list_issue_trackers(&self) -> Result<Vec<IssueTracker>> {
        self.list_all("/issue_trackers", "issue_trackers").await
    }

    async fn get_issue_tracker(&self, tracker_id: &str) -> Result<IssueTracker> {
        self.get_json(&format!("/issue_trackers/{}", tracker_id))
            .await
    }

    async fn create_issue_tracker(&self, request: IssueTrackerRequest) -> Result<IssueTracker> {
        self.create("/issue_trackers", &[], &request, &["issue_tracker_id"])
            .await
    }

    async fn update_issue_tracker(
        &self,
        tracker_id: &str,
        request: IssueTrackerRequest,
    ) -> Result<()> {
        let body = serde_json::to_value(&request)?;
        self.send_empty(
            Method::PATCH,
            &format!("/issue_trackers/{}", tracker_id),
            Some(body),
        )
        .await
    }

    async fn delete_issue_tracker(&self, tracker_id: &str) -> Result<()> {
        self.send_empty(
            Method::DELETE,
            &format!("/issue_trackers/{}", tracker_id),
            None,
        )
        .await
    }

    async fn check_issue_tracker_connection(
        &self,
        config: &IssueTrackerConfig,
    ) -> Result<ConnectionStatus> {
        self.send_json(Method::POST, "/issue_trackers/check_connection", config)
            .await
    }
}
