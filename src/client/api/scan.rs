//! Scan API trait

use async_trait::async_trait;

use crate::client::models::{Scan, ScanCreate, ScanResult, ScanningProfile, Vulnerability};
use crate::client::pagination::{Page, PaginationParams};
use crate::error::{ApiError, Result};

/// Scan lifecycle operations for the Acunetix API
///
/// Scans run asynchronously on the server; use
/// [`wait_for_scan`](crate::client::helpers::wait_for_scan) to block until
/// one reaches a terminal state.
#[async_trait]
pub trait ScanApi: Send + Sync {
    // ========================================================================
    // Scans
    // ========================================================================

    /// Fetch one page of scans
    async fn list_scans(&self, params: &PaginationParams) -> Result<Page<Scan>>;

    /// Get a scan with its current session
    async fn get_scan(&self, scan_id: &str) -> Result<Scan>;

    /// Schedule a scan. With an empty schedule it starts immediately.
    async fn create_scan(&self, request: ScanCreate) -> Result<Scan>;

    /// Ask the server to abort a running scan
    async fn abort_scan(&self, scan_id: &str) -> Result<()>;

    /// Delete a scan and its results
    async fn delete_scan(&self, scan_id: &str) -> Result<()>;

    // ========================================================================
    // Scan results
    // ========================================================================

    /// Fetch one page of past runs of a scan
    async fn list_scan_results(
        &self,
        scan_id: &str,
        params: &PaginationParams,
    ) -> Result<Page<ScanResult>>;

    /// Fetch one page of the vulnerabilities found by one scan run
    async fn list_scan_vulnerabilities(
        &self,
        scan_id: &str,
        result_id: &str,
        params: &PaginationParams,
    ) -> Result<Page<Vulnerability>>;

    // ========================================================================
    // Scanning profiles
    // ========================================================================

    /// List all scanning profiles (not paginated by the server)
    async fn list_scanning_profiles(&self) -> Result<Vec<ScanningProfile>>;

    /// Get a single scanning profile
    async fn get_scanning_profile(&self, profile_id: &str) -> Result<ScanningProfile> {
        self.list_scanning_profiles()
            .await?
            .into_iter()
            .find(|p| p.profile_id == profile_id)
            .ok_or_else(|| ApiError::NotFound(format!("Scanning profile {}", profile_id)).into())
    }
}
