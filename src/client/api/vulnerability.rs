//! Vulnerability API trait

use async_trait::async_trait;

use crate::client::models::{Vulnerability, VulnerabilityDetail, VulnerabilityStatusUpdate};
use crate::client::pagination::{Page, PaginationParams};
use crate::error::Result;

/// Vulnerability listing and triage for the Acunetix API
#[async_trait]
pub trait VulnerabilityApi: Send + Sync {
    /// Fetch one page of vulnerabilities across all targets.
    ///
    /// The filter (`q`) accepts expressions such as `severity:3;status:open`.
    async fn list_vulnerabilities(&self, params: &PaginationParams)
    -> Result<Page<Vulnerability>>;

    /// Get the full record of one vulnerability
    async fn get_vulnerability(&self, vuln_id: &str) -> Result<VulnerabilityDetail>;

    /// Set the triage status of one vulnerability
    async fn update_vulnerability_status(
        &self,
        vuln_id: &str,
        update: &VulnerabilityStatusUpdate,
    ) -> Result<()>;
}
