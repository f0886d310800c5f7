//! Reporting API trait for reports, templates, and exports

use async_trait::async_trait;

use crate::client::models::{Export, ExportCreate, ExportType, Report, ReportCreate, ReportTemplate};
use crate::client::pagination::{Page, PaginationParams};
use crate::error::{ApiError, Result};

/// Report and export operations for the Acunetix API
///
/// Report and export generation is asynchronous: `create_*` returns a record
/// in a pending state that can be polled with `get_*` until it completes.
#[async_trait]
pub trait ReportingApi: Send + Sync {
    // ========================================================================
    // Reports
    // ========================================================================

    /// Fetch one page of reports
    async fn list_reports(&self, params: &PaginationParams) -> Result<Page<Report>>;

    /// Get a single report
    async fn get_report(&self, report_id: &str) -> Result<Report>;

    /// Request generation of a report
    async fn create_report(&self, request: ReportCreate) -> Result<Report>;

    /// Delete a report
    async fn delete_report(&self, report_id: &str) -> Result<()>;

    // ========================================================================
    // Report templates
    // ========================================================================

    /// List all report templates
    async fn list_report_templates(&self) -> Result<Vec<ReportTemplate>>;

    /// Get a single report template
    async fn get_report_template(&self, template_id: &str) -> Result<ReportTemplate> {
        self.list_report_templates()
            .await?
            .into_iter()
            .find(|t| t.template_id == template_id)
            .ok_or_else(|| ApiError::NotFound(format!("Report template {}", template_id)).into())
    }

    // ========================================================================
    // Exports
    // ========================================================================

    /// List the export formats the server supports
    async fn list_export_types(&self) -> Result<Vec<ExportType>>;

    /// Request an export
    async fn create_export(&self, request: ExportCreate) -> Result<Export>;

    /// Get a single export
    async fn get_export(&self, export_id: &str) -> Result<Export>;

    /// Delete an export
    async fn delete_export(&self, export_id: &str) -> Result<()>;
}
