//! Report, report template, and export models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::ReportSourceType;
use crate::client::poll::{JobState, Snapshot};

/// Source a report was generated from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSource {
    pub list_type: ReportSourceType,
    #[serde(default)]
    pub id_list: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A generated (or generating) report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub report_id: String,

    #[serde(default)]
    pub template_id: String,

    #[serde(default)]
    pub template_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_type: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ReportSource>,

    /// `queued`, `processing`, `completed`, `failed`
    #[serde(default)]
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_date: Option<DateTime<Utc>>,

    /// Download paths relative to the server root
    #[serde(default)]
    pub download: Vec<String>,
}

impl Snapshot for Report {
    fn job_state(&self) -> JobState {
        JobState::from_status(&self.status)
    }
}

/// Request body for `POST /reports`
#[derive(Debug, Clone, Serialize)]
pub struct ReportCreate {
    pub template_id: String,
    pub source: ReportCreateSource,
}

/// Source part of a report or export request
#[derive(Debug, Clone, Serialize)]
pub struct ReportCreateSource {
    pub list_type: ReportSourceType,
    pub id_list: Vec<String>,
}

impl ReportCreate {
    pub fn new(
        template_id: impl Into<String>,
        list_type: ReportSourceType,
        id_list: Vec<String>,
    ) -> Self {
        Self {
            template_id: template_id.into(),
            source: ReportCreateSource { list_type, id_list },
        }
    }
}

/// A report template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportTemplate {
    pub template_id: String,
    pub name: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub accepted_sources: Vec<String>,
}

/// An export format (e.g. WAF rule sets, third-party formats)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportType {
    pub export_id: String,
    pub name: String,
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub accepted_sources: Vec<String>,
    /// Whether the server pushes the export to an integration
    #[serde(default)]
    pub upload: bool,
}

/// Source part of an export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSource {
    pub list_type: ReportSourceType,
    #[serde(default)]
    pub id_list: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waf_id: Option<String>,
}

/// An export job
///
/// The server reuses report field names for exports. Responses may carry
/// `report_id`, `export_id` or both; a non-empty `export_id` wins. The export
/// type is read from `template_id` when `export_type_id` is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ExportRecord")]
pub struct Export {
    pub export_id: String,
    pub export_type_id: String,
    pub template_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ExportSource>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_date: Option<DateTime<Utc>>,
    pub download: Vec<String>,
}

/// Wire shape of an export before the id fields are resolved
#[derive(Deserialize)]
struct ExportRecord {
    #[serde(default)]
    export_id: Option<String>,
    #[serde(default)]
    report_id: Option<String>,
    #[serde(default)]
    export_type_id: Option<String>,
    #[serde(default)]
    template_id: Option<String>,
    #[serde(default)]
    template_name: String,
    #[serde(default)]
    source: Option<ExportSource>,
    #[serde(default)]
    status: String,
    #[serde(default)]
    generation_date: Option<DateTime<Utc>>,
    #[serde(default)]
    download: Vec<String>,
}

fn first_non_empty(preferred: Option<String>, fallback: Option<String>) -> Option<String> {
    preferred
        .filter(|id| !id.is_empty())
        .or(fallback.filter(|id| !id.is_empty()))
}

impl TryFrom<ExportRecord> for Export {
    type Error = String;

    fn try_from(record: ExportRecord) -> std::result::Result<Self, Self::Error> {
        let export_id = first_non_empty(record.export_id, record.report_id)
            .ok_or_else(|| "missing field `export_id` or `report_id`".to_string())?;

        Ok(Self {
            export_id,
            export_type_id: first_non_empty(record.export_type_id, record.template_id)
                .unwrap_or_default(),
            template_name: record.template_name,
            source: record.source,
            status: record.status,
            generation_date: record.generation_date,
            download: record.download,
        })
    }
}

impl Snapshot for Export {
    fn job_state(&self) -> JobState {
        JobState::from_status(&self.status)
    }
}

/// Request body for `POST /exports`
#[derive(Debug, Clone, Serialize)]
pub struct ExportCreate {
    pub export_id: String,
    pub source: ExportSource,
}

impl ExportCreate {
    pub fn new(
        export_type_id: impl Into<String>,
        list_type: ReportSourceType,
        id_list: Vec<String>,
        waf_id: Option<String>,
    ) -> Self {
        Self {
            export_id: export_type_id.into(),
            source: ExportSource {
                list_type,
                id_list,
                waf_id,
            },
        }
    }
}
