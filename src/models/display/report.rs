//! Report, template, and export display models

use serde::Serialize;
use tabled::Tabled;

use super::common::or_dash;
use crate::client::models::{ExportType, Report, ReportTemplate};
use crate::output::formatters::format_datetime;

/// Report display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ReportDisplay {
    #[tabled(rename = "REPORT ID")]
    pub id: String,

    #[tabled(rename = "TEMPLATE")]
    pub template: String,

    #[tabled(rename = "SOURCE")]
    pub source: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "GENERATED")]
    pub generated: String,
}

impl From<Report> for ReportDisplay {
    fn from(report: Report) -> Self {
        let source = report
            .source
            .as_ref()
            .map(|s| {
                s.description
                    .clone()
                    .filter(|d| !d.is_empty())
                    .unwrap_or_else(|| s.list_type.to_string())
            })
            .unwrap_or_else(|| "--".to_string());

        Self {
            generated: format_datetime(report.generation_date.as_ref()),
            template: or_dash(Some(&report.template_name)),
            status: report.status,
            id: report.report_id,
            source,
        }
    }
}

/// Report template display model.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ReportTemplateDisplay {
    #[tabled(rename = "TEMPLATE ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "GROUP")]
    pub group: String,
}

impl From<ReportTemplate> for ReportTemplateDisplay {
    fn from(template: ReportTemplate) -> Self {
        Self {
            id: template.template_id,
            name: template.name,
            group: or_dash(Some(&template.group)),
        }
    }
}

/// Export type display model.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ExportTypeDisplay {
    #[tabled(rename = "EXPORT TYPE ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "SOURCES")]
    pub sources: String,
}

impl From<ExportType> for ExportTypeDisplay {
    fn from(export_type: ExportType) -> Self {
        Self {
            id: export_type.export_id,
            name: export_type.name,
            sources: export_type.accepted_sources.join(", "),
        }
    }
}
