use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::application::dto::BaselineReport;
use crate::baseline::ComplianceRecord;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    standard: &'a str,
    compliant: bool,
    #[serde(rename = "failedFields")]
    failed_fields: Vec<FailedField>,
    record: &'a ComplianceRecord,
    metadata: Metadata,
}

#[derive(Debug, Serialize)]
struct FailedField {
    field: &'static str,
    label: &'static str,
}

#[derive(Debug, Serialize)]
struct Metadata {
    timestamp: String,
    tool: Tool,
}

#[derive(Debug, Serialize)]
struct Tool {
    name: &'static str,
    version: &'static str,
}

/// JsonReportFormatter adapter for the machine-readable report form
///
/// Serializes the full report: the evaluated standard, verdict, every
/// failed field with its label, the record itself, and a metadata block
/// with the tool identity and generation timestamp.
pub struct JsonReportFormatter;

impl JsonReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonReportFormatter {
    fn format(&self, report: &BaselineReport) -> Result<String> {
        let failed_fields = report
            .failing_fields
            .iter()
            .filter_map(|&field| {
                report.standard.label(field).map(|label| FailedField {
                    field: field.key(),
                    label,
                })
            })
            .collect();

        let json_report = JsonReport {
            standard: report.standard.name(),
            compliant: report.compliant,
            failed_fields,
            record: &report.record,
            metadata: Metadata {
                timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
                tool: Tool {
                    name: env!("CARGO_PKG_NAME"),
                    version: env!("CARGO_PKG_VERSION"),
                },
            },
        };

        let mut output = serde_json::to_string_pretty(&json_report)?;
        output.push('\n');
        Ok(output)
    }
}
