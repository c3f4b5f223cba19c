use crate::application::dto::BaselineReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// TextReportFormatter adapter for the human-readable report form
///
/// Renders the record as one `- <label>: <value>` line per checklist
/// entry under the standard's name. The line format and ordering are
/// relied on by downstream tooling and pinned by tests; the verdict
/// itself is presented separately by the caller.
pub struct TextReportFormatter;

impl TextReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextReportFormatter {
    fn format(&self, report: &BaselineReport) -> Result<String> {
        let mut output = report.render_record();
        output.push('\n');
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::baseline::{ComplianceRecord, ComplianceStandard, FieldId};
    use std::collections::BTreeSet;

    fn sample_report() -> BaselineReport {
        let mut hashes = BTreeSet::new();
        hashes.insert(("SHA256".to_string(), "abc123".to_string()));

        BaselineReport {
            standard: ComplianceStandard::ntia_minimum_elements(),
            record: ComplianceRecord {
                sbom_author_names: vec!["Alice".to_string()],
                sbom_timestamp: Some("2025-01-01T00:00:00Z".to_string()),
                primary_component_name: Some("libfoo".to_string()),
                primary_component_hashes: hashes,
                sbom_has_primary_component: true,
                ..Default::default()
            },
            compliant: false,
            failing_fields: vec![FieldId::PrimaryComponentLicenses],
        }
    }

    #[test]
    fn test_format_pins_line_layout() {
        let output = TextReportFormatter::new().format(&sample_report()).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "NTIA Minimum Element:");
        assert_eq!(lines[1], "- SBOM Author Name: Alice");
        assert_eq!(lines[2], "- SBOM Timestamp: 2025-01-01T00:00:00Z");
        assert_eq!(lines[3], "- Lifecycle Phase: None");
        assert_eq!(lines[4], "- SBOM Primary Component: true");
        assert_eq!(lines[5], "- Primary Component Name: libfoo");
        assert!(lines.contains(&"- Primary Component Cryptographic Hash: SHA256:abc123"));
    }

    #[test]
    fn test_format_ends_with_newline() {
        let output = TextReportFormatter::new().format(&sample_report()).unwrap();
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_format_covers_full_checklist() {
        let report = sample_report();
        let output = TextReportFormatter::new().format(&report).unwrap();
        assert_eq!(output.lines().count(), 1 + report.standard.entries().len());
    }
}
