use super::record::{ComplianceRecord, FieldId};

/// Base label table shared by every provided standard, in reporting
/// order. The order is load-bearing: rendered reports and failing-field
/// lists follow it, and downstream tooling parses the rendered form.
const BASE_LABELS: [(FieldId, &str); 15] = [
    (FieldId::SbomAuthorNames, "SBOM Author Name"),
    (FieldId::SbomTimestamp, "SBOM Timestamp"),
    (FieldId::SbomType, "SBOM Type"),
    (FieldId::SbomHasPrimaryComponent, "SBOM Primary Component"),
    (FieldId::PrimaryComponentName, "Primary Component Name"),
    (FieldId::PrimaryComponentVersion, "Primary Component Version String"),
    (FieldId::PrimaryComponentSupplierName, "Primary Component Supplier Name"),
    (FieldId::PrimaryComponentHashes, "Primary Component Cryptographic Hash"),
    (FieldId::PrimaryComponentUniqueIds, "Primary Component Unique Identifiers"),
    (FieldId::PrimaryComponentLicenses, "Primary Component License"),
    (FieldId::PrimaryComponentCopyrightHolder, "Primary Component Copyright Holder"),
    (FieldId::ComponentName, "All components have Name"),
    (FieldId::ComponentVersion, "All components have Version String"),
    (FieldId::ComponentSupplierName, "All components have Supplier Name"),
    (FieldId::ComponentUniqueIds, "All components have Unique Identifiers"),
];

/// ComplianceStandard - a named, ordered mandatory-field label set
///
/// Immutable once constructed; the provided standards share one base
/// table and differ only in display name and individual label overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplianceStandard {
    name: &'static str,
    labels: Vec<(FieldId, &'static str)>,
}

impl ComplianceStandard {
    /// The NTIA Minimum Elements checklist. NTIA documents the SBOM type
    /// requirement as a lifecycle phase, so that label is overridden.
    pub fn ntia_minimum_elements() -> Self {
        Self::with_overrides("NTIA Minimum Element", &[(FieldId::SbomType, "Lifecycle Phase")])
    }

    /// The CISA Framing of Software Component Transparency baseline.
    pub fn fsct_baseline_attributes() -> Self {
        Self::with_overrides("FSCT Baseline Attribute", &[])
    }

    fn with_overrides(name: &'static str, overrides: &[(FieldId, &'static str)]) -> Self {
        let labels = BASE_LABELS
            .iter()
            .map(|&(field, label)| {
                let label = overrides
                    .iter()
                    .find(|(overridden, _)| *overridden == field)
                    .map_or(label, |&(_, replacement)| replacement);
                (field, label)
            })
            .collect();
        Self { name, labels }
    }

    /// The standard's display name, used in report headers and verdict
    /// sentences.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The labeled fields in reporting order.
    pub fn entries(&self) -> &[(FieldId, &'static str)] {
        &self.labels
    }

    /// The label this standard attaches to a field, if the field is part
    /// of its checklist.
    pub fn label(&self, field: FieldId) -> Option<&'static str> {
        self.labels
            .iter()
            .find(|(labeled, _)| *labeled == field)
            .map(|&(_, label)| label)
    }

    /// Renders a record as one `- <label>: <value>` line per checklist
    /// entry under the standard's name, in checklist order.
    pub fn render_record(&self, record: &ComplianceRecord) -> String {
        let mut lines = vec![format!("{}:", self.name)];
        for &(field, label) in &self.labels {
            lines.push(format!("- {}: {}", label, record.value(field).render()));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_names() {
        assert_eq!(
            ComplianceStandard::ntia_minimum_elements().name(),
            "NTIA Minimum Element"
        );
        assert_eq!(
            ComplianceStandard::fsct_baseline_attributes().name(),
            "FSCT Baseline Attribute"
        );
    }

    #[test]
    fn test_standards_differ_only_in_sbom_type_label() {
        let ntia = ComplianceStandard::ntia_minimum_elements();
        let fsct = ComplianceStandard::fsct_baseline_attributes();

        assert_eq!(ntia.label(FieldId::SbomType), Some("Lifecycle Phase"));
        assert_eq!(fsct.label(FieldId::SbomType), Some("SBOM Type"));

        for &(field, label) in fsct.entries() {
            if field != FieldId::SbomType {
                assert_eq!(ntia.label(field), Some(label));
            }
        }
    }

    #[test]
    fn test_label_order_is_canonical() {
        let standard = ComplianceStandard::fsct_baseline_attributes();
        let fields: Vec<FieldId> = standard.entries().iter().map(|&(f, _)| f).collect();
        assert_eq!(fields.as_slice(), &FieldId::ALL[..]);
    }

    #[test]
    fn test_render_record_line_per_label() {
        let record = ComplianceRecord {
            primary_component_name: Some("libfoo".to_string()),
            ..Default::default()
        };
        let rendered = ComplianceStandard::ntia_minimum_elements().render_record(&record);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "NTIA Minimum Element:");
        // one line per checklist entry, after the header
        assert_eq!(lines.len(), 1 + FieldId::ALL.len());
        assert!(lines.contains(&"- Primary Component Name: libfoo"));
        assert!(lines.contains(&"- Lifecycle Phase: None"));
        assert!(lines.contains(&"- SBOM Primary Component: false"));
    }

    #[test]
    fn test_render_record_fsct_header() {
        let rendered = ComplianceStandard::fsct_baseline_attributes()
            .render_record(&ComplianceRecord::default());
        assert!(rendered.starts_with("FSCT Baseline Attribute:"));
        assert!(rendered.contains("- SBOM Type: None"));
    }
}
