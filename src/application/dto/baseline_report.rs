use crate::baseline::{ComplianceRecord, ComplianceStandard, FieldId};

/// BaselineReport - an evaluated compliance record
///
/// Bundles the extracted record with the standard it was checked against
/// and the verdict, so formatters can render both the content and the
/// judgement without re-running evaluation.
#[derive(Debug, Clone)]
pub struct BaselineReport {
    pub standard: ComplianceStandard,
    pub record: ComplianceRecord,
    pub compliant: bool,
    /// Unsatisfied fields, in the standard's checklist order.
    pub failing_fields: Vec<FieldId>,
}

impl BaselineReport {
    /// Labels of the unsatisfied fields, in checklist order.
    pub fn failing_labels(&self) -> Vec<&'static str> {
        self.failing_fields
            .iter()
            .filter_map(|&field| self.standard.label(field))
            .collect()
    }

    /// The record rendered under this report's standard.
    pub fn render_record(&self) -> String {
        self.standard.render_record(&self.record)
    }

    /// The one-line verdict shown to the user and echoed in CI logs.
    pub fn verdict_sentence(&self) -> String {
        if self.compliant {
            format!("Compliant with {} requirements.", self.standard.name())
        } else {
            format!("Not compliant with {} requirements.", self.standard.name())
        }
    }
}
