use crate::baseline::domain::{ComplianceRecord, ComplianceStandard, FieldId};

/// Result of checking one record against one standard.
///
/// Evaluation never fails: an incomplete record is a non-compliant
/// verdict with the offending fields listed, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationOutcome {
    pub compliant: bool,
    /// Every unsatisfied field, in the standard's checklist order.
    pub failing_fields: Vec<FieldId>,
}

/// ComplianceEvaluator - the shared pass/fail rule for all standards
///
/// A field passes when its value is present and non-empty: strings must
/// have non-whitespace content, collections must have at least one entry,
/// and the aggregate flags must be true. Every labeled field is checked
/// so the outcome carries the full failure list rather than stopping at
/// the first miss.
pub struct ComplianceEvaluator;

impl ComplianceEvaluator {
    pub fn evaluate(record: &ComplianceRecord, standard: &ComplianceStandard) -> EvaluationOutcome {
        let failing_fields: Vec<FieldId> = standard
            .entries()
            .iter()
            .filter(|&&(field, _)| !record.value(field).is_satisfied())
            .map(|&(field, _)| field)
            .collect();

        EvaluationOutcome {
            compliant: failing_fields.is_empty(),
            failing_fields,
        }
    }
}
