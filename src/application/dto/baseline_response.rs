use super::baseline_report::BaselineReport;
use crate::graph::GraphIndex;

/// BaselineResponse - Result DTO of the baseline check use case
///
/// Carries the evaluated report plus the materialized graph, so callers
/// can drive the inspection listings without re-reading the document.
#[derive(Debug)]
pub struct BaselineResponse {
    pub report: BaselineReport,
    pub graph: GraphIndex,
}
