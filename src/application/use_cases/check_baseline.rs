use anyhow::Context;

use crate::application::dto::{BaselineReport, BaselineRequest, BaselineResponse, StandardKind};
use crate::baseline::{ComplianceEvaluator, ComplianceExtractor};
use crate::graph::GraphIndex;
use crate::ports::outbound::DocumentReader;
use crate::shared::Result;

/// CheckBaselineUseCase - Core use case for compliance checking
///
/// Orchestrates the baseline workflow with generic dependency injection
/// for the document source: read the document into a graph, extract the
/// compliance record, and evaluate it against the requested standard.
///
/// # Type Parameters
/// * `R` - DocumentReader implementation
pub struct CheckBaselineUseCase<R> {
    document_reader: R,
}

impl<R> CheckBaselineUseCase<R>
where
    R: DocumentReader,
{
    /// Creates a new CheckBaselineUseCase with an injected document reader
    pub fn new(document_reader: R) -> Self {
        Self { document_reader }
    }

    /// Executes the baseline check
    ///
    /// # Arguments
    /// * `request` - The check request containing the document path and
    ///   the standard to evaluate against
    ///
    /// # Returns
    /// BaselineResponse containing the evaluated report and the
    /// materialized graph
    ///
    /// # Errors
    /// Returns an error if the document cannot be read or its graph
    /// violates a structural precondition of extraction. An incomplete
    /// but well-formed SBOM is not an error; it produces a non-compliant
    /// report.
    pub fn execute(&self, request: &BaselineRequest) -> Result<BaselineResponse> {
        let graph = self.document_reader.read_document(&request.filepath)?;
        let report = Self::check(&graph, request.standard).with_context(|| {
            format!(
                "Failed to extract a compliance baseline from: {}",
                request.filepath.display()
            )
        })?;

        Ok(BaselineResponse { report, graph })
    }

    /// Runs extraction and evaluation over an already materialized graph.
    fn check(graph: &GraphIndex, standard: StandardKind) -> Result<BaselineReport> {
        let record = ComplianceExtractor::extract(graph)?;
        let standard = standard.standard();
        let outcome = ComplianceEvaluator::evaluate(&record, &standard);

        Ok(BaselineReport {
            standard,
            record,
            compliant: outcome.compliant,
            failing_fields: outcome.failing_fields,
        })
    }
}
