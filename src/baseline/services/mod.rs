/// Services for the baseline layer - pure logic, no I/O
mod evaluator;
mod extractor;

pub use evaluator::{ComplianceEvaluator, EvaluationOutcome};
pub use extractor::ComplianceExtractor;
