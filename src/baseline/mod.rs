/// Baseline layer - Compliance record extraction and evaluation
///
/// This is the core of the crate: resolving the primary component of an
/// SPDX 3 graph, populating a ComplianceRecord, and checking it against a
/// named standard's mandatory-field checklist.
pub mod domain;
pub mod error;
pub mod services;

pub use domain::{ComplianceRecord, ComplianceStandard, FieldId, FieldValue};
pub use error::ExtractionError;
pub use services::{ComplianceEvaluator, ComplianceExtractor, EvaluationOutcome};
