use thiserror::Error;

/// Structural failures raised while extracting a compliance record.
///
/// Every variant means the graph shape violated a hard precondition;
/// content that is merely missing (no supplier, no license) is never an
/// error here - it surfaces as a failed field during evaluation instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("expected exactly one SpdxDocument node in the graph, found {count}")]
    MultipleOrMissingDocument { count: usize },

    #[error("expected exactly one root element on the SPDX document, found {count}")]
    InvalidRootElementCount { count: usize },

    #[error("expected exactly one root element on the BOM wrapper, found {count}")]
    InvalidBomRootElementCount { count: usize },

    #[error("the resolved root element is not a software package (found: {kind})")]
    RootElementNotPackage { kind: String },
}
