use std::path::PathBuf;

use super::standard_kind::StandardKind;

/// BaselineRequest - Internal request DTO for the baseline check use case
///
/// This DTO represents the internal request structure used within the
/// application layer; CLI flags are resolved into it before execution.
#[derive(Debug, Clone)]
pub struct BaselineRequest {
    /// Path to the SPDX 3 JSON document
    pub filepath: PathBuf,
    /// The compliance standard to evaluate against
    pub standard: StandardKind,
}

impl BaselineRequest {
    pub fn new(filepath: PathBuf, standard: StandardKind) -> Self {
        Self { filepath, standard }
    }
}
