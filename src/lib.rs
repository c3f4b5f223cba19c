//! sbom-baseline - Compliance baseline checker for SPDX 3 SBOMs
//!
//! This library extracts a normalized compliance record from an SPDX 3.x
//! object graph and evaluates it against a named standard's
//! mandatory-field checklist (NTIA Minimum Elements, FSCT Baseline
//! Attributes).
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Graph Layer** (`graph`): Read-only, type-indexed view over the
//!   deserialized object graph
//! - **Baseline Layer** (`baseline`): Record extraction and rule
//!   evaluation - the core logic
//! - **Application Layer** (`application`): Use cases, DTOs, and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sbom_baseline::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = CheckBaselineUseCase::new(JsonLdDocumentReader::new());
//! let request = BaselineRequest::new(PathBuf::from("sbom.json"), StandardKind::Ntia);
//! let response = use_case.execute(&request)?;
//!
//! println!("{}", response.report.render_record());
//! println!("{}", response.report.verdict_sentence());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod baseline;
pub mod cli;
pub mod config;
pub mod graph;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonReportFormatter, TextReportFormatter};
    pub use crate::adapters::outbound::jsonld::JsonLdDocumentReader;
    pub use crate::application::dto::{
        BaselineReport, BaselineRequest, BaselineResponse, ReportFormat, StandardKind,
    };
    pub use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
    pub use crate::application::use_cases::CheckBaselineUseCase;
    pub use crate::baseline::{
        ComplianceEvaluator, ComplianceExtractor, ComplianceRecord, ComplianceStandard,
        EvaluationOutcome, ExtractionError, FieldId,
    };
    pub use crate::graph::{AttrValue, GraphIndex, NodeKind, SpdxNode};
    pub use crate::ports::outbound::{DocumentReader, OutputPresenter, ReportFormatter};
    pub use crate::shared::error::ExitCode;
    pub use crate::shared::Result;
}
