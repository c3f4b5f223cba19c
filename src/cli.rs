use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::{ReportFormat, StandardKind};

/// Check SPDX 3 SBOM documents against compliance baselines
#[derive(Parser, Debug)]
#[command(name = "sbom-baseline")]
#[command(version)]
#[command(about = "Check SPDX 3 SBOM documents against NTIA/FSCT compliance baselines", long_about = None)]
pub struct Args {
    /// Path to the SPDX 3 JSON document
    pub filepath: PathBuf,

    /// Compliance standard: ntia or fsct (defaults to ntia)
    #[arg(short, long)]
    pub standard: Option<StandardKind>,

    /// Report format: text or json (defaults to text)
    #[arg(short, long)]
    pub format: Option<ReportFormat>,

    /// Output file path for the report (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the full compliance record, not just the verdict
    #[arg(short = 'P', long = "print")]
    pub print: bool,

    /// Pretty-print the raw JSON content of the document
    #[arg(short = 'J', long = "json-dump")]
    pub json_dump: bool,

    /// Print a per-kind summary of the object graph
    #[arg(short = 'T', long = "tree")]
    pub tree: bool,

    /// Print all relationships in the document
    #[arg(short = 'R', long = "relationships")]
    pub relationships: bool,

    /// Path to a config file (default: ./sbom-baseline.config.yml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
