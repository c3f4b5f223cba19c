use std::fs;
use std::path::Path;
use std::process;

use owo_colors::OwoColorize;

use sbom_baseline::adapters::outbound::jsonld::JsonLdDocumentReader;
use sbom_baseline::application::dto::{BaselineRequest, ReportFormat, StandardKind};
use sbom_baseline::application::factories::{FormatterFactory, PresenterFactory};
use sbom_baseline::application::use_cases::CheckBaselineUseCase;
use sbom_baseline::cli::Args;
use sbom_baseline::config::{self, ConfigFile};
use sbom_baseline::graph::inspect;
use sbom_baseline::shared::error::{BaselineError, ExitCode};
use sbom_baseline::shared::Result;

fn main() {
    match run() {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run() -> Result<ExitCode> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Resolve settings: explicit flags win over the config file
    let config = load_config(&args)?;
    let standard = args
        .standard
        .or_else(|| config.as_ref().and_then(ConfigFile::standard_kind))
        .unwrap_or(StandardKind::Ntia);
    let format = args
        .format
        .or_else(|| config.as_ref().and_then(ConfigFile::report_format))
        .unwrap_or(ReportFormat::Text);
    let show_record =
        args.print || config.as_ref().and_then(|c| c.show_record).unwrap_or(false);

    validate_input_path(&args.filepath)?;

    if args.json_dump {
        dump_raw_json(&args.filepath)?;
    }

    // Execute use case
    let use_case = CheckBaselineUseCase::new(JsonLdDocumentReader::new());
    let request = BaselineRequest::new(args.filepath.clone(), standard);
    let response = use_case.execute(&request)?;

    // Inspection listings work off the already materialized graph
    if args.tree {
        println!("{}", inspect::kind_summary(&response.graph));
    }
    if args.relationships {
        println!("{}", inspect::relationship_listing(&response.graph));
    }

    // Report body: always for JSON or file output, on request for text
    if show_record || format == ReportFormat::Json || args.output.is_some() {
        let formatter = FormatterFactory::create(format);
        let output = formatter.format(&response.report)?;
        let presenter =
            PresenterFactory::create(PresenterFactory::from_output_path(args.output.clone()));
        presenter.present(&output)?;
    }

    // Verdict line drives the exit code. When the JSON report occupies
    // stdout, the verdict moves to stderr so stdout stays parseable.
    let verdict_on_stderr = format == ReportFormat::Json && args.output.is_none();
    let verdict = response.report.verdict_sentence();
    if response.report.compliant {
        if verdict_on_stderr {
            eprintln!("{}", verdict.green());
        } else {
            println!("{}", verdict.green());
        }
        Ok(ExitCode::Success)
    } else {
        if verdict_on_stderr {
            eprintln!("{}", verdict.red());
        } else {
            println!("{}", verdict.red());
        }
        let missing = response.report.failing_labels();
        if !missing.is_empty() {
            eprintln!("Missing: {}", missing.join(", "));
        }
        Ok(ExitCode::NotCompliant)
    }
}

fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => Ok(Some(config::load_config_from_path(path)?)),
        None => config::discover_config(Path::new(".")),
    }
}

fn validate_input_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(BaselineError::InvalidInputPath {
            path: path.to_path_buf(),
            reason: "File does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for input paths
    let metadata =
        std::fs::symlink_metadata(path).map_err(|e| BaselineError::InvalidInputPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read path metadata: {}", e),
        })?;

    if metadata.is_symlink() {
        return Err(BaselineError::InvalidInputPath {
            path: path.to_path_buf(),
            reason: "Security: Input path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_file() {
        return Err(BaselineError::InvalidInputPath {
            path: path.to_path_buf(),
            reason: "Not a regular file".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Pretty-prints the raw JSON content of the document, before any graph
/// materialization.
fn dump_raw_json(path: &Path) -> Result<()> {
    let content = fs::read_to_string(path).map_err(|e| BaselineError::FileReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;
    let value: serde_json::Value =
        serde_json::from_str(&content).map_err(|e| BaselineError::DocumentParseError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_input_path_valid_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("sbom.json");
        fs::write(&file_path, "{}").unwrap();

        let result = validate_input_path(&file_path);
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_input_path_nonexistent() {
        let result = validate_input_path(Path::new("/nonexistent/sbom.json"));
        assert!(result.is_err());

        let err = result.unwrap_err();
        let err_string = format!("{}", err);
        assert!(err_string.contains("File does not exist"));
    }

    #[test]
    fn test_validate_input_path_directory_not_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_input_path(temp_dir.path());
        assert!(result.is_err());

        let err = result.unwrap_err();
        let err_string = format!("{}", err);
        assert!(err_string.contains("Not a regular file"));
    }

    #[test]
    fn test_dump_raw_json_invalid_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("broken.json");
        fs::write(&file_path, "{not json").unwrap();

        let result = dump_raw_json(&file_path);
        assert!(result.is_err());
    }
}
