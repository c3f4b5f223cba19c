use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes. A well-formed SBOM that misses
/// mandatory baseline fields exits with `NotCompliant`; a malformed
/// document or I/O failure exits with `ApplicationError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the document is compliant with the selected standard
    Success = 0,
    /// The document is well-formed but not compliant with the standard
    NotCompliant = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (malformed document, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::NotCompliant => write!(f, "Not Compliant (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for baseline checking.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
/// Structural problems inside the SPDX graph itself are reported through
/// `baseline::ExtractionError`, not here.
#[derive(Debug, Error)]
pub enum BaselineError {
    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to parse SPDX document: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file contains an SPDX 3 JSON-LD document with a top-level @graph array")]
    DocumentParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid input path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a readable SPDX 3 JSON file")]
    InvalidInputPath { path: PathBuf, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    // ExitCode tests
    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::NotCompliant.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(format!("{}", ExitCode::NotCompliant), "Not Compliant (1)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_exit_code_equality() {
        assert_eq!(ExitCode::Success, ExitCode::Success);
        assert_ne!(ExitCode::Success, ExitCode::NotCompliant);
    }

    // BaselineError tests
    #[test]
    fn test_file_read_error_display() {
        let error = BaselineError::FileReadError {
            path: PathBuf::from("/test/sbom.json"),
            details: "File not found".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to read file"));
        assert!(display.contains("/test/sbom.json"));
        assert!(display.contains("File not found"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_document_parse_error_display() {
        let error = BaselineError::DocumentParseError {
            path: PathBuf::from("/test/sbom.json"),
            details: "expected value at line 1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse SPDX document"));
        assert!(display.contains("@graph"));
        assert!(display.contains("expected value at line 1"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = BaselineError::FileWriteError {
            path: PathBuf::from("/test/report.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/report.json"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_invalid_input_path_display() {
        let error = BaselineError::InvalidInputPath {
            path: PathBuf::from("/some/directory"),
            reason: "Not a regular file".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid input path"));
        assert!(display.contains("/some/directory"));
        assert!(display.contains("Not a regular file"));
    }
}
