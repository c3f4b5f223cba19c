/// Output format enumeration for compliance reports
///
/// This enum represents the supported report output formats. It belongs
/// in the application layer as it is a concern both the CLI (inbound)
/// and the formatters (outbound adapters) need to understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Human-readable text report (default)
    Text,
    /// Machine-readable JSON report
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'text' or 'json'",
                s
            )),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_report_format_from_str_text() {
        assert_eq!(ReportFormat::from_str("text").unwrap(), ReportFormat::Text);
        assert_eq!(ReportFormat::from_str("txt").unwrap(), ReportFormat::Text);
    }

    #[test]
    fn test_report_format_from_str_json() {
        assert_eq!(ReportFormat::from_str("json").unwrap(), ReportFormat::Json);
    }

    #[test]
    fn test_report_format_from_str_case_insensitive() {
        assert_eq!(ReportFormat::from_str("JSON").unwrap(), ReportFormat::Json);
        assert_eq!(ReportFormat::from_str("Text").unwrap(), ReportFormat::Text);
    }

    #[test]
    fn test_report_format_from_str_invalid() {
        let result = ReportFormat::from_str("markdown");
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.contains("Invalid format"));
        assert!(error.contains("text"));
        assert!(error.contains("json"));
    }

    #[test]
    fn test_report_format_from_str_empty() {
        assert!(ReportFormat::from_str("").is_err());
    }

    #[test]
    fn test_report_format_display() {
        assert_eq!(ReportFormat::Text.to_string(), "text");
        assert_eq!(ReportFormat::Json.to_string(), "json");
    }
}
