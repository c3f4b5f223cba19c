use crate::application::dto::BaselineReport;
use crate::shared::Result;

/// ReportFormatter port for formatting compliance reports
///
/// This port abstracts the rendering of an evaluated baseline report
/// into its output representation (plain text, JSON, etc.).
pub trait ReportFormatter {
    /// Formats a baseline report
    ///
    /// # Arguments
    /// * `report` - The evaluated report containing the record, the
    ///   standard it was checked against, and the verdict
    ///
    /// # Returns
    /// Formatted report content as a string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &BaselineReport) -> Result<String>;
}
