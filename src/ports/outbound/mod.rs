/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, etc.).
pub mod document_reader;
pub mod output_presenter;
pub mod report_formatter;

pub use document_reader::DocumentReader;
pub use output_presenter::OutputPresenter;
pub use report_formatter::ReportFormatter;
