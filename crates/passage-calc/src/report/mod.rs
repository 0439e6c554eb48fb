//! Plain-text and CSV exports of a scored bill.

mod summary;
pub mod views;

pub use summary::AnalysisReport;

/// Failure writing an export.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to write breakdown csv: {0}")]
    Csv(#[from] csv::Error),
}

/// Formats a 0–1 fraction as a percentage with one decimal place.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}
