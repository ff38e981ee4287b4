//! Export summary and reporting

use std::path::PathBuf;
use std::time::Duration;

/// Summary of one export run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportSummary {
    /// Riders returned by the API
    pub riders_fetched: usize,

    /// HTTP requests issued while paginating
    pub pages_requested: usize,

    /// Data rows written to the report
    pub rows_written: usize,

    /// Riders dropped for lack of metadata
    pub riders_skipped: usize,

    /// Rows written with an empty mailing address
    pub rows_missing_address: usize,

    /// Report location
    pub output_path: PathBuf,

    /// Duration of the run
    pub duration: Duration,
}

impl ExportSummary {
    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Report file name, for the user-facing success message
    pub fn file_name(&self) -> String {
        self.output_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.output_path.display().to_string())
    }

    /// Run duration in milliseconds, saturating at `u64::MAX`
    pub fn duration_ms(&self) -> u64 {
        u64::try_from(self.duration.as_millis()).unwrap_or(u64::MAX)
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            riders_fetched = self.riders_fetched,
            pages_requested = self.pages_requested,
            rows_written = self.rows_written,
            riders_skipped = self.riders_skipped,
            rows_missing_address = self.rows_missing_address,
            output = %self.output_path.display(),
            duration_ms = self.duration_ms(),
            "Export completed"
        );

        if self.riders_skipped > 0 || self.rows_missing_address > 0 {
            tracing::warn!(
                riders_skipped = self.riders_skipped,
                rows_missing_address = self.rows_missing_address,
                "Export completed with data quality issues"
            );
        }
    }
}
