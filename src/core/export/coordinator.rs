//! Export coordinator - orchestrator for one export run
//!
//! Runs the stages in sequence: fetch every rider page, transform the riders
//! into report rows, write the dated CSV report.

use super::csv_writer::{report_path, write_report};
use super::summary::ExportSummary;
use super::RunStage;
use crate::adapters::sparelabs::{RiderSource, SpareLabsClient};
use crate::config::RiderExportConfig;
use crate::core::fetch::fetch_all_riders;
use crate::core::transform::transform_riders;
use crate::domain::{ExportError, Result};
use chrono::{Local, NaiveDate};
use std::time::Instant;

/// Export coordinator
pub struct ExportCoordinator {
    config: RiderExportConfig,
    source: Box<dyn RiderSource>,
}

impl ExportCoordinator {
    /// Create a coordinator talking to the live rider API
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(config: RiderExportConfig) -> Result<Self> {
        let client = SpareLabsClient::new(&config.api)?;
        Ok(Self::with_source(config, Box::new(client)))
    }

    /// Create a coordinator over any rider source
    pub fn with_source(config: RiderExportConfig, source: Box<dyn RiderSource>) -> Self {
        Self { config, source }
    }

    /// Execute the export, naming the report after today's local date
    pub async fn execute_export(&self) -> Result<ExportSummary> {
        self.execute_export_for(Local::now().date_naive()).await
    }

    /// Execute the export, naming the report after `date`
    pub async fn execute_export_for(&self, date: NaiveDate) -> Result<ExportSummary> {
        let start_time = Instant::now();
        let mut stage = RunStage::Start;
        advance(&mut stage, RunStage::Fetching);

        let fetched = fetch_all_riders(self.source.as_ref(), self.config.api.page_size)
            .await
            .map_err(|e| fail(stage, e))?;

        advance(&mut stage, RunStage::Writing);

        let report = transform_riders(&fetched.riders);
        let output_path = report_path(&self.config.output.directory, date);
        let rows_written = write_report(&output_path, &report.rows).map_err(|e| fail(stage, e))?;

        advance(&mut stage, RunStage::Done);

        let summary = ExportSummary {
            riders_fetched: fetched.riders.len(),
            pages_requested: fetched.pages_requested,
            rows_written,
            riders_skipped: report.skipped,
            rows_missing_address: report.missing_address,
            output_path,
            ..Default::default()
        }
        .with_duration(start_time.elapsed());

        summary.log_summary();
        Ok(summary)
    }
}

fn advance(stage: &mut RunStage, next: RunStage) {
    tracing::debug!(from = %stage, to = %next, "Export stage transition");
    *stage = next;
}

fn fail(stage: RunStage, error: ExportError) -> ExportError {
    tracing::debug!(from = %stage, to = %RunStage::Failed, error = %error, "Export stage transition");
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sparelabs::RiderPage;
    use crate::config::secret_string;
    use crate::domain::{ApiError, Rider};
    use async_trait::async_trait;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    struct FixedSource(Vec<Rider>);

    #[async_trait]
    impl RiderSource for FixedSource {
        async fn fetch_page(&self, limit: usize, skip: usize) -> Result<RiderPage> {
            let page = self.0.iter().skip(skip).take(limit).cloned().collect();
            Ok(RiderPage::with_riders(page))
        }

        fn base_url(&self) -> &str {
            "memory://riders"
        }
    }

    struct FailingSource;

    #[async_trait]
    impl RiderSource for FailingSource {
        async fn fetch_page(&self, _limit: usize, _skip: usize) -> Result<RiderPage> {
            Err(ApiError::ConnectionFailed("connection reset".to_string()).into())
        }

        fn base_url(&self) -> &str {
            "memory://riders"
        }
    }

    fn config(dir: &TempDir) -> RiderExportConfig {
        let mut config = RiderExportConfig::new(secret_string("token".to_string()));
        config.output.directory = dir.path().to_path_buf();
        config.api.page_size = 2;
        config
    }

    fn rider(id: u32, metadata: serde_json::Value) -> Rider {
        serde_json::from_value(json!({
            "externalNumericId": id,
            "firstName": "Rider",
            "metadata": metadata
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_export_writes_dated_report() {
        let dir = TempDir::new().unwrap();
        let riders = vec![
            rider(1, json!({ "mailing_address": "Main St", "mailing_address_unit": "5" })),
            rider(2, json!({})),
            rider(3, json!({ "mailing_city": "Ottawa" })),
        ];
        let coordinator = ExportCoordinator::with_source(config(&dir), Box::new(FixedSource(riders)));
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

        let summary = coordinator.execute_export_for(date).await.unwrap();

        assert_eq!(summary.riders_fetched, 3);
        assert_eq!(summary.pages_requested, 2);
        assert_eq!(summary.rows_written, 2);
        assert_eq!(summary.riders_skipped, 1);
        assert_eq!(summary.rows_missing_address, 1);
        assert_eq!(summary.file_name(), "riders_2024-05-01.csv");

        let contents = fs::read_to_string(dir.path().join("riders_2024-05-01.csv")).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("1,Rider,,,,,5-Main St"));
        assert!(lines[2].starts_with("3,Rider,"));
    }

    #[tokio::test]
    async fn test_fetch_failure_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let coordinator = ExportCoordinator::with_source(config(&dir), Box::new(FailingSource));
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

        let result = coordinator.execute_export_for(date).await;

        assert!(matches!(result, Err(ref e) if e.is_transport()));
        assert!(!dir.path().join("riders_2024-05-01.csv").exists());
    }
}
