//! Export orchestration and report writing
//!
//! - [`coordinator`] sequences one run
//! - [`csv_writer`] writes the dated CSV report
//! - [`summary`] reports what a run did

pub mod coordinator;
pub mod csv_writer;
pub mod summary;

pub use coordinator::ExportCoordinator;
pub use csv_writer::{report_file_name, report_path, write_report};
pub use summary::ExportSummary;

use std::fmt;

/// Stages of one export run
///
/// `Start -> Fetching -> Writing -> Done`, with `Failed` reachable from
/// `Fetching` or `Writing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStage {
    Start,
    Fetching,
    Writing,
    Done,
    Failed,
}

impl fmt::Display for RunStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunStage::Start => "start",
            RunStage::Fetching => "fetching",
            RunStage::Writing => "writing",
            RunStage::Done => "done",
            RunStage::Failed => "failed",
        };
        f.write_str(name)
    }
}
