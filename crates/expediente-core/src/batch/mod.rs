//! Batch orchestration: row loop, folder creation, per-cell downloads.
//!
//! A batch is a one-shot sequential pass over the spreadsheet's current
//! contents. Per-cell failures are recorded and never abort the run; only a
//! spreadsheet-level error (missing file, missing column, malformed content)
//! fails the whole batch, and it does so before any row is processed.

mod events;
mod report;
mod run;

pub use events::BatchEvent;
pub use report::BatchReport;
pub use run::{run_rows, BatchRunner};

use crate::sheet::SheetError;
use std::path::PathBuf;
use thiserror::Error;

/// Rejections surfaced before a batch starts. The batch never runs.
#[derive(Debug, Error)]
pub enum PreconditionError {
    #[error("a batch is already running")]
    AlreadyRunning,
    #[error("missing selection: {0}")]
    MissingSelection(&'static str),
}

/// Terminal batch failure. Everything else is recorded per row/cell and the
/// batch still completes.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error(transparent)]
    Precondition(#[from] PreconditionError),
    #[error(transparent)]
    Sheet(#[from] SheetError),
}

/// Explicit per-run inputs (no module-level selection state).
#[derive(Debug, Clone)]
pub struct BatchSession {
    pub target_dir: PathBuf,
    pub sheet_path: PathBuf,
}

impl BatchSession {
    /// Builds a session from optional selections; both must be present.
    pub fn new(
        target_dir: Option<PathBuf>,
        sheet_path: Option<PathBuf>,
    ) -> Result<Self, PreconditionError> {
        let target_dir =
            target_dir.ok_or(PreconditionError::MissingSelection("target directory"))?;
        let sheet_path =
            sheet_path.ok_or(PreconditionError::MissingSelection("spreadsheet path"))?;
        Ok(Self {
            target_dir,
            sheet_path,
        })
    }
}
