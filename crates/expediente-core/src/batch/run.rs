//! The batch row loop.

use super::{BatchError, BatchEvent, BatchReport, BatchSession, PreconditionError};
use crate::downloader::{self, DownloadOutcome, FetchOptions};
use crate::folder::FolderTarget;
use crate::sheet::{Sheet, StudentRecord};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::mpsc::UnboundedSender;

/// Guards against overlapping runs: a second `start` while one is in flight
/// is rejected, not queued.
#[derive(Default)]
pub struct BatchRunner {
    running: AtomicBool,
}

impl BatchRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Runs the whole batch on the calling thread. Progress events go to
    /// `progress` (when given); the report is the terminal outcome.
    pub fn start(
        &self,
        session: &BatchSession,
        opts: &FetchOptions,
        progress: Option<&UnboundedSender<BatchEvent>>,
    ) -> Result<BatchReport, BatchError> {
        if self.running.swap(true, Ordering::SeqCst) {
            return Err(PreconditionError::AlreadyRunning.into());
        }
        let result = run_session(session, opts, progress);
        self.running.store(false, Ordering::SeqCst);
        result
    }
}

fn run_session(
    session: &BatchSession,
    opts: &FetchOptions,
    progress: Option<&UnboundedSender<BatchEvent>>,
) -> Result<BatchReport, BatchError> {
    let sheet = Sheet::load(&session.sheet_path)?;
    tracing::info!(
        "batch start: {} row(s), {} URL column(s), target {}",
        sheet.row_count(),
        sheet.url_column_labels().len(),
        session.target_dir.display()
    );
    Ok(run_rows(&sheet, &session.target_dir, opts, progress))
}

/// Processes every row of an already-validated sheet, strictly sequentially.
pub fn run_rows(
    sheet: &Sheet,
    target_dir: &Path,
    opts: &FetchOptions,
    progress: Option<&UnboundedSender<BatchEvent>>,
) -> BatchReport {
    let total = sheet.row_count();
    let mut report = BatchReport {
        rows_total: total,
        ..BatchReport::default()
    };

    for index in 0..total {
        match sheet.record(index) {
            Some(record) => {
                process_record(&record, target_dir, opts, progress, &mut report);
                report.rows_processed += 1;
            }
            None => {
                tracing::debug!("skipping row {}: incomplete name fields", index + 1);
                report.rows_skipped += 1;
            }
        }
        let percent = (index + 1) as f64 / total as f64 * 100.0;
        emit(
            progress,
            BatchEvent::Row {
                percent,
                text: format!("Procesando alumno: {}/{}", index + 1, total),
            },
        );
    }

    tracing::info!(
        "batch done: {} downloaded, {} already present, {} failed, {} warning(s)",
        report.downloaded,
        report.skipped_existing,
        report.failed,
        report.warnings
    );
    report
}

fn process_record(
    record: &StudentRecord,
    target_dir: &Path,
    opts: &FetchOptions,
    progress: Option<&UnboundedSender<BatchEvent>>,
    report: &mut BatchReport,
) {
    let folder = FolderTarget::for_record(target_dir, record);
    if let Err(e) = folder.ensure_dir() {
        tracing::warn!("cannot create folder '{}': {}", folder.name(), e);
        report.failed += 1;
        return;
    }

    for (label, cell) in &record.url_cells {
        let Some(text) = cell.as_trimmed_text() else {
            continue;
        };
        if !is_http_url(&text) {
            tracing::warn!(
                "cell '{}' for {} does not look like a URL: '{}'",
                label,
                folder.name(),
                text
            );
            report.warnings += 1;
            continue;
        }

        let file_name = format!("{}.pdf", label);
        emit(
            progress,
            BatchEvent::Download {
                text: format!(
                    "Descargando para {} {}: {}",
                    record.given_name, record.family_name1, file_name
                ),
            },
        );
        match downloader::download(&text, folder.path(), Some(&file_name), opts) {
            DownloadOutcome::Downloaded {
                path,
                content_type_warning,
            } => {
                if content_type_warning {
                    report.warnings += 1;
                }
                report.downloaded += 1;
                tracing::info!("downloaded {} for {}", path.display(), folder.name());
            }
            DownloadOutcome::Skipped { .. } => {
                report.skipped_existing += 1;
            }
            DownloadOutcome::Failed { reason } => {
                tracing::warn!("download failed for {} ({}): {}", folder.name(), label, reason);
                report.failed += 1;
            }
        }
    }
}

fn is_http_url(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn emit(progress: Option<&UnboundedSender<BatchEvent>>, event: BatchEvent) {
    if let Some(tx) = progress {
        let _ = tx.send(event);
    }
}
