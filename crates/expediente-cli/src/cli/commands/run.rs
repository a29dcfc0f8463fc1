//! `expediente run <target-dir> <sheet>` – execute the batch with live progress.

use anyhow::{Context, Result};
use expediente_core::batch::{BatchEvent, BatchRunner, BatchSession};
use expediente_core::config::ExpedienteConfig;
use expediente_core::downloader::FetchOptions;
use std::path::PathBuf;

pub async fn run_batch(cfg: &ExpedienteConfig, target_dir: PathBuf, sheet: PathBuf) -> Result<()> {
    let session = BatchSession::new(Some(target_dir), Some(sheet))?;
    let opts = FetchOptions::from_config(cfg);

    // The batch runs on a blocking worker; this task only consumes progress
    // events, so terminal output never races the worker.
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<BatchEvent>();
    let printer = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            match event {
                BatchEvent::Row { percent, text } => println!("[{:5.1}%] {}", percent, text),
                BatchEvent::Download { text } => println!("         {}", text),
            }
        }
    });

    let report = tokio::task::spawn_blocking(move || {
        let runner = BatchRunner::new();
        let result = runner.start(&session, &opts, Some(&tx));
        drop(tx);
        result
    })
    .await
    .context("batch task join")??;

    let _ = printer.await;

    println!(
        "Proceso completado: {} descargado(s), {} ya existente(s), {} fallo(s), {} aviso(s); {} fila(s) saltada(s) de {}.",
        report.downloaded,
        report.skipped_existing,
        report.failed,
        report.warnings,
        report.rows_skipped,
        report.rows_total
    );
    if !report.clean() {
        tracing::warn!("{} download(s) failed; see the log for details", report.failed);
    }
    Ok(())
}
