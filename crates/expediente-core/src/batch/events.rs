//! Progress events emitted by the batch worker.
//!
//! The worker sends these over a channel; the consumer (CLI or any other UI
//! collaborator) receives them on its own task, so UI state is never touched
//! from the worker thread.

/// One progress message from a running batch.
#[derive(Debug, Clone)]
pub enum BatchEvent {
    /// Emitted after each row, whether processed or skipped.
    Row {
        /// Overall completion in percent, reaches 100.0 on the last row.
        percent: f64,
        text: String,
    },
    /// Transient status at the start of one download attempt, naming the
    /// student and the file.
    Download { text: String },
}
