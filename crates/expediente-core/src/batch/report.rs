//! Aggregate outcome of one batch run.

/// Counters for a completed batch. A batch completes even when individual
/// downloads fail; the counters are how those failures surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Data rows in the spreadsheet.
    pub rows_total: usize,
    /// Rows with complete name fields that were processed.
    pub rows_processed: usize,
    /// Rows excluded for blank/missing name fields.
    pub rows_skipped: usize,
    /// Files fetched over the network.
    pub downloaded: usize,
    /// Files already present; no request made.
    pub skipped_existing: usize,
    /// Failed download attempts (network, status, unresolvable share URL).
    pub failed: usize,
    /// Non-fatal warnings: non-URL cell content or suspicious content types.
    pub warnings: usize,
}

impl BatchReport {
    /// True when every attempted download succeeded or was already present.
    pub fn clean(&self) -> bool {
        self.failed == 0
    }
}
