//! Per-row student record.

use super::CellValue;

/// One student row, built from a spreadsheet row with all three name fields
/// present. Immutable once read; discarded after processing.
#[derive(Debug, Clone)]
pub struct StudentRecord {
    pub given_name: String,
    pub family_name1: String,
    pub family_name2: String,
    /// URL-column cells paired with their column labels, in original order.
    pub url_cells: Vec<(String, CellValue)>,
}
