//! Tagged cell values at the workbook boundary.
//!
//! Spreadsheet cells arrive as text, numbers, or missing values. Normalizing
//! them here keeps "not-a-number" style sentinels out of the core logic.

/// One spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Missing,
}

impl CellValue {
    /// Normalized text content: `None` for missing cells and for text that is
    /// blank after trimming. Whole numbers render without a decimal point.
    pub fn as_trimmed_text(&self) -> Option<String> {
        match self {
            CellValue::Missing => None,
            CellValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            CellValue::Number(n) => {
                if n.fract() == 0.0 {
                    Some(format!("{:.0}", n))
                } else {
                    Some(n.to_string())
                }
            }
        }
    }
}
