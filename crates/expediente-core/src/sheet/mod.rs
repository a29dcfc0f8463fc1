//! Spreadsheet loading and row modeling.
//!
//! Loads a workbook into an ordered sequence of rows addressable by column
//! label, validates the required name columns, and builds one
//! [`StudentRecord`] per complete row. Columns from [`URL_COLUMNS_FROM`]
//! onward are candidate document-URL columns; their labels become the
//! downloaded file-name stems.

mod cell;
mod load;
mod record;

pub use cell::CellValue;
pub use record::StudentRecord;

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Exact header label of the given-name column.
pub const COL_GIVEN_NAME: &str = "Nombre del alumno/a";
/// Exact header label of the first family-name column.
pub const COL_FAMILY_NAME_1: &str = "Primer apellido del alumno/a";
/// Exact header label of the second family-name column.
pub const COL_FAMILY_NAME_2: &str = "Segundo apellido del alumno/a";

/// Columns before this index are metadata/name columns; everything from this
/// index onward is treated as a candidate URL column.
pub const URL_COLUMNS_FROM: usize = 9;

/// Fatal spreadsheet errors. Any of these aborts a batch before row processing.
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("spreadsheet not found: {0}")]
    FileNotFound(PathBuf),
    #[error("spreadsheet is empty or has no parsable tabular content")]
    EmptyOrMalformed,
    #[error("spreadsheet is missing required column '{0}'")]
    MissingColumn(String),
}

/// An in-memory spreadsheet: one header row plus data rows indexed 0..N-1.
#[derive(Debug)]
pub struct Sheet {
    headers: Vec<String>,
    rows: Vec<Vec<CellValue>>,
    /// Column indices of (given name, family name 1, family name 2).
    name_indices: [usize; 3],
}

impl Sheet {
    /// Builds a sheet from already-parsed headers and rows, validating that
    /// the three required name columns are present by exact label match.
    pub fn from_parts(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Result<Self, SheetError> {
        if headers.is_empty() {
            return Err(SheetError::EmptyOrMalformed);
        }
        let mut name_indices = [0usize; 3];
        for (slot, label) in [COL_GIVEN_NAME, COL_FAMILY_NAME_1, COL_FAMILY_NAME_2]
            .iter()
            .enumerate()
        {
            name_indices[slot] = headers
                .iter()
                .position(|h| h == label)
                .ok_or_else(|| SheetError::MissingColumn((*label).to_string()))?;
        }
        Ok(Self {
            headers,
            rows,
            name_indices,
        })
    }

    /// Loads and validates a workbook from disk (first worksheet only).
    pub fn load(path: &Path) -> Result<Self, SheetError> {
        let (headers, rows) = load::load_workbook(path)?;
        Self::from_parts(headers, rows)
    }

    /// Number of data rows (header excluded).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Labels of the URL columns, in original left-to-right order.
    pub fn url_column_labels(&self) -> &[String] {
        if self.headers.len() > URL_COLUMNS_FROM {
            &self.headers[URL_COLUMNS_FROM..]
        } else {
            &[]
        }
    }

    /// Builds the record for row `index`, or `None` if any required name
    /// field is blank/missing (such rows are excluded from processing).
    pub fn record(&self, index: usize) -> Option<StudentRecord> {
        let row = self.rows.get(index)?;
        let name_of = |col: usize| {
            row.get(col)
                .unwrap_or(&CellValue::Missing)
                .as_trimmed_text()
        };
        let given_name = name_of(self.name_indices[0])?;
        let family_name1 = name_of(self.name_indices[1])?;
        let family_name2 = name_of(self.name_indices[2])?;

        let url_cells = self
            .url_column_labels()
            .iter()
            .enumerate()
            .map(|(offset, label)| {
                let cell = row
                    .get(URL_COLUMNS_FROM + offset)
                    .cloned()
                    .unwrap_or(CellValue::Missing);
                (label.clone(), cell)
            })
            .collect();

        Some(StudentRecord {
            given_name,
            family_name1,
            family_name2,
            url_cells,
        })
    }
}
