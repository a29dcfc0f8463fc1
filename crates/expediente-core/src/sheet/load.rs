//! Workbook loading via calamine (first worksheet only).

use super::{CellValue, SheetError};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

pub(super) fn load_workbook(path: &Path) -> Result<(Vec<String>, Vec<Vec<CellValue>>), SheetError> {
    if !path.exists() {
        return Err(SheetError::FileNotFound(path.to_path_buf()));
    }
    let mut workbook = open_workbook_auto(path).map_err(|e| {
        tracing::debug!("cannot open workbook {}: {}", path.display(), e);
        SheetError::EmptyOrMalformed
    })?;
    let sheet_names = workbook.sheet_names().to_vec();
    let first = sheet_names.first().ok_or(SheetError::EmptyOrMalformed)?;
    let range = workbook
        .worksheet_range(first)
        .map_err(|e| {
            tracing::debug!("cannot read worksheet '{}': {}", first, e);
            SheetError::EmptyOrMalformed
        })?;

    let mut rows = range.rows();
    let header_row = rows.next().ok_or(SheetError::EmptyOrMalformed)?;
    let headers: Vec<String> = header_row.iter().map(header_label).collect();
    let data: Vec<Vec<CellValue>> = rows
        .map(|row| row.iter().map(to_cell).collect())
        .collect();
    Ok((headers, data))
}

fn header_label(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        other => to_cell(other).as_trimmed_text().unwrap_or_default(),
    }
}

fn to_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Missing,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Text(if *b { "TRUE" } else { "FALSE" }.to_string()),
        Data::DateTime(dt) => CellValue::Text(dt.to_string()),
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        // Formula errors carry no usable value; treat like a blank cell.
        Data::Error(_) => CellValue::Missing,
    }
}
