//! `expediente inspect <sheet>` – dry-run validation of a spreadsheet.

use anyhow::Result;
use expediente_core::folder::sanitize_folder_name;
use expediente_core::sheet::Sheet;
use std::path::Path;

/// Loads and validates the spreadsheet, reporting what a run would do.
pub fn run_inspect(sheet_path: &Path) -> Result<()> {
    let sheet = Sheet::load(sheet_path)?;

    let total = sheet.row_count();
    let mut skipped = 0usize;
    let mut folders: Vec<String> = Vec::new();
    for index in 0..total {
        match sheet.record(index) {
            Some(record) => folders.push(sanitize_folder_name(
                &record.given_name,
                &record.family_name1,
                &record.family_name2,
            )),
            None => skipped += 1,
        }
    }

    println!("{}: {} row(s), {} with incomplete names", sheet_path.display(), total, skipped);
    println!("URL columns ({}):", sheet.url_column_labels().len());
    for label in sheet.url_column_labels() {
        println!("  {}", label);
    }
    println!("Folders that a run would create ({}):", folders.len());
    for name in &folders {
        println!("  {}", name);
    }
    Ok(())
}
