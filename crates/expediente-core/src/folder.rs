//! Folder naming and creation for student records.

use crate::sheet::StudentRecord;
use std::io;
use std::path::{Path, PathBuf};

/// Builds the folder name `"{family1} {family2} {given}"` filtered to a safe
/// character set. Keeps alphanumerics (including accented letters), spaces,
/// `.`, `_` and `-`; collapses whitespace runs; trims the ends.
///
/// Pure and deterministic, so re-runs map the same student to the same folder.
pub fn sanitize_folder_name(given_name: &str, family_name1: &str, family_name2: &str) -> String {
    let raw = format!("{} {} {}", family_name1, family_name2, given_name);
    let filtered: String = raw
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '.' | '_' | '-'))
        .collect();
    filtered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A student's destination folder: sanitized name plus its path under the
/// chosen base directory.
#[derive(Debug, Clone)]
pub struct FolderTarget {
    name: String,
    path: PathBuf,
}

impl FolderTarget {
    pub fn for_record(base_dir: &Path, record: &StudentRecord) -> Self {
        let name = sanitize_folder_name(
            &record.given_name,
            &record.family_name1,
            &record.family_name2,
        );
        let path = base_dir.join(&name);
        Self { name, path }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the folder; succeeds if it already exists.
    pub fn ensure_dir(&self) -> io::Result<()> {
        std::fs::create_dir_all(&self.path)
    }
}
