//! Document downloader: resolve, name, then skip-or-fetch.
//!
//! One call per URL cell. The share-link resolver runs first; the destination
//! file name is either the caller's suggestion or derived from the URL; an
//! already-existing destination short-circuits without any network request,
//! which is what makes repeated runs safe at per-file granularity.

mod fetch;
mod filename;

pub use fetch::FetchError;
pub use filename::{derive_pdf_filename, ensure_pdf_extension};

use crate::config::ExpedienteConfig;
use crate::resolver::{self, Resolution};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Temporary file suffix used before atomic rename to the final name.
pub const PART_SUFFIX: &str = ".part";

/// Per-request fetch parameters, normally taken from [`ExpedienteConfig`].
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Total per-request timeout.
    pub timeout: Duration,
    /// Connect timeout.
    pub connect_timeout: Duration,
    /// Write buffer size; bounds memory regardless of file size.
    pub chunk_bytes: usize,
    /// Fail downloads whose Content-Type looks wrong instead of warning.
    pub strict_content_type: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self::from_config(&ExpedienteConfig::default())
    }
}

impl FetchOptions {
    pub fn from_config(cfg: &ExpedienteConfig) -> Self {
        Self {
            timeout: Duration::from_secs(cfg.request_timeout_secs),
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            chunk_bytes: cfg.chunk_bytes,
            strict_content_type: cfg.strict_content_type,
        }
    }
}

/// Result of one download attempt.
#[derive(Debug)]
pub enum DownloadOutcome {
    /// Destination already exists; no network request was made.
    Skipped { path: PathBuf },
    /// Body written to `path`. `content_type_warning` is set when the response
    /// declared neither PDF nor generic binary content (non-fatal).
    Downloaded {
        path: PathBuf,
        content_type_warning: bool,
    },
    /// Network error, non-2xx status, or unresolvable share URL.
    Failed { reason: String },
}

/// Downloads `url` into `destination_folder`.
///
/// With `file_name = None` a name is derived from the URL path (see
/// [`derive_pdf_filename`]); either way the final name ends in `.pdf`.
/// The body streams into a `.part` file which is renamed on success and
/// removed on failure, so a failed attempt never leaves a partial file.
pub fn download(
    url: &str,
    destination_folder: &Path,
    file_name: Option<&str>,
    opts: &FetchOptions,
) -> DownloadOutcome {
    let raw = url.trim();
    if raw.is_empty() {
        return DownloadOutcome::Failed {
            reason: "empty URL".to_string(),
        };
    }

    let (fetch_url, file_id) = match resolver::resolve(raw) {
        Resolution::Direct(u) => (u, None),
        Resolution::Rewritten { url, file_id } => {
            tracing::info!("share URL rewritten for direct download: {} -> {}", raw, url);
            (url, Some(file_id))
        }
        Resolution::Unresolvable => {
            return DownloadOutcome::Failed {
                reason: format!("no extractable file id in share URL: {}", raw),
            };
        }
    };

    let name = match file_name {
        Some(n) => ensure_pdf_extension(n),
        None => derive_pdf_filename(raw, file_id.as_deref()),
    };
    let destination = destination_folder.join(&name);
    if destination.exists() {
        tracing::info!("'{}' already exists, skipping download", destination.display());
        return DownloadOutcome::Skipped { path: destination };
    }

    let part_path = PathBuf::from(format!("{}{}", destination.display(), PART_SUFFIX));
    let fetched = match fetch::fetch_to_part(&fetch_url, &part_path, opts) {
        Ok(f) => f,
        Err(e) => {
            return DownloadOutcome::Failed {
                reason: format!("GET {}: {}", fetch_url, e),
            }
        }
    };

    let content_type = fetched.content_type.unwrap_or_default();
    let looks_binary =
        content_type.contains("application/pdf") || content_type.contains("octet-stream");
    if !looks_binary {
        if opts.strict_content_type {
            let _ = std::fs::remove_file(&part_path);
            return DownloadOutcome::Failed {
                reason: format!("Content-Type '{}' is not a PDF (strict mode)", content_type),
            };
        }
        tracing::warn!(
            "'{}' does not look like a PDF (Content-Type: '{}'), saving anyway as {}",
            raw,
            content_type,
            name
        );
    }

    if let Err(e) = std::fs::rename(&part_path, &destination) {
        let _ = std::fs::remove_file(&part_path);
        return DownloadOutcome::Failed {
            reason: format!("finalize {}: {}", destination.display(), e),
        };
    }
    DownloadOutcome::Downloaded {
        path: destination,
        content_type_warning: !looks_binary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_url_fails_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = download("   ", dir.path(), None, &FetchOptions::default());
        assert!(matches!(outcome, DownloadOutcome::Failed { .. }));
    }

    #[test]
    fn unresolvable_share_url_fails_without_network() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = download(
            "https://drive.google.com/drive/my-drive",
            dir.path(),
            None,
            &FetchOptions::default(),
        );
        match outcome {
            DownloadOutcome::Failed { reason } => assert!(reason.contains("file id")),
            other => panic!("expected Failed, got {:?}", other),
        }
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn existing_destination_is_skipped_before_any_request() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join("Certificado.pdf");
        std::fs::write(&existing, b"%PDF-1.4").unwrap();
        // The URL points nowhere; the skip must happen before it is used.
        let outcome = download(
            "https://127.0.0.1:1/never-contacted",
            dir.path(),
            Some("Certificado"),
            &FetchOptions::default(),
        );
        match outcome {
            DownloadOutcome::Skipped { path } => assert_eq!(path, existing),
            other => panic!("expected Skipped, got {:?}", other),
        }
    }

    #[test]
    fn suggested_name_gains_pdf_extension() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Notas.pdf"), b"x").unwrap();
        let outcome = download(
            "https://127.0.0.1:1/never-contacted",
            dir.path(),
            Some("Notas"),
            &FetchOptions::default(),
        );
        assert!(matches!(outcome, DownloadOutcome::Skipped { .. }));
    }
}
