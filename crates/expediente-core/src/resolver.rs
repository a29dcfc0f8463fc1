//! Share-link resolution to direct-download URLs.
//!
//! Google Drive share links do not serve file bytes directly. When a cell URL
//! points at the Drive host, the embedded file id is extracted from one of the
//! accepted shapes (`/file/d/<id>`, `open?id=<id>`, `uc?id=<id>`) and the URL
//! is rewritten to the `uc?export=download` form. Every other host is passed
//! through unchanged.

const DRIVE_HOST: &str = "drive.google.com";

/// Outcome of resolving one raw URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Not a special host; use the URL as-is.
    Direct(String),
    /// Rewritten to a direct-download URL.
    Rewritten { url: String, file_id: String },
    /// Special host but no extractable file id; the download must be aborted
    /// without a network call.
    Unresolvable,
}

/// Resolves a raw URL, rewriting known Drive share links.
///
/// `resolve("https://drive.google.com/file/d/ABC123/view")` yields the
/// rewritten `https://drive.google.com/uc?export=download&id=ABC123`.
pub fn resolve(raw: &str) -> Resolution {
    let parsed = match url::Url::parse(raw) {
        Ok(u) => u,
        Err(_) => return Resolution::Direct(raw.to_string()),
    };
    if parsed.host_str() != Some(DRIVE_HOST) {
        return Resolution::Direct(raw.to_string());
    }

    match extract_file_id(&parsed) {
        Some(file_id) => {
            let url = format!("https://{}/uc?export=download&id={}", DRIVE_HOST, file_id);
            Resolution::Rewritten { url, file_id }
        }
        None => Resolution::Unresolvable,
    }
}

/// File ids are `[A-Za-z0-9_-]+`; anything past the first other character is
/// not part of the id.
fn valid_id_prefix(candidate: &str) -> Option<String> {
    let id: String = candidate
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect();
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

fn extract_file_id(url: &url::Url) -> Option<String> {
    // Path shape: /file/d/<id>/...
    if let Some(mut segments) = url.path_segments() {
        if segments.next() == Some("file") && segments.next() == Some("d") {
            if let Some(id) = segments.next().and_then(valid_id_prefix) {
                return Some(id);
            }
        }
    }
    // Query shape: open?id=<id>, uc?id=<id>, or any ?id=<id> on the Drive host.
    url.query_pairs()
        .find_map(|(k, v)| if k == "id" { valid_id_prefix(&v) } else { None })
}
