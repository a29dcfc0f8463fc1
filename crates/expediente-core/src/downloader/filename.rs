//! Destination file-name derivation from URLs.

/// Appends `.pdf` unless the name already ends with it (case-insensitive).
pub fn ensure_pdf_extension(name: &str) -> String {
    if name.to_ascii_lowercase().ends_with(".pdf") {
        name.to_string()
    } else {
        format!("{}.pdf", name)
    }
}

/// Derives a PDF file name for a download without an explicit name.
///
/// Uses the last path segment of the original URL when it carries an
/// extension. Rewritten share links leave no usable segment (only the literal
/// `uc` token or an extension-less id), so a name is synthesized from the
/// first 8 characters of the file id, or a fixed fallback when there is none.
pub fn derive_pdf_filename(original_url: &str, file_id: Option<&str>) -> String {
    let segment = last_path_segment(original_url);
    let usable = segment
        .as_deref()
        .filter(|s| s.contains('.') && *s != "uc");
    match usable {
        Some(s) => ensure_pdf_extension(s),
        None => match file_id {
            Some(id) => {
                let short: String = id.chars().take(8).collect();
                format!("documento_{}.pdf", short)
            }
            None => "documento_descargado.pdf".to_string(),
        },
    }
}

fn last_path_segment(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().split('/').filter(|s| !s.is_empty()).last()?;
    Some(segment.to_string())
}
