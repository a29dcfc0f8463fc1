//! Streaming HTTP GET into a `.part` file via the curl crate (libcurl).

use super::FetchOptions;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Transport-level failure of one GET. Any variant removes the partial file.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    Curl(#[from] curl::Error),
    #[error("HTTP {0}")]
    Http(u32),
    #[error("write failed: {0}")]
    Io(#[from] io::Error),
}

/// Headers of interest from a completed transfer.
pub(super) struct FetchedBody {
    /// Declared `Content-Type`, if any.
    pub content_type: Option<String>,
}

/// Performs a GET on `url`, streaming the body into `part_path` with a
/// bounded write buffer. Follows redirects; non-2xx statuses are errors.
/// Runs in the current thread; call from `spawn_blocking` when used from
/// async code.
pub(super) fn fetch_to_part(
    url: &str,
    part_path: &Path,
    opts: &FetchOptions,
) -> Result<FetchedBody, FetchError> {
    let file = File::create(part_path)?;
    let mut out = BufWriter::with_capacity(opts.chunk_bytes.max(1024), file);
    let mut write_err: Option<io::Error> = None;

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.timeout)?;
    easy.buffer_size(opts.chunk_bytes.max(1024))?;

    let perform_result = {
        let mut transfer = easy.transfer();
        let result = transfer.write_function(|data| {
            if let Err(e) = out.write_all(data) {
                write_err = Some(e);
                return Ok(0); // abort transfer
            }
            Ok(data.len())
        });
        match result {
            Ok(()) => transfer.perform(),
            Err(e) => Err(e),
        }
    };

    if let Err(curl_err) = perform_result {
        let _ = fs::remove_file(part_path);
        return Err(match write_err.take() {
            Some(io_err) => FetchError::Io(io_err),
            None => FetchError::Curl(curl_err),
        });
    }

    if let Err(e) = out.flush() {
        let _ = fs::remove_file(part_path);
        return Err(FetchError::Io(e));
    }
    drop(out);

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        let _ = fs::remove_file(part_path);
        return Err(FetchError::Http(code));
    }

    let content_type = easy.content_type().ok().flatten().map(str::to_string);
    Ok(FetchedBody { content_type })
}
