//! `expediente resolve <url>` – show the direct-download form of a share URL.

use anyhow::Result;
use expediente_core::resolver::{self, Resolution};

pub fn run_resolve(url: &str) -> Result<()> {
    match resolver::resolve(url) {
        Resolution::Direct(u) => {
            println!("{}", u);
            println!("  (not a known share host; used as-is)");
        }
        Resolution::Rewritten { url, file_id } => {
            println!("{}", url);
            println!("  (file id {})", file_id);
        }
        Resolution::Unresolvable => {
            anyhow::bail!("share URL has no extractable file id: {}", url);
        }
    }
    Ok(())
}
