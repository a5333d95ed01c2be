//! `fileurl strip-sas` – drop SAS parameters from a URL.

use anyhow::Result;
use fileurl_core::FileUrlParts;

pub fn run_strip_sas(url: &str) -> Result<String> {
    let parts: FileUrlParts = url.parse()?;
    Ok(parts.without_sas().to_string())
}
