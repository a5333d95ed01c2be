//! `fileurl set-snapshot` – point a URL at a share snapshot.

use anyhow::{bail, Result};
use fileurl_core::FileUrlParts;

pub fn run_set_snapshot(url: &str, snapshot: &str) -> Result<String> {
    let mut parts: FileUrlParts = url.parse()?;
    if parts.share_name.is_empty() && !snapshot.is_empty() {
        bail!("URL does not address a share: {}", parts.without_sas());
    }
    parts.share_snapshot = snapshot.to_string();
    Ok(parts.to_string())
}
