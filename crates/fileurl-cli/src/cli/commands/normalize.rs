//! `fileurl normalize` – parse and rebuild.

use anyhow::Result;
use fileurl_core::FileUrlParts;

pub fn run_normalize(url: &str) -> Result<String> {
    let parts: FileUrlParts = url.parse()?;
    Ok(parts.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_snapshot_key_and_order() {
        assert_eq!(
            run_normalize("https://a.example.net/share?sig=s&ShareSnapshot=snap&b=1&a=2").unwrap(),
            "https://a.example.net/share?a=2&b=1&sharesnapshot=snap&sig=s"
        );
    }
}
