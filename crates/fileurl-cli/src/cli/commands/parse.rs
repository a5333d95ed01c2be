//! `fileurl parse` – show the parts of a URL.

use anyhow::Result;
use fileurl_core::config::{FileUrlConfig, OutputFormat};
use fileurl_core::FileUrlParts;

pub fn run_parse(url: &str, json: bool, cfg: &FileUrlConfig) -> Result<String> {
    let mut parts: FileUrlParts = url.parse()?;
    if cfg.redact_signature {
        parts.sas = parts.sas.redacted();
    }

    let format = if json { OutputFormat::Json } else { cfg.output };
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&parts)?),
        OutputFormat::Text => Ok(render_text(&parts)),
    }
}

fn render_text(parts: &FileUrlParts) -> String {
    let rows = [
        ("scheme", parts.scheme.clone()),
        ("host", parts.host().to_string()),
        ("style", parts.addressing_style().as_str().to_string()),
        ("account", or_dash(parts.account_name())),
        ("share", or_dash(&parts.share_name)),
        ("path", or_dash(&parts.directory_or_file_path)),
        ("snapshot", or_dash(&parts.share_snapshot)),
        ("sas", or_dash(&parts.sas.encode())),
        ("params", or_dash(&parts.unparsed_params.encode())),
    ];
    rows.iter()
        .map(|(label, value)| format!("{:<9} {}", label, value))
        .collect::<Vec<_>>()
        .join("\n")
}

fn or_dash(s: &str) -> String {
    if s.is_empty() {
        "-".to_string()
    } else {
        s.to_string()
    }
}
