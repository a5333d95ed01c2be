//! `fileurl build` – assemble a URL from parts.

use anyhow::Result;
use clap::Args;
use fileurl_core::{FileUrlError, FileUrlParts, SasQueryParameters};

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// URL scheme.
    #[arg(long, default_value = "https")]
    pub scheme: String,
    /// Host, optionally with :port. An IP literal switches to account-in-path addressing.
    #[arg(long)]
    pub host: String,
    /// Account name (only written for IP hosts).
    #[arg(long)]
    pub account: Option<String>,
    /// Share name.
    #[arg(long)]
    pub share: Option<String>,
    /// Directory or file path inside the share.
    #[arg(long)]
    pub path: Option<String>,
    /// Share snapshot timestamp.
    #[arg(long)]
    pub snapshot: Option<String>,
    /// SAS token, e.g. "sv=2017-07-29&sp=r&sig=...".
    #[arg(long)]
    pub sas: Option<String>,
    /// Extra query parameter as key=value; repeatable.
    #[arg(long = "param", value_name = "KEY=VALUE")]
    pub params: Vec<String>,
}

pub fn run_build(args: &BuildArgs) -> Result<String> {
    let mut parts = FileUrlParts::new(&args.scheme, &args.host);

    if let Some(account) = &args.account {
        if !parts.addressing_style().is_ip_endpoint() {
            tracing::warn!(host = %args.host, "account name is only used with IP hosts; ignoring it");
        }
        parts.set_account_name(account);
    }
    parts.share_name = args.share.clone().unwrap_or_default();
    parts.directory_or_file_path = args.path.clone().unwrap_or_default();
    parts.share_snapshot = args.snapshot.clone().unwrap_or_default();

    if let Some(token) = &args.sas {
        let (sas, rest) = SasQueryParameters::from_query(token);
        for (key, values) in rest.iter() {
            tracing::warn!(key, "not a SAS parameter; keeping it as a plain query parameter");
            for value in values {
                parts.unparsed_params.append(key, value.as_str());
            }
        }
        parts.sas = sas;
    }

    for pair in &args.params {
        let (key, value) = parse_query_pair(pair)?;
        parts.unparsed_params.append(key, value);
    }

    Ok(parts.to_url()?.into())
}

fn parse_query_pair(pair: &str) -> Result<(&str, &str), FileUrlError> {
    pair.split_once('=').ok_or_else(|| FileUrlError::InvalidQueryPair {
        pair: pair.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(host: &str) -> BuildArgs {
        BuildArgs {
            scheme: "https".to_string(),
            host: host.to_string(),
            account: None,
            share: None,
            path: None,
            snapshot: None,
            sas: None,
            params: Vec::new(),
        }
    }

    #[test]
    fn builds_named_host_url() {
        let a = BuildArgs {
            share: Some("share".into()),
            path: Some("dir/file name.txt".into()),
            snapshot: Some("snap".into()),
            sas: Some("?sp=r&sv=2017-07-29&sig=s".into()),
            params: vec!["timeout=30".into()],
            ..args("acct.file.example.net")
        };
        assert_eq!(
            run_build(&a).unwrap(),
            "https://acct.file.example.net/share/dir/file%20name.txt?timeout=30&sharesnapshot=snap&sig=s&sp=r&sv=2017-07-29"
        );
    }

    #[test]
    fn builds_ip_endpoint_url() {
        let a = BuildArgs {
            scheme: "http".into(),
            account: Some("devaccount".into()),
            share: Some("share".into()),
            ..args("127.0.0.1:10000")
        };
        assert_eq!(run_build(&a).unwrap(), "http://127.0.0.1:10000/devaccount/share");
    }

    #[test]
    fn non_sas_keys_in_token_become_params() {
        let a = BuildArgs {
            sas: Some("sv=2017-07-29&comp=list".into()),
            ..args("acct.file.example.net")
        };
        assert_eq!(
            run_build(&a).unwrap(),
            "https://acct.file.example.net/?comp=list&sv=2017-07-29"
        );
    }

    #[test]
    fn rejects_param_without_equals() {
        let a = BuildArgs {
            params: vec!["novalue".into()],
            ..args("acct.file.example.net")
        };
        let err = run_build(&a).unwrap_err();
        assert!(err.to_string().contains("novalue"));
    }

    #[test]
    fn rejects_empty_host() {
        assert!(run_build(&args("")).is_err());
    }
}
