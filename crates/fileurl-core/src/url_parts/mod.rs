//! Share/directory/file URL parts.
//!
//! Splits a URL into scheme, host, account (IP-endpoint style only), share,
//! directory/file path, share snapshot, SAS parameters and whatever other
//! query parameters it carries, and assembles those parts back into a URL.
//!
//! Parsing never fails: missing pieces come back as empty strings.

mod host;
mod path;
mod query;

pub use host::AddressingStyle;
pub use query::QueryParams;

use crate::error::{FileUrlError, Result};
use crate::sas::SasQueryParameters;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use url::{form_urlencoded, Url};

/// Query key marking a share snapshot. Matched case-insensitively when
/// parsing, always written in this spelling.
pub const SHARE_SNAPSHOT_KEY: &str = "sharesnapshot";

/// The components of a share, directory or file URL.
///
/// Build one with [`FileUrlParts::parse`] (or `str::parse`), change what you
/// need, then render it with `to_string()` or [`FileUrlParts::to_url`].
/// Changing any SAS field requires computing a new signature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileUrlParts {
    /// e.g. `https`
    pub scheme: String,
    /// Empty when the URL does not address a share.
    pub share_name: String,
    /// e.g. `dir/sub/file.txt`; empty for the share root.
    pub directory_or_file_path: String,
    /// Empty when the URL is not a snapshot reference.
    pub share_snapshot: String,
    pub sas: SasQueryParameters,
    /// Query parameters that are neither the snapshot nor SAS.
    pub unparsed_params: QueryParams,

    host: String,
    addressing_style: AddressingStyle,
    account_name: String,
    #[serde(skip)]
    source_path: path::SourcePath,
}

impl FileUrlParts {
    /// Empty parts for `scheme://host`, with the addressing style derived from `host`.
    pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> Self {
        let mut parts = Self {
            scheme: scheme.into(),
            ..Default::default()
        };
        parts.set_host(host);
        parts
    }

    /// Splits `url` into its parts.
    pub fn parse(url: &Url) -> Self {
        let host = host_with_port(url);
        let addressing_style = AddressingStyle::from_host(&host);
        let segments = path::split_path(url.path(), addressing_style);

        let mut params = QueryParams::from_query(url.query().unwrap_or_default());
        let share_snapshot = params
            .take_ignore_case(SHARE_SNAPSHOT_KEY)
            .and_then(|values| values.into_iter().next())
            .unwrap_or_default();
        let sas = SasQueryParameters::from_params(&mut params, true);

        tracing::debug!(
            host = %host,
            style = addressing_style.as_str(),
            share = %segments.share_name,
            snapshot = !share_snapshot.is_empty(),
            other_params = params.len(),
            "parsed file URL"
        );

        Self {
            scheme: url.scheme().to_string(),
            share_name: segments.share_name,
            directory_or_file_path: segments.directory_or_file_path,
            share_snapshot,
            sas,
            unparsed_params: params,
            host,
            addressing_style,
            account_name: segments.account_name,
            source_path: segments.source,
        }
    }

    /// Host, including `:port` when the URL had a non-default port.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Replaces the host and re-derives the addressing style from it.
    pub fn set_host(&mut self, host: impl Into<String>) {
        self.host = host.into();
        self.addressing_style = AddressingStyle::from_host(&self.host);
    }

    pub fn addressing_style(&self) -> AddressingStyle {
        self.addressing_style
    }

    /// Account name from the first path segment; always empty for named hosts.
    pub fn account_name(&self) -> &str {
        &self.account_name
    }

    /// Only written out for IP-endpoint style hosts.
    pub fn set_account_name(&mut self, account_name: impl Into<String>) {
        self.account_name = account_name.into();
    }

    pub fn is_snapshot(&self) -> bool {
        !self.share_snapshot.is_empty()
    }

    /// True when a share is addressed but no directory or file inside it.
    pub fn is_share_root(&self) -> bool {
        !self.share_name.is_empty() && self.directory_or_file_path.is_empty()
    }

    /// Copy without SAS parameters, e.g. for logging.
    pub fn without_sas(&self) -> Self {
        Self {
            sas: SasQueryParameters::default(),
            ..self.clone()
        }
    }

    /// Encoded URL path; empty when nothing below the host is addressed.
    pub fn path(&self) -> String {
        path::join_path(
            self.addressing_style,
            &self.account_name,
            &self.share_name,
            &self.directory_or_file_path,
            &self.source_path,
        )
    }

    /// Raw query: other parameters, then the snapshot, then SAS.
    pub fn query(&self) -> String {
        let mut segments = Vec::with_capacity(3);

        let other = self.unparsed_params.encode();
        if !other.is_empty() {
            segments.push(other);
        }
        if !self.share_snapshot.is_empty() {
            segments.push(
                form_urlencoded::Serializer::new(String::new())
                    .append_pair(SHARE_SNAPSHOT_KEY, &self.share_snapshot)
                    .finish(),
            );
        }
        let sas = self.sas.encode();
        if !sas.is_empty() {
            segments.push(sas);
        }

        segments.join("&")
    }

    /// Assembles the parts into a [`Url`].
    ///
    /// Fails only when the `url` crate rejects the assembled text, such as an
    /// empty host under `https`.
    pub fn to_url(&self) -> Result<Url> {
        let raw = self.to_string();
        Url::parse(&raw).map_err(|source| FileUrlError::InvalidUrl { url: raw, source })
    }
}

/// Renders `scheme://host[/path][?query]`.
impl fmt::Display for FileUrlParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}{}", self.scheme, self.host, self.path())?;
        let query = self.query();
        if !query.is_empty() {
            write!(f, "?{}", query)?;
        }
        Ok(())
    }
}

impl From<&Url> for FileUrlParts {
    fn from(url: &Url) -> Self {
        Self::parse(url)
    }
}

impl FromStr for FileUrlParts {
    type Err = FileUrlError;

    fn from_str(s: &str) -> Result<Self> {
        let url = Url::parse(s).map_err(|source| FileUrlError::InvalidUrl {
            url: s.to_string(),
            source,
        })?;
        Ok(Self::parse(&url))
    }
}

fn host_with_port(url: &Url) -> String {
    match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{host}:{port}"),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    }
}
