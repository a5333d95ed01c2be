//! Error type for the fallible string entry points.
//!
//! Parsing a `url::Url` into parts and rendering parts back to a string never
//! fail; only turning raw text into a URL (or into one of the typed SAS
//! values) can.

/// Errors raised while turning raw text into URL parts or SAS values.
#[derive(Debug, thiserror::Error)]
pub enum FileUrlError {
    /// The text is not a URL the `url` crate accepts.
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A `key=value` query pair without the `=`.
    #[error("query pair {pair:?} is missing '='")]
    InvalidQueryPair { pair: String },

    /// `spr` value other than `https` or `https,http`.
    #[error("unknown SAS protocol {0:?}")]
    UnknownSasProtocol(String),

    /// `sip` value that is not `ip` or `ip-ip`.
    #[error("invalid SAS IP range {0:?}")]
    InvalidIpRange(String),
}

pub type Result<T, E = FileUrlError> = std::result::Result<T, E>;
