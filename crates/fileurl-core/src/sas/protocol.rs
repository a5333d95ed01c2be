use crate::error::FileUrlError;
use std::fmt;
use std::str::FromStr;

/// Protocols a SAS permits (`spr`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SasProtocol {
    /// `https`
    Https,
    /// `https,http`
    HttpsAndHttp,
}

impl fmt::Display for SasProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SasProtocol::Https => f.write_str("https"),
            SasProtocol::HttpsAndHttp => f.write_str("https,http"),
        }
    }
}

impl FromStr for SasProtocol {
    type Err = FileUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "https" => Ok(SasProtocol::Https),
            "https,http" => Ok(SasProtocol::HttpsAndHttp),
            other => Err(FileUrlError::UnknownSasProtocol(other.to_string())),
        }
    }
}
