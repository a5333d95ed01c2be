use crate::error::FileUrlError;
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

/// Address range a SAS is valid from (`sip`): a single address or `start-end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IpRange {
    pub start: IpAddr,
    /// `None` for a single address.
    pub end: Option<IpAddr>,
}

impl IpRange {
    pub fn single(ip: IpAddr) -> Self {
        Self {
            start: ip,
            end: None,
        }
    }

    pub fn contains(&self, ip: IpAddr) -> bool {
        match self.end {
            None => ip == self.start,
            Some(end) => match (self.start, end, ip) {
                (IpAddr::V4(s), IpAddr::V4(e), IpAddr::V4(ip)) => s <= ip && ip <= e,
                (IpAddr::V6(s), IpAddr::V6(e), IpAddr::V6(ip)) => s <= ip && ip <= e,
                _ => false,
            },
        }
    }
}

impl fmt::Display for IpRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "{}-{}", self.start, end),
            None => write!(f, "{}", self.start),
        }
    }
}

impl FromStr for IpRange {
    type Err = FileUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FileUrlError::InvalidIpRange(s.to_string());
        match s.split_once('-') {
            Some((start, end)) => Ok(Self {
                start: start.trim().parse().map_err(|_| invalid())?,
                end: Some(end.trim().parse().map_err(|_| invalid())?),
            }),
            None => Ok(Self::single(s.trim().parse().map_err(|_| invalid())?)),
        }
    }
}
