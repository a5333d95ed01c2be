//! Addressing style detection from the URL host.

use serde::Serialize;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// How a URL addresses the storage account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AddressingStyle {
    /// `https://account.file.example.net/share/dir/file`: the account is part of the host name.
    #[default]
    NamedHost,
    /// `http://10.0.0.1:10000/account/share/dir/file`: the host is an IP literal and the
    /// account name is the first path segment.
    IpEndpoint,
}

impl AddressingStyle {
    /// Classifies a host, which may carry a trailing `:port`.
    ///
    /// Anything that is not an IPv4 or IPv6 literal once the port is gone is
    /// treated as a named host, including the empty string.
    pub fn from_host(host: &str) -> Self {
        if host_ip(host).is_some() {
            AddressingStyle::IpEndpoint
        } else {
            AddressingStyle::NamedHost
        }
    }

    pub fn is_ip_endpoint(self) -> bool {
        self == AddressingStyle::IpEndpoint
    }

    /// Short label used in text output.
    pub fn as_str(self) -> &'static str {
        match self {
            AddressingStyle::NamedHost => "named-host",
            AddressingStyle::IpEndpoint => "ip-endpoint",
        }
    }
}

/// Extracts the IP literal from `host`, `host:port`, `[v6]` or `[v6]:port`.
fn host_ip(host: &str) -> Option<IpAddr> {
    // Bare IPv6 ("::1") contains colons, so try the whole string first.
    if let Ok(ip) = host.parse::<IpAddr>() {
        return Some(ip);
    }

    if let Some(rest) = host.strip_prefix('[') {
        let (inner, tail) = rest.split_once(']')?;
        if !tail.is_empty() && !tail.starts_with(':') {
            return None;
        }
        return inner.parse::<Ipv6Addr>().ok().map(IpAddr::V6);
    }

    let (name, _port) = host.rsplit_once(':')?;
    name.parse::<Ipv4Addr>().ok().map(IpAddr::V4)
}
