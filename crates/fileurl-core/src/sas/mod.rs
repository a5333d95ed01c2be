//! Shared access signature (SAS) query parameters.
//!
//! The parameters are carried as an opaque token set: this module only pulls
//! them out of a query and writes them back. Changing any of them invalidates
//! the signature, and computing a new one is left to the caller.

mod ip_range;
mod protocol;

pub use ip_range::IpRange;
pub use protocol::SasProtocol;

use crate::url_parts::QueryParams;
use serde::Serialize;
use std::fmt;
use url::form_urlencoded;

const REDACTED: &str = "REDACTED";

/// Signed-access parameters recognized in a share/directory/file URL.
///
/// Every field holds the decoded query value, or an empty string when the
/// parameter was absent.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct SasQueryParameters {
    /// `sv`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,
    /// `ss`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub services: String,
    /// `srt`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resource_types: String,
    /// `spr`, see [`SasQueryParameters::protocol`].
    #[serde(skip_serializing_if = "String::is_empty")]
    pub protocol: String,
    /// `st`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub start_time: String,
    /// `se`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub expiry_time: String,
    /// `sip`, see [`SasQueryParameters::ip_range`].
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ip_range: String,
    /// `si`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub identifier: String,
    /// `sr`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resource: String,
    /// `sp`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub permissions: String,
    /// `sig`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub signature: String,
    /// `rscc`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cache_control: String,
    /// `rscd`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content_disposition: String,
    /// `rsce`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content_encoding: String,
    /// `rscl`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content_language: String,
    /// `rsct`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content_type: String,
}

impl SasQueryParameters {
    /// Extracts the SAS parameters from `params`.
    ///
    /// Keys are matched case-insensitively; the first value of each key wins.
    /// With `remove_recognized`, every recognized key is removed from `params`,
    /// leaving only the parameters this type does not know about.
    pub fn from_params(params: &mut QueryParams, remove_recognized: bool) -> Self {
        let mut sas = SasQueryParameters::default();
        let keys: Vec<String> = params.keys().map(str::to_owned).collect();
        let mut recognized = 0usize;

        for key in keys {
            let Some(slot) = sas.field_mut(&key.to_ascii_lowercase()) else {
                continue;
            };
            *slot = params.first(&key).unwrap_or_default().to_owned();
            recognized += 1;
            if remove_recognized {
                params.remove(&key);
            }
        }

        if recognized > 0 {
            tracing::debug!(recognized, remove_recognized, "extracted SAS query parameters");
        }
        sas
    }

    /// Parses a standalone SAS token such as `?sv=...&sig=...`.
    ///
    /// Unrecognized keys are returned alongside the parameters.
    pub fn from_query(query: &str) -> (Self, QueryParams) {
        let mut params = QueryParams::from_query(query.trim_start_matches('?'));
        let sas = Self::from_params(&mut params, true);
        (sas, params)
    }

    /// Form-urlencoded `key=value` pairs for every non-empty field, keys
    /// ascending. Empty when no field is set.
    pub fn encode(&self) -> String {
        let mut fields = self.fields();
        fields.sort_unstable_by_key(|(key, _)| *key);

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in fields {
            if !value.is_empty() {
                serializer.append_pair(key, value);
            }
        }
        serializer.finish()
    }

    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, value)| value.is_empty())
    }

    /// Copy with the signature replaced, safe to print or log.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if !copy.signature.is_empty() {
            copy.signature = REDACTED.to_string();
        }
        copy
    }

    /// Typed view of `spr`. `None` when absent.
    pub fn protocol(&self) -> Option<crate::Result<SasProtocol>> {
        (!self.protocol.is_empty()).then(|| self.protocol.parse())
    }

    pub fn set_protocol(&mut self, protocol: SasProtocol) {
        self.protocol = protocol.to_string();
    }

    /// Typed view of `sip`. `None` when absent.
    pub fn ip_range(&self) -> Option<crate::Result<IpRange>> {
        (!self.ip_range.is_empty()).then(|| self.ip_range.parse())
    }

    pub fn set_ip_range(&mut self, range: IpRange) {
        self.ip_range = range.to_string();
    }

    fn field_mut(&mut self, lowercase_key: &str) -> Option<&mut String> {
        let slot = match lowercase_key {
            "sv" => &mut self.version,
            "ss" => &mut self.services,
            "srt" => &mut self.resource_types,
            "spr" => &mut self.protocol,
            "st" => &mut self.start_time,
            "se" => &mut self.expiry_time,
            "sip" => &mut self.ip_range,
            "si" => &mut self.identifier,
            "sr" => &mut self.resource,
            "sp" => &mut self.permissions,
            "sig" => &mut self.signature,
            "rscc" => &mut self.cache_control,
            "rscd" => &mut self.content_disposition,
            "rsce" => &mut self.content_encoding,
            "rscl" => &mut self.content_language,
            "rsct" => &mut self.content_type,
            _ => return None,
        };
        Some(slot)
    }

    fn fields(&self) -> [(&'static str, &str); 16] {
        [
            ("sv", self.version.as_str()),
            ("ss", self.services.as_str()),
            ("srt", self.resource_types.as_str()),
            ("spr", self.protocol.as_str()),
            ("st", self.start_time.as_str()),
            ("se", self.expiry_time.as_str()),
            ("sip", self.ip_range.as_str()),
            ("si", self.identifier.as_str()),
            ("sr", self.resource.as_str()),
            ("sp", self.permissions.as_str()),
            ("sig", self.signature.as_str()),
            ("rscc", self.cache_control.as_str()),
            ("rscd", self.content_disposition.as_str()),
            ("rsce", self.content_encoding.as_str()),
            ("rscl", self.content_language.as_str()),
            ("rsct", self.content_type.as_str()),
        ]
    }
}

/// Never prints the signature.
impl fmt::Debug for SasQueryParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redacted = self.redacted();
        let mut s = f.debug_struct("SasQueryParameters");
        for (key, value) in redacted.fields() {
            if !value.is_empty() {
                s.field(key, &value);
            }
        }
        s.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_case_insensitively_and_removes() {
        let mut params =
            QueryParams::from_query("SV=2017-07-29&sp=rw&Sig=abc%2Bdef&se=2030-01-01T00%3A00%3A00Z&foo=bar");
        let sas = SasQueryParameters::from_params(&mut params, true);

        assert_eq!(sas.version, "2017-07-29");
        assert_eq!(sas.permissions, "rw");
        assert_eq!(sas.signature, "abc+def");
        assert_eq!(sas.expiry_time, "2030-01-01T00:00:00Z");
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["foo"]);
    }

    #[test]
    fn keeps_keys_when_not_removing() {
        let mut params = QueryParams::from_query("sv=2017-07-29&foo=bar");
        let sas = SasQueryParameters::from_params(&mut params, false);
        assert_eq!(sas.version, "2017-07-29");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn first_value_wins() {
        let mut params = QueryParams::from_query("sp=r&sp=w");
        let sas = SasQueryParameters::from_params(&mut params, true);
        assert_eq!(sas.permissions, "r");
        assert!(params.is_empty());
    }

    #[test]
    fn encode_sorted_and_escaped() {
        let sas = SasQueryParameters {
            version: "2017-07-29".into(),
            permissions: "r".into(),
            signature: "abc+def".into(),
            expiry_time: "2030-01-01T00:00:00Z".into(),
            ..Default::default()
        };
        assert_eq!(
            sas.encode(),
            "se=2030-01-01T00%3A00%3A00Z&sig=abc%2Bdef&sp=r&sv=2017-07-29"
        );
    }

    #[test]
    fn empty_encodes_to_nothing() {
        let sas = SasQueryParameters::default();
        assert!(sas.is_empty());
        assert_eq!(sas.encode(), "");
    }

    #[test]
    fn from_query_returns_leftovers() {
        let (sas, rest) = SasQueryParameters::from_query("?sv=2017-07-29&sr=s&x=1");
        assert_eq!(sas.resource, "s");
        assert_eq!(rest.first("x"), Some("1"));
        assert_eq!(rest.len(), 1);
    }

    #[test]
    fn debug_hides_signature() {
        let sas = SasQueryParameters {
            signature: "secret".into(),
            version: "2017-07-29".into(),
            ..Default::default()
        };
        let out = format!("{:?}", sas);
        assert!(!out.contains("secret"));
        assert!(out.contains(REDACTED));
        assert!(out.contains("2017-07-29"));
    }

    #[test]
    fn typed_accessors() {
        let mut sas = SasQueryParameters::default();
        assert!(sas.protocol().is_none());
        sas.set_protocol(SasProtocol::HttpsAndHttp);
        assert_eq!(sas.protocol, "https,http");
        assert_eq!(sas.protocol().unwrap().unwrap(), SasProtocol::HttpsAndHttp);

        sas.ip_range = "10.0.0.1-10.0.0.9".into();
        let range = sas.ip_range().unwrap().unwrap();
        assert_eq!(range.start.to_string(), "10.0.0.1");
        assert_eq!(range.end.map(|ip| ip.to_string()).as_deref(), Some("10.0.0.9"));
    }
}
