//! Record schema for IP geolocation and ASN detail lookups
//!
//! This module declares the two record kinds returned by the lookup API and
//! the insertion-ordered batch container shared by all encoders. The types
//! are pure data: all projection and formatting behavior lives in
//! [`crate::output`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// IP-centric record and its optional sections
// =============================================================================

/// ASN information attached to an IP record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsnBlock {
    /// AS identifier, e.g. "AS15169"
    pub asn: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub domain: String,
    /// Routing prefix covering the IP
    #[serde(default)]
    pub route: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl AsnBlock {
    /// Flattened sub-column names, in declaration order
    pub const COLUMNS: &'static [&'static str] =
        &["asn_id", "asn_name", "asn_domain", "asn_route", "asn_type"];

    /// Values matching [`Self::COLUMNS`]
    pub fn flatten(&self) -> Vec<String> {
        vec![
            self.asn.clone(),
            self.name.clone(),
            self.domain.clone(),
            self.route.clone(),
            self.kind.clone(),
        ]
    }
}

/// Company information attached to an IP record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyBlock {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub domain: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl CompanyBlock {
    pub const COLUMNS: &'static [&'static str] =
        &["company_name", "company_domain", "company_type"];

    pub fn flatten(&self) -> Vec<String> {
        vec![self.name.clone(), self.domain.clone(), self.kind.clone()]
    }
}

/// Mobile carrier information attached to an IP record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierBlock {
    #[serde(default)]
    pub name: String,
    /// Mobile country code
    #[serde(default)]
    pub mcc: String,
    /// Mobile network code
    #[serde(default)]
    pub mnc: String,
}

impl CarrierBlock {
    pub const COLUMNS: &'static [&'static str] = &["carrier_name", "carrier_mcc", "carrier_mnc"];

    pub fn flatten(&self) -> Vec<String> {
        vec![self.name.clone(), self.mcc.clone(), self.mnc.clone()]
    }
}

/// Privacy service detection flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacyBlock {
    #[serde(default)]
    pub vpn: bool,
    #[serde(default)]
    pub proxy: bool,
    #[serde(default)]
    pub tor: bool,
    #[serde(default)]
    pub hosting: bool,
}

impl PrivacyBlock {
    pub const COLUMNS: &'static [&'static str] =
        &["privacy_vpn", "privacy_proxy", "privacy_tor", "privacy_hosting"];

    pub fn flatten(&self) -> Vec<String> {
        vec![
            self.vpn.to_string(),
            self.proxy.to_string(),
            self.tor.to_string(),
            self.hosting.to_string(),
        ]
    }
}

/// Abuse contact information
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbuseBlock {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub country_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub network: String,
    #[serde(default)]
    pub phone: String,
}

impl AbuseBlock {
    pub const COLUMNS: &'static [&'static str] = &[
        "abuse_address",
        "abuse_country",
        "abuse_country_name",
        "abuse_email",
        "abuse_name",
        "abuse_network",
        "abuse_phone",
    ];

    pub fn flatten(&self) -> Vec<String> {
        vec![
            self.address.clone(),
            self.country.clone(),
            self.country_name.clone(),
            self.email.clone(),
            self.name.clone(),
            self.network.clone(),
            self.phone.clone(),
        ]
    }
}

/// Domains hosted on the IP
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainsBlock {
    #[serde(default)]
    pub total: u64,
    /// Example domains, ordered by the upstream service
    #[serde(default)]
    pub domains: Vec<String>,
}

impl DomainsBlock {
    // The example list is variable-length, so it flattens into a single
    // semicolon-joined column rather than one column per entry.
    pub const COLUMNS: &'static [&'static str] = &["domains_total", "domains_examples"];

    pub fn flatten(&self) -> Vec<String> {
        vec![self.total.to_string(), self.domains.join(";")]
    }
}

/// Full IP geolocation record
///
/// All scalar attributes default to their empty value when the upstream
/// response omits them; the optional sections are independently present or
/// absent. When `bogon` is true, upstream leaves every other attribute except
/// `ip` unpopulated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IpDetails {
    pub ip: String,
    #[serde(default)]
    pub hostname: String,
    #[serde(default)]
    pub anycast: bool,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub region: String,
    /// Two-letter country code
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub country_name: String,
    /// "lat,lon" coordinate string
    #[serde(default)]
    pub loc: String,
    #[serde(default)]
    pub org: String,
    #[serde(default)]
    pub postal: String,
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub bogon: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asn: Option<AsnBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanyBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier: Option<CarrierBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<PrivacyBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abuse: Option<AbuseBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domains: Option<DomainsBlock>,
}

// =============================================================================
// ASN-centric record
// =============================================================================

/// Detail record for one autonomous system
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsnDetails {
    /// AS identifier, e.g. "AS15169"
    pub asn: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub country_name: String,
    /// Allocation date, e.g. "2000-03-30"
    #[serde(default)]
    pub allocated: String,
    /// Regional registry, e.g. "arin"
    #[serde(default)]
    pub registry: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub num_ips: u64,
    #[serde(default)]
    pub prefixes: u64,
    #[serde(default)]
    pub prefixes6: u64,
    #[serde(default)]
    pub peers: u64,
    #[serde(default)]
    pub upstreams: u64,
    #[serde(default)]
    pub downstreams: u64,
}

// =============================================================================
// Batch container
// =============================================================================

/// Insertion-ordered key-to-record mapping produced by a lookup
///
/// The insertion order is significant: it defines row emission order and is
/// stable across all encoders. Batches are built once by the lookup client
/// and consumed read-only by the output layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Batch<R> {
    entries: IndexMap<String, R>,
}

impl<R> Batch<R> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Insert a record under its identifying key, preserving insertion order
    pub fn insert(&mut self, key: impl Into<String>, record: R) {
        self.entries.insert(key.into(), record);
    }

    pub fn get(&self, key: &str) -> Option<&R> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, R> {
        self.entries.iter()
    }
}

impl<R> FromIterator<(String, R)> for Batch<R> {
    fn from_iter<T: IntoIterator<Item = (String, R)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<R: fmt::Debug> fmt::Display for Batch<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "batch of {} records", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ip_json() -> &'static str {
        r#"{
            "ip": "8.8.8.8",
            "hostname": "dns.google",
            "anycast": true,
            "city": "Mountain View",
            "region": "California",
            "country": "US",
            "country_name": "United States",
            "loc": "37.4056,-122.0775",
            "org": "AS15169 Google LLC",
            "postal": "94043",
            "timezone": "America/Los_Angeles",
            "asn": {
                "asn": "AS15169",
                "name": "Google LLC",
                "domain": "google.com",
                "route": "8.8.8.0/24",
                "type": "hosting"
            }
        }"#
    }

    #[test]
    fn test_deserialize_with_absent_sections() {
        let details: IpDetails = serde_json::from_str(sample_ip_json()).unwrap();
        assert_eq!(details.ip, "8.8.8.8");
        assert!(details.anycast);
        assert!(!details.bogon);
        assert!(details.asn.is_some());
        assert!(details.company.is_none());
        assert!(details.privacy.is_none());
    }

    #[test]
    fn test_absent_sections_omitted_on_serialize() {
        let details: IpDetails = serde_json::from_str(sample_ip_json()).unwrap();
        let out = serde_json::to_string(&details).unwrap();
        assert!(out.contains("\"asn\""));
        assert!(!out.contains("\"company\""));
        assert!(!out.contains("null"));
    }

    #[test]
    fn test_flatten_matches_columns() {
        let asn = AsnBlock {
            asn: "AS15169".to_string(),
            name: "Google LLC".to_string(),
            domain: "google.com".to_string(),
            route: "8.8.8.0/24".to_string(),
            kind: "hosting".to_string(),
        };
        assert_eq!(asn.flatten().len(), AsnBlock::COLUMNS.len());

        let privacy = PrivacyBlock {
            vpn: true,
            ..Default::default()
        };
        assert_eq!(
            privacy.flatten(),
            vec!["true", "false", "false", "false"]
        );

        let domains = DomainsBlock {
            total: 3,
            domains: vec!["a.com".to_string(), "b.com".to_string()],
        };
        assert_eq!(domains.flatten(), vec!["3", "a.com;b.com"]);
    }

    #[test]
    fn test_batch_preserves_insertion_order() {
        let mut batch: Batch<IpDetails> = Batch::new();
        for ip in ["9.9.9.9", "1.1.1.1", "8.8.8.8"] {
            batch.insert(
                ip,
                IpDetails {
                    ip: ip.to_string(),
                    ..Default::default()
                },
            );
        }
        let keys: Vec<&str> = batch.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["9.9.9.9", "1.1.1.1", "8.8.8.8"]);

        // serialization must keep the same order
        let json = serde_json::to_string(&batch).unwrap();
        let p9 = json.find("9.9.9.9").unwrap();
        let p1 = json.find("1.1.1.1").unwrap();
        let p8 = json.find("8.8.8.8").unwrap();
        assert!(p9 < p1 && p1 < p8);
    }
}
