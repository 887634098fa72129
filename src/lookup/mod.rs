//! Lookup client for the remote IP/ASN information service
//!
//! Thin HTTP collaborator: it fetches fully populated records and assembles
//! them into [`Batch`]es before any encoder runs. The output layer never
//! touches the network.

use anyhow::{Context, Result};
use tracing::debug;

use crate::schema::{AsnDetails, Batch, IpDetails};

const DEFAULT_API_BASE: &str = "https://ipinfo.io";

/// Client for the IP/ASN lookup API
///
/// # Example
///
/// ```rust,ignore
/// use ipscope::LookupClient;
///
/// let client = LookupClient::new(Some("token".to_string()));
/// let batch = client.lookup_ips(&["8.8.8.8".to_string()])?;
/// assert_eq!(batch.len(), 1);
/// ```
pub struct LookupClient {
    base: String,
    token: Option<String>,
}

impl LookupClient {
    pub fn new(token: Option<String>) -> Self {
        Self {
            base: DEFAULT_API_BASE.to_string(),
            token,
        }
    }

    /// Override the API base URL (e.g. for a self-hosted mirror)
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    fn url(&self, target: &str) -> String {
        match &self.token {
            Some(token) => format!("{}/{}/json?token={}", self.base, target, token),
            None => format!("{}/{}/json", self.base, target),
        }
    }

    /// Look up one IP geolocation record
    pub fn lookup_ip(&self, ip: &str) -> Result<IpDetails> {
        let url = self.url(ip);
        debug!("fetching {}", url);
        let details = ureq::get(&url)
            .call()
            .with_context(|| format!("lookup failed for {ip}"))?
            .body_mut()
            .read_json::<IpDetails>()?;
        Ok(details)
    }

    /// Look up one ASN detail record, e.g. for "AS15169"
    pub fn lookup_asn(&self, asn: &str) -> Result<AsnDetails> {
        let url = self.url(asn);
        debug!("fetching {}", url);
        let details = ureq::get(&url)
            .call()
            .with_context(|| format!("lookup failed for {asn}"))?
            .body_mut()
            .read_json::<AsnDetails>()?;
        Ok(details)
    }

    /// Look up a batch of IPs, keyed by IP in request order
    pub fn lookup_ips(&self, ips: &[String]) -> Result<Batch<IpDetails>> {
        let mut batch = Batch::new();
        for ip in ips {
            let details = self.lookup_ip(ip)?;
            batch.insert(details.ip.clone(), details);
        }
        Ok(batch)
    }

    /// Look up a batch of ASNs, keyed by ASN id in request order
    pub fn lookup_asns(&self, asns: &[String]) -> Result<Batch<AsnDetails>> {
        let mut batch = Batch::new();
        for asn in asns {
            let details = self.lookup_asn(asn)?;
            batch.insert(details.asn.clone(), details);
        }
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_without_token() {
        let client = LookupClient::new(None);
        assert_eq!(client.url("8.8.8.8"), "https://ipinfo.io/8.8.8.8/json");
    }

    #[test]
    fn test_url_with_token_and_base_override() {
        let client = LookupClient::new(Some("abc123".to_string()))
            .with_base("https://mirror.example.com");
        assert_eq!(
            client.url("AS15169"),
            "https://mirror.example.com/AS15169/json?token=abc123"
        );
    }
}
