//! Dotted field-path resolution
//!
//! Maps a path string like `asn.name` or `privacy.vpn` to an extraction
//! function over a record. Resolution is a pure, case-sensitive lookup
//! against the record schema; unrecognized paths are not an error but resolve
//! to [`FieldAccessor::Unknown`] so callers can still emit a header naming
//! the literal path with zero data rows.

use crate::schema::{
    AbuseBlock, AsnBlock, AsnDetails, CarrierBlock, CompanyBlock, DomainsBlock, IpDetails,
    PrivacyBlock,
};

/// Resolved accessor for a dotted field path
///
/// `Scalar` selects a single printable value per record (`None` when a
/// required parent section is absent). `Section` selects a whole optional
/// sub-object, flattened into its declared sub-columns (`None` when absent).
pub enum FieldAccessor<R> {
    Scalar {
        /// Column name emitted in header rows
        column: &'static str,
        get: fn(&R) -> Option<String>,
    },
    Section {
        /// Flattened sub-column names, in declaration order
        columns: &'static [&'static str],
        get: fn(&R) -> Option<Vec<String>>,
    },
    /// Unrecognized path, kept verbatim for header emission
    Unknown(String),
}

impl<R> FieldAccessor<R> {
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

/// A record kind that supports dotted-path projection
pub trait Projectable: Sized {
    /// Name of the identifying key column (`ip` or `asn`)
    const KEY_COLUMN: &'static str;

    /// The record's identifying key value
    fn key(&self) -> &str;

    /// Resolve a dotted path against this record kind's schema
    fn resolve(path: &str) -> FieldAccessor<Self>;
}

fn scalar<R>(column: &'static str, get: fn(&R) -> Option<String>) -> FieldAccessor<R> {
    FieldAccessor::Scalar { column, get }
}

fn section<R>(
    columns: &'static [&'static str],
    get: fn(&R) -> Option<Vec<String>>,
) -> FieldAccessor<R> {
    FieldAccessor::Section { columns, get }
}

impl Projectable for IpDetails {
    const KEY_COLUMN: &'static str = "ip";

    fn key(&self) -> &str {
        &self.ip
    }

    fn resolve(path: &str) -> FieldAccessor<Self> {
        match path {
            "ip" => scalar("ip", |d: &Self| Some(d.ip.clone())),
            "hostname" => scalar("hostname", |d: &Self| Some(d.hostname.clone())),
            "anycast" => scalar("anycast", |d: &Self| Some(d.anycast.to_string())),
            "city" => scalar("city", |d: &Self| Some(d.city.clone())),
            "region" => scalar("region", |d: &Self| Some(d.region.clone())),
            "country" => scalar("country", |d: &Self| Some(d.country.clone())),
            "country_name" => scalar("country_name", |d: &Self| Some(d.country_name.clone())),
            "loc" => scalar("loc", |d: &Self| Some(d.loc.clone())),
            "org" => scalar("org", |d: &Self| Some(d.org.clone())),
            "postal" => scalar("postal", |d: &Self| Some(d.postal.clone())),
            "timezone" => scalar("timezone", |d: &Self| Some(d.timezone.clone())),
            "bogon" => scalar("bogon", |d: &Self| Some(d.bogon.to_string())),

            "asn" => section(AsnBlock::COLUMNS, |d: &Self| {
                d.asn.as_ref().map(AsnBlock::flatten)
            }),
            "asn.id" => scalar("asn_id", |d: &Self| d.asn.as_ref().map(|a| a.asn.clone())),
            // "asn.asn" aliases the display name, matching the historical
            // behavior of the original tool; see DESIGN.md.
            "asn.name" | "asn.asn" => {
                scalar("asn_name", |d: &Self| d.asn.as_ref().map(|a| a.name.clone()))
            }
            "asn.domain" => scalar("asn_domain", |d: &Self| {
                d.asn.as_ref().map(|a| a.domain.clone())
            }),
            "asn.route" => scalar("asn_route", |d: &Self| {
                d.asn.as_ref().map(|a| a.route.clone())
            }),
            "asn.type" => scalar("asn_type", |d: &Self| d.asn.as_ref().map(|a| a.kind.clone())),

            "company" => section(CompanyBlock::COLUMNS, |d: &Self| {
                d.company.as_ref().map(CompanyBlock::flatten)
            }),
            "company.name" => scalar("company_name", |d: &Self| {
                d.company.as_ref().map(|c| c.name.clone())
            }),
            "company.domain" => scalar("company_domain", |d: &Self| {
                d.company.as_ref().map(|c| c.domain.clone())
            }),
            "company.type" => scalar("company_type", |d: &Self| {
                d.company.as_ref().map(|c| c.kind.clone())
            }),

            "carrier" => section(CarrierBlock::COLUMNS, |d: &Self| {
                d.carrier.as_ref().map(CarrierBlock::flatten)
            }),
            "carrier.name" => scalar("carrier_name", |d: &Self| {
                d.carrier.as_ref().map(|c| c.name.clone())
            }),
            "carrier.mcc" => scalar("carrier_mcc", |d: &Self| {
                d.carrier.as_ref().map(|c| c.mcc.clone())
            }),
            "carrier.mnc" => scalar("carrier_mnc", |d: &Self| {
                d.carrier.as_ref().map(|c| c.mnc.clone())
            }),

            "privacy" => section(PrivacyBlock::COLUMNS, |d: &Self| {
                d.privacy.as_ref().map(PrivacyBlock::flatten)
            }),
            "privacy.vpn" => scalar("privacy_vpn", |d: &Self| {
                d.privacy.as_ref().map(|p| p.vpn.to_string())
            }),
            "privacy.proxy" => scalar("privacy_proxy", |d: &Self| {
                d.privacy.as_ref().map(|p| p.proxy.to_string())
            }),
            "privacy.tor" => scalar("privacy_tor", |d: &Self| {
                d.privacy.as_ref().map(|p| p.tor.to_string())
            }),
            "privacy.hosting" => scalar("privacy_hosting", |d: &Self| {
                d.privacy.as_ref().map(|p| p.hosting.to_string())
            }),

            "abuse" => section(AbuseBlock::COLUMNS, |d: &Self| {
                d.abuse.as_ref().map(AbuseBlock::flatten)
            }),
            "abuse.address" => scalar("abuse_address", |d: &Self| {
                d.abuse.as_ref().map(|a| a.address.clone())
            }),
            "abuse.country" => scalar("abuse_country", |d: &Self| {
                d.abuse.as_ref().map(|a| a.country.clone())
            }),
            "abuse.country_name" => scalar("abuse_country_name", |d: &Self| {
                d.abuse.as_ref().map(|a| a.country_name.clone())
            }),
            "abuse.email" => scalar("abuse_email", |d: &Self| {
                d.abuse.as_ref().map(|a| a.email.clone())
            }),
            "abuse.name" => scalar("abuse_name", |d: &Self| {
                d.abuse.as_ref().map(|a| a.name.clone())
            }),
            "abuse.network" => scalar("abuse_network", |d: &Self| {
                d.abuse.as_ref().map(|a| a.network.clone())
            }),
            "abuse.phone" => scalar("abuse_phone", |d: &Self| {
                d.abuse.as_ref().map(|a| a.phone.clone())
            }),

            "domains" => section(DomainsBlock::COLUMNS, |d: &Self| {
                d.domains.as_ref().map(DomainsBlock::flatten)
            }),
            "domains.total" => scalar("domains_total", |d: &Self| {
                d.domains.as_ref().map(|x| x.total.to_string())
            }),

            other => FieldAccessor::Unknown(other.to_string()),
        }
    }
}

impl Projectable for AsnDetails {
    const KEY_COLUMN: &'static str = "asn";

    fn key(&self) -> &str {
        &self.asn
    }

    fn resolve(path: &str) -> FieldAccessor<Self> {
        match path {
            "asn" => scalar("asn", |d: &Self| Some(d.asn.clone())),
            "name" => scalar("name", |d: &Self| Some(d.name.clone())),
            "country" => scalar("country", |d: &Self| Some(d.country.clone())),
            "country_name" => scalar("country_name", |d: &Self| Some(d.country_name.clone())),
            "allocated" => scalar("allocated", |d: &Self| Some(d.allocated.clone())),
            "registry" => scalar("registry", |d: &Self| Some(d.registry.clone())),
            "domain" => scalar("domain", |d: &Self| Some(d.domain.clone())),
            "num_ips" => scalar("num_ips", |d: &Self| Some(d.num_ips.to_string())),
            "prefixes" => scalar("prefixes", |d: &Self| Some(d.prefixes.to_string())),
            "prefixes6" => scalar("prefixes6", |d: &Self| Some(d.prefixes6.to_string())),
            "peers" => scalar("peers", |d: &Self| Some(d.peers.to_string())),
            "upstreams" => scalar("upstreams", |d: &Self| Some(d.upstreams.to_string())),
            "downstreams" => scalar("downstreams", |d: &Self| Some(d.downstreams.to_string())),
            other => FieldAccessor::Unknown(other.to_string()),
        }
    }
}
