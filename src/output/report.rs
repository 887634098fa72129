//! Human-readable report for a single IP record
//!
//! Renders one [`IpDetails`] as a multi-section text report: a CORE section
//! with the key scalar attributes, then one titled section per present
//! optional sub-object in fixed order. Styling is an injected capability so
//! the report can be rendered headless in tests or with `--no-color`.

use crate::schema::IpDetails;
use colored::Colorize;

const BANNER_WIDTH: usize = 38;

/// Styling capability for report banner lines
pub trait Styler {
    /// Style a section banner (already padded to the banner width)
    fn banner(&self, text: &str) -> String;
}

/// Terminal styling: bold bright-magenta on a white background
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorStyler;

impl Styler for ColorStyler {
    fn banner(&self, text: &str) -> String {
        text.bold().bright_magenta().on_white().to_string()
    }
}

/// No-op styling for headless rendering and piped output
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn banner(&self, text: &str) -> String {
        text.to_string()
    }
}

fn banner(styler: &dyn Styler, title: &str) -> String {
    styler.banner(&format!("{:^width$}", title, width = BANNER_WIDTH))
}

fn field(name: &str, value: impl std::fmt::Display) -> String {
    format!("{:<16}{}", name, value)
}

/// Render the multi-section report for one IP record
///
/// When the record is a bogon, only the IP and the bogon flag are emitted;
/// upstream leaves everything else unpopulated in that case.
pub fn render(d: &IpDetails, styler: &dyn Styler) -> Vec<String> {
    let mut lines = vec![banner(styler, "CORE"), field("IP", &d.ip)];

    if d.bogon {
        lines.push(field("Bogon", d.bogon));
        return lines;
    }

    lines.push(field("Anycast", d.anycast));
    lines.push(field("Hostname", &d.hostname));
    lines.push(field("City", &d.city));
    lines.push(field("Region", &d.region));
    lines.push(field(
        "Country",
        format!("{} ({})", d.country_name, d.country),
    ));
    lines.push(field("Location", &d.loc));
    lines.push(field("Organization", &d.org));
    lines.push(field("Postal", &d.postal));
    lines.push(field("Timezone", &d.timezone));

    if let Some(asn) = &d.asn {
        lines.push(String::new());
        lines.push(banner(styler, "ASN"));
        lines.push(field("ID", &asn.asn));
        lines.push(field("Name", &asn.name));
        lines.push(field("Domain", &asn.domain));
        lines.push(field("Route", &asn.route));
        lines.push(field("Type", &asn.kind));
    }

    if let Some(company) = &d.company {
        lines.push(String::new());
        lines.push(banner(styler, "COMPANY"));
        lines.push(field("Name", &company.name));
        lines.push(field("Domain", &company.domain));
        lines.push(field("Type", &company.kind));
    }

    if let Some(carrier) = &d.carrier {
        lines.push(String::new());
        lines.push(banner(styler, "CARRIER"));
        lines.push(field("Name", &carrier.name));
        lines.push(field("MCC", &carrier.mcc));
        lines.push(field("MNC", &carrier.mnc));
    }

    if let Some(privacy) = &d.privacy {
        lines.push(String::new());
        lines.push(banner(styler, "PRIVACY"));
        lines.push(field("VPN", privacy.vpn));
        lines.push(field("Proxy", privacy.proxy));
        lines.push(field("Tor", privacy.tor));
        lines.push(field("Hosting", privacy.hosting));
    }

    if let Some(abuse) = &d.abuse {
        lines.push(String::new());
        lines.push(banner(styler, "ABUSE"));
        lines.push(field("Address", &abuse.address));
        lines.push(field(
            "Country",
            format!("{} ({})", abuse.country_name, abuse.country),
        ));
        lines.push(field("Email", &abuse.email));
        lines.push(field("Name", &abuse.name));
        lines.push(field("Network", &abuse.network));
        lines.push(field("Phone", &abuse.phone));
    }

    if let Some(domains) = &d.domains {
        if domains.total > 0 {
            lines.push(String::new());
            lines.push(banner(styler, "DOMAINS"));
            lines.push(field("Total", domains.total));
            for (i, domain) in domains.domains.iter().enumerate() {
                let label = if i == 0 { "Examples" } else { "" };
                lines.push(format!("{:<13}{}: {}", label, i + 1, domain));
            }
        }
    }

    lines
}
