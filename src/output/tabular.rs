//! CSV encoding for full batches and projected rows
//!
//! Quoting follows RFC 4180 via the `csv` crate: fields containing the
//! separator, quote character, or a newline are quoted, and quote characters
//! inside quoted fields are doubled. Output is flushed after each row so
//! large batches can be piped interactively; a failed sink write aborts the
//! remaining emission and partial output is expected.

use anyhow::Result;
use std::io::Write;

use crate::output::project::Row;
use crate::schema::{AsnDetails, Batch, IpDetails};

/// A record kind with a fixed full-table column set
///
/// Columns follow schema declaration order. Nested sections are not
/// auto-expanded in full mode: each contributes one dedicated column holding
/// its canonical string form (compact JSON), empty when the section is
/// absent.
pub trait TableRecord {
    const COLUMNS: &'static [&'static str];

    /// Cell values matching [`Self::COLUMNS`]
    fn cells(&self) -> Result<Vec<String>>;
}

fn section_cell<T: serde::Serialize>(section: &Option<T>) -> Result<String> {
    match section {
        Some(v) => Ok(serde_json::to_string(v)?),
        None => Ok(String::new()),
    }
}

impl TableRecord for IpDetails {
    const COLUMNS: &'static [&'static str] = &[
        "ip", "hostname", "anycast", "city", "region", "country", "country_name", "loc", "org",
        "postal", "timezone", "bogon", "asn", "company", "carrier", "privacy", "abuse", "domains",
    ];

    fn cells(&self) -> Result<Vec<String>> {
        Ok(vec![
            self.ip.clone(),
            self.hostname.clone(),
            self.anycast.to_string(),
            self.city.clone(),
            self.region.clone(),
            self.country.clone(),
            self.country_name.clone(),
            self.loc.clone(),
            self.org.clone(),
            self.postal.clone(),
            self.timezone.clone(),
            self.bogon.to_string(),
            section_cell(&self.asn)?,
            section_cell(&self.company)?,
            section_cell(&self.carrier)?,
            section_cell(&self.privacy)?,
            section_cell(&self.abuse)?,
            section_cell(&self.domains)?,
        ])
    }
}

impl TableRecord for AsnDetails {
    const COLUMNS: &'static [&'static str] = &[
        "asn",
        "name",
        "country",
        "country_name",
        "allocated",
        "registry",
        "domain",
        "num_ips",
        "prefixes",
        "prefixes6",
        "peers",
        "upstreams",
        "downstreams",
    ];

    fn cells(&self) -> Result<Vec<String>> {
        Ok(vec![
            self.asn.clone(),
            self.name.clone(),
            self.country.clone(),
            self.country_name.clone(),
            self.allocated.clone(),
            self.registry.clone(),
            self.domain.clone(),
            self.num_ips.to_string(),
            self.prefixes.to_string(),
            self.prefixes6.to_string(),
            self.peers.to_string(),
            self.upstreams.to_string(),
            self.downstreams.to_string(),
        ])
    }
}

/// Write a full-record table: header from the schema column set, one row per
/// batch entry in insertion order
pub fn write_full_table<R: TableRecord, W: Write>(batch: &Batch<R>, sink: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(sink);
    writer.write_record(R::COLUMNS)?;
    writer.flush()?;
    for (_, record) in batch.iter() {
        writer.write_record(record.cells()?)?;
        writer.flush()?;
    }
    Ok(())
}

/// Serialize projected rows, flushing after each one
pub fn write_rows<W: Write>(rows: impl Iterator<Item = Row>, sink: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(sink);
    for row in rows {
        writer.write_record(&row)?;
        writer.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::project::{project, ProjectOptions};
    use crate::output::resolver::Projectable;
    use crate::schema::AsnBlock;

    fn sample_batch() -> Batch<IpDetails> {
        let mut batch = Batch::new();
        batch.insert(
            "8.8.8.8",
            IpDetails {
                ip: "8.8.8.8".to_string(),
                city: "Mountain View".to_string(),
                ..Default::default()
            },
        );
        batch
    }

    fn project_to_string(batch: &Batch<IpDetails>, path: &str, options: ProjectOptions) -> String {
        let accessor = IpDetails::resolve(path);
        let mut buf = Vec::new();
        write_rows(project(batch, &accessor, options), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_projected_scalar_with_key_column() {
        let out = project_to_string(&sample_batch(), "city", ProjectOptions::default());
        assert_eq!(out, "ip,city\n8.8.8.8,Mountain View\n");
    }

    #[test]
    fn test_projected_scalar_field_only() {
        let out = project_to_string(
            &sample_batch(),
            "city",
            ProjectOptions {
                emit_header: true,
                include_key_column: false,
            },
        );
        assert_eq!(out, "city\nMountain View\n");
    }

    #[test]
    fn test_projected_scalar_absent_section_blank_cell() {
        let out = project_to_string(&sample_batch(), "asn.name", ProjectOptions::default());
        assert_eq!(out, "ip,asn_name\n8.8.8.8,\n");
    }

    #[test]
    fn test_projected_unknown_path_header_only() {
        let out = project_to_string(&sample_batch(), "unknown_xyz", ProjectOptions::default());
        assert_eq!(out, "ip,unknown_xyz\n");
    }

    #[test]
    fn test_quoting_rules() {
        let mut batch = Batch::new();
        batch.insert(
            "1.2.3.4",
            IpDetails {
                ip: "1.2.3.4".to_string(),
                org: "Acme, Inc. \"networks\"".to_string(),
                ..Default::default()
            },
        );
        let out = project_to_string(&batch, "org", ProjectOptions::default());
        assert_eq!(out, "ip,org\n1.2.3.4,\"Acme, Inc. \"\"networks\"\"\"\n");
    }

    #[test]
    fn test_full_table_header_and_section_cells() {
        let mut batch = sample_batch();
        batch.insert(
            "9.9.9.9",
            IpDetails {
                ip: "9.9.9.9".to_string(),
                asn: Some(AsnBlock {
                    asn: "AS19281".to_string(),
                    name: "Quad9".to_string(),
                    ..Default::default()
                }),
                ..Default::default()
            },
        );
        let mut buf = Vec::new();
        write_full_table(&batch, &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        let mut lines = out.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("ip,hostname,anycast,city"));
        assert!(header.ends_with("asn,company,carrier,privacy,abuse,domains"));
        // one row per entry regardless of section presence
        assert_eq!(lines.clone().count(), 2);
        let quad9 = lines.nth(1).unwrap();
        assert!(quad9.contains("AS19281"));
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let mut batch = sample_batch();
        batch.insert(
            "9.9.9.9",
            IpDetails {
                ip: "9.9.9.9".to_string(),
                city: "Berkeley".to_string(),
                ..Default::default()
            },
        );
        let first = project_to_string(&batch, "city", ProjectOptions::default());
        let second = project_to_string(&batch, "city", ProjectOptions::default());
        assert_eq!(first, second);

        let mut a = Vec::new();
        let mut b = Vec::new();
        write_full_table(&batch, &mut a).unwrap();
        write_full_table(&batch, &mut b).unwrap();
        assert_eq!(a, b);
    }
}
