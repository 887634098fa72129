//! Structured (JSON) encoding
//!
//! Verbatim nested-object serialization of a batch or a single record:
//! 2-space indentation, field names from the schema, insertion order
//! preserved, absent optional sections omitted entirely.

use anyhow::Result;
use serde::Serialize;
use std::io::Write;

/// Write a value as pretty-printed JSON followed by a newline
pub fn write_json<T: Serialize, W: Write>(value: &T, mut sink: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut sink, value)?;
    writeln!(sink)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{AsnBlock, Batch, IpDetails};

    fn sample_batch() -> Batch<IpDetails> {
        let mut batch = Batch::new();
        batch.insert(
            "8.8.8.8",
            IpDetails {
                ip: "8.8.8.8".to_string(),
                city: "Mountain View".to_string(),
                asn: Some(AsnBlock {
                    asn: "AS15169".to_string(),
                    name: "Google LLC".to_string(),
                    ..Default::default()
                }),
                ..Default::default()
            },
        );
        batch.insert(
            "1.1.1.1",
            IpDetails {
                ip: "1.1.1.1".to_string(),
                ..Default::default()
            },
        );
        batch
    }

    fn encode(batch: &Batch<IpDetails>) -> String {
        let mut buf = Vec::new();
        write_json(batch, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_two_space_indentation() {
        let out = encode(&sample_batch());
        assert!(out.starts_with("{\n  \"8.8.8.8\": {\n    \"ip\": \"8.8.8.8\","));
        assert!(out.ends_with("}\n"));
    }

    #[test]
    fn test_absent_sections_omitted() {
        let out = encode(&sample_batch());
        assert!(out.contains("\"asn\""));
        assert!(!out.contains("null"));
        assert!(!out.contains("\"company\""));
    }

    #[test]
    fn test_single_record() {
        let record = IpDetails {
            ip: "8.8.8.8".to_string(),
            ..Default::default()
        };
        let mut buf = Vec::new();
        write_json(&record, &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.starts_with("{\n  \"ip\": \"8.8.8.8\","));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let out = encode(&sample_batch());
        assert!(out.find("8.8.8.8").unwrap() < out.find("1.1.1.1").unwrap());
    }
}
