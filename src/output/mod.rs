//! Output formatting for lookup batches
//!
//! This module is the multi-format emission engine: it selects fields out of
//! a batch via dotted paths ([`resolver`]), turns a batch plus a resolved
//! accessor into tabular rows ([`project`]), and serializes batches to CSV
//! ([`tabular`]), JSON ([`structured`]), or a colorized single-record report
//! ([`report`]).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod project;
pub mod report;
pub mod resolver;
pub mod structured;
pub mod tabular;

/// Unified output format for all lookup commands
///
/// Commands that don't support a particular format (e.g. `friendly` for ASN
/// detail lookups) should return an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Colorized human-readable report (default)
    #[default]
    Friendly,
    /// Pretty-printed JSON with 2-space indentation
    Json,
    /// Character-separated tabular output
    Csv,
}

impl OutputFormat {
    pub fn is_tabular(&self) -> bool {
        matches!(self, Self::Csv)
    }

    /// Get a list of all format names for help text
    pub fn all_names() -> &'static [&'static str] {
        &["friendly", "json", "csv"]
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Friendly => write!(f, "friendly"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "friendly" | "pretty" => Ok(Self::Friendly),
            "json" => Ok(Self::Json),
            "csv" | "table" => Ok(Self::Csv),
            _ => Err(format!(
                "Unknown output format '{}'. Valid formats: {}",
                s,
                Self::all_names().join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(
            OutputFormat::from_str("friendly").unwrap(),
            OutputFormat::Friendly
        );
        assert_eq!(
            OutputFormat::from_str("pretty").unwrap(),
            OutputFormat::Friendly
        );
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("csv").unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_str("CSV").unwrap(), OutputFormat::Csv);
        assert!(OutputFormat::from_str("yaml").is_err());
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Friendly.to_string(), "friendly");
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
    }

    #[test]
    fn test_output_format_is_tabular() {
        assert!(!OutputFormat::Friendly.is_tabular());
        assert!(!OutputFormat::Json.is_tabular());
        assert!(OutputFormat::Csv.is_tabular());
    }
}
