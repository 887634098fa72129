#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

//! Ipscope - an IP geolocation and ASN lookup toolkit
//!
//! Ipscope looks up IP geolocation records and autonomous-system detail
//! records and renders batches of them as JSON, CSV, or a colorized
//! human-readable report. It can be used as both a command-line application
//! and a library.
//!
//! # Architecture
//!
//! - **[`schema`]**: the two record kinds ([`IpDetails`], [`AsnDetails`]),
//!   their optional nested sections, and the insertion-ordered [`Batch`]
//!   container. Pure data, no behavior.
//! - **[`output`]**: the field-projection and multi-format emission engine:
//!   - `resolver`: dotted field path → extraction function
//!   - `project`: batch + accessor → lazy tabular rows
//!   - `tabular`: CSV encoding (full record or projected rows)
//!   - `structured`: pretty JSON encoding
//!   - `report`: colorized single-record report with injected styling
//! - **[`lookup`]**: the HTTP client that builds batches from the remote
//!   lookup service.
//! - **[`config`]**: token and API endpoint configuration.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use ipscope::{project, write_rows, IpDetails, LookupClient, Projectable, ProjectOptions};
//!
//! let client = LookupClient::new(None);
//! let batch = client.lookup_ips(&["8.8.8.8".to_string(), "1.1.1.1".to_string()])?;
//!
//! // Project a dotted field path into CSV rows
//! let accessor = IpDetails::resolve("asn.name");
//! let rows = project(&batch, &accessor, ProjectOptions::default());
//! write_rows(rows, std::io::stdout())?;
//! ```

pub mod config;
pub mod lookup;
pub mod output;
pub mod schema;

pub use config::IpscopeConfig;

pub use schema::{
    AbuseBlock, AsnBlock, AsnDetails, Batch, CarrierBlock, CompanyBlock, DomainsBlock, IpDetails,
    PrivacyBlock,
};

pub use output::project::{project, ProjectOptions, Row, Rows};
pub use output::report::{render, ColorStyler, PlainStyler, Styler};
pub use output::resolver::{FieldAccessor, Projectable};
pub use output::structured::write_json;
pub use output::tabular::{write_full_table, write_rows, TableRecord};
pub use output::OutputFormat;

pub use lookup::LookupClient;
