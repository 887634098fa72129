pub mod asn;
pub mod ip;

use clap::Args;
use ipscope::{IpscopeConfig, LookupClient, OutputFormat, ProjectOptions};

/// Output selection flags shared by the lookup commands
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Output format: friendly, json, or csv
    #[clap(short = 'o', long, default_value = "friendly")]
    pub format: OutputFormat,

    /// Select a single field by dotted path (e.g. "city" or "asn.name");
    /// implies CSV output
    #[clap(short, long)]
    pub field: Option<String>,

    /// Do not emit the CSV header row
    #[clap(long)]
    pub no_header: bool,

    /// Emit only the selected field, suppressing the key column
    #[clap(long)]
    pub field_only: bool,

    /// Disable colors in the friendly report
    #[clap(long)]
    pub no_color: bool,
}

impl FormatArgs {
    pub fn project_options(&self) -> ProjectOptions {
        ProjectOptions {
            emit_header: !self.no_header,
            include_key_column: !self.field_only,
        }
    }
}

pub(crate) fn lookup_client(config: &IpscopeConfig) -> LookupClient {
    LookupClient::new(config.token.clone()).with_base(config.api_base.clone())
}

pub(crate) fn exit_with_error(message: impl std::fmt::Display) -> ! {
    eprintln!("ERROR: {message}");
    std::process::exit(1);
}
