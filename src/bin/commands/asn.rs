use clap::Args;
use ipscope::{
    project, write_full_table, write_json, write_rows, AsnDetails, IpscopeConfig, OutputFormat,
    Projectable,
};

use super::{exit_with_error, lookup_client, FormatArgs};

/// Arguments for the Asn command
#[derive(Args)]
pub struct AsnArgs {
    /// ASNs to look up, e.g. "AS15169"
    #[clap(name = "ASN", required = true)]
    pub asns: Vec<String>,

    #[clap(flatten)]
    pub output: FormatArgs,
}

pub fn run(args: AsnArgs, config: &IpscopeConfig) {
    let AsnArgs { asns, output } = args;

    let client = lookup_client(config);
    let batch = match client.lookup_asns(&asns) {
        Ok(batch) => batch,
        Err(e) => exit_with_error(format!("unable to look up ASN information: {e}")),
    };

    let stdout = std::io::stdout();

    if let Some(path) = &output.field {
        let accessor = AsnDetails::resolve(path);
        let rows = project(&batch, &accessor, output.project_options());
        if let Err(e) = write_rows(rows, stdout.lock()) {
            exit_with_error(e);
        }
        return;
    }

    match output.format {
        OutputFormat::Json => {
            if let Err(e) = write_json(&batch, stdout.lock()) {
                exit_with_error(e);
            }
        }
        OutputFormat::Csv => {
            if let Err(e) = write_full_table(&batch, stdout.lock()) {
                exit_with_error(e);
            }
        }
        OutputFormat::Friendly => exit_with_error(
            "the friendly report is only available for IP lookups; use --format json or csv",
        ),
    }
}
