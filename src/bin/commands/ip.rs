use clap::Args;
use ipscope::{
    project, render, write_full_table, write_json, write_rows, ColorStyler, IpDetails,
    IpscopeConfig, OutputFormat, PlainStyler, Projectable, Styler,
};

use super::{exit_with_error, lookup_client, FormatArgs};

/// Arguments for the Ip command
#[derive(Args)]
pub struct IpArgs {
    /// IP addresses to look up
    #[clap(name = "IP", required = true)]
    pub ips: Vec<String>,

    #[clap(flatten)]
    pub output: FormatArgs,
}

pub fn run(args: IpArgs, config: &IpscopeConfig) {
    let IpArgs { ips, output } = args;

    let client = lookup_client(config);
    let batch = match client.lookup_ips(&ips) {
        Ok(batch) => batch,
        Err(e) => exit_with_error(format!("unable to look up IP information: {e}")),
    };

    let stdout = std::io::stdout();

    // a field selector always means projected tabular output
    if let Some(path) = &output.field {
        let accessor = IpDetails::resolve(path);
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
        OutputFormat::Friendly => {
            let styler: Box<dyn Styler> = if output.no_color {
                Box::new(PlainStyler)
            } else {
                Box::new(ColorStyler)
            };
            for (i, (_, record)) in batch.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                for line in render(record, styler.as_ref()) {
                    println!("{line}");
                }
            }
        }
    }
}
