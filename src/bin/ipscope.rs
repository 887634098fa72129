use clap::{Parser, Subcommand};
use ipscope::IpscopeConfig;
use tracing::Level;

mod commands;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    /// configuration file path, by default $HOME/.ipscope/ipscope.toml is used
    #[clap(short, long)]
    config: Option<String>,

    /// Print debug information
    #[clap(long)]
    debug: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up IP geolocation records
    Ip(commands::ip::IpArgs),

    /// Look up ASN detail records
    Asn(commands::asn::AsnArgs),
}

fn main() {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();
    }

    let config = match IpscopeConfig::new(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ERROR: unable to load configuration: {e}");
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Ip(args) => commands::ip::run(args, &config),
        Commands::Asn(args) => commands::asn::run(args, &config),
    }
}
