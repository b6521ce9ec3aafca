use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use std::path::PathBuf;

/*-------------------------------------------------------------------------------------------------
  Command Line Interface (CLI) Arguments
-------------------------------------------------------------------------------------------------*/

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Filter SaaS source IPs against AWS region ranges.",
    long_about = None,
    after_help = "Examples:\n  regionfilter --region us-east-1\n  regionfilter --region us-west-2 --include-ipv6\n  regionfilter --region eu-west-1 --include-ipv6 --csv matches.csv"
)]
pub struct Args {
    /// AWS region to filter by
    #[arg(short = 'r', long, default_value = "us-west-2")]
    pub region: String,

    /// Include IPv6 addresses in the source IP list
    #[arg(short = '6', long)]
    pub include_ipv6: bool,

    /// Print a summary after the matching IPs
    #[arg(long)]
    pub summary: bool,

    /// Save the matching IPs to a CSV file
    #[arg(long = "csv")]
    pub csv_file: Option<PathBuf>,

    /// Logging verbosity
    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
