use crate::cli;
use log::info;
use regionfilter::{find_matches, Client, Match, Result};

/*-------------------------------------------------------------------------------------------------
  Core functions
-------------------------------------------------------------------------------------------------*/

/// Outcome of a successful run.
#[derive(Debug)]
pub struct Report {
    pub region: String,
    pub aws_range_count: usize,
    pub source_ip_count: usize,
    pub matches: Vec<Match>,
}

/*--------------------------------------------------------------------------------------
  Download both inputs and match the source IPs against the region's ranges
--------------------------------------------------------------------------------------*/

pub fn run(args: &cli::Args, client: &Client) -> Result<Report> {
    let region = cli::utils::normalize_region(&args.region, ["GLOBAL"]);

    let aws_ranges = client.get_aws_ranges(&region)?;
    if aws_ranges.is_empty() {
        return Err(format!("No AWS ranges found for region: {region}").into());
    }

    let source_ips = client.get_source_ips(args.include_ipv6)?;
    if source_ips.is_empty() {
        return Err("No source IPs found".into());
    }

    info!("Matching IPs:");
    let matches = find_matches(&source_ips, &aws_ranges);

    Ok(Report {
        region,
        aws_range_count: aws_ranges.len(),
        source_ip_count: source_ips.len(),
        matches,
    })
}
