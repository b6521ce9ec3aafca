use crate::cli::Report;
use log::{info, warn};

/*-------------------------------------------------------------------------------------------------
  Logging Functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Match Results
--------------------------------------------------------------------------------------*/

pub fn match_results(report: &Report) {
    let count_source_ips = report.source_ip_count;
    let count_aws_ranges = report.aws_range_count;
    info!("Searched {count_source_ips} source IP(s) in {count_aws_ranges} AWS IP prefix(es)");

    let count_matches = report.matches.len();
    if count_matches > 0 {
        info!("Found {count_matches} source IP(s) in {}", report.region);
    } else {
        warn!("No source IPs fall inside the {} AWS IP ranges", report.region);
    }
}
