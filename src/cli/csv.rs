use regionfilter::{Match, Result};
use std::path::Path;

/*-------------------------------------------------------------------------------------------------
  Save Matches to CSV File
-------------------------------------------------------------------------------------------------*/

pub fn save(matches: &[Match], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    // Write header
    writer.write_record(["IP Address", "AWS CIDR"])?;

    // Write match records
    for ip_match in matches {
        writer.write_record([&ip_match.ip, &ip_match.cidr])?;
    }

    writer.flush()?;

    Ok(())
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
