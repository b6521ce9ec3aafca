use crate::core::address::Address;
use crate::core::cidr::CidrBlock;
use log::{debug, trace, warn};
use std::fmt;

/*-------------------------------------------------------------------------------------------------
  Match
-------------------------------------------------------------------------------------------------*/

/// A source IP literal paired with the first CIDR literal found to contain it.
/// Both are kept exactly as they appeared in the inputs.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Match {
    /// Source IP address literal.
    pub ip: String,

    /// CIDR literal of the first block containing the source IP.
    pub cidr: String,
}

impl Match {
    pub fn new(ip: impl Into<String>, cidr: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            cidr: cidr.into(),
        }
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.ip, self.cidr)
    }
}

/*-------------------------------------------------------------------------------------------------
  Find Matches
-------------------------------------------------------------------------------------------------*/

/// Find, for each source literal, the first CIDR literal (in listed order)
/// whose block contains it.
///
/// Source literals that are not valid addresses, and CIDR literals that are not
/// valid blocks, are skipped. A source literal contained in no block produces
/// no [Match]. Output order follows `sources`.
///
/// ```
/// let matches = regionfilter::find_matches(["10.0.0.5"], ["10.0.0.0/24", "10.0.0.0/8"]);
/// assert_eq!(matches, [regionfilter::Match::new("10.0.0.5", "10.0.0.0/24")]);
/// ```
pub fn find_matches<I, J, S, T>(sources: I, cidrs: J) -> Vec<Match>
where
    I: IntoIterator<Item = S>,
    J: IntoIterator<Item = T>,
    S: AsRef<str>,
    T: AsRef<str>,
{
    let blocks: Vec<(T, CidrBlock)> = cidrs
        .into_iter()
        .filter_map(|cidr| match CidrBlock::parse(cidr.as_ref()) {
            Ok(block) => Some((cidr, block)),
            Err(error) => {
                warn!("Skipping {error}");
                None
            }
        })
        .collect();

    sources
        .into_iter()
        .filter_map(|source| {
            let source = source.as_ref();
            let address = Address::parse(source)
                .inspect_err(|error| debug!("Skipping {error}"))
                .ok()?;

            blocks
                .iter()
                .find(|(_, block)| block.contains(&address))
                .map(|(cidr, _)| Match::new(source, cidr.as_ref()))
                .or_else(|| {
                    trace!("No CIDR block contains {source}");
                    None
                })
        })
        .collect()
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
