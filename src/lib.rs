//! Find which of a SaaS vendor's published source IP addresses fall inside the
//! [AWS IP address ranges](https://docs.aws.amazon.com/vpc/latest/userguide/aws-ip-ranges.html)
//! of a given region.
//!
//! The work happens in two phases. [extract] performs a permissive lexical scan
//! of free-form text for IP-looking literals; [find_matches] then parses each
//! literal strictly into an [Address] and reports the first [CidrBlock] (in
//! listed order) that contains it.
//!
//! ```
//! let text = "192.0.2.10\n198.51.100.7\n10.0.0.999\n";
//! let cidrs = ["198.51.100.0/24", "192.0.2.0/24"];
//!
//! let matches = regionfilter::find_matches(regionfilter::extract(text, false), cidrs);
//!
//! assert_eq!(matches.len(), 2);
//! assert_eq!(matches[0].to_string(), "192.0.2.10 -> 192.0.2.0/24");
//! ```
//!
//! [Client] downloads both inputs over HTTP.

mod core;

/*-------------------------------------------------------------------------------------------------
  Library Interface
-------------------------------------------------------------------------------------------------*/

pub use crate::core::address::Address;
pub use crate::core::cidr::{contains, CidrBlock};
pub use crate::core::client::{Client, ClientBuilder};
pub use crate::core::errors::{Error, ParseError, ParseErrorKind, Result};
pub use crate::core::extract::extract;
pub use crate::core::family::Family;
pub use crate::core::json::{parse as parse_json, JsonIpPrefix, JsonIpRanges, JsonIpv6Prefix};
pub use crate::core::matcher::{find_matches, Match};
