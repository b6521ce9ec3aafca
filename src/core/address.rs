use crate::core::errors::ParseError;
use crate::core::family::Family;
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

/*-------------------------------------------------------------------------------------------------
  Address
-------------------------------------------------------------------------------------------------*/

/// An IPv4 or IPv6 address parsed from a textual literal.
///
/// Parsing is strict: surrounding whitespace is not trimmed and IPv4 octets
/// must be in the range `0-255`.
///
/// ```
/// let address: regionfilter::Address = "10.0.0.5".parse().unwrap();
/// assert!(address.family().is_ipv4());
/// assert!(regionfilter::Address::parse("10.0.0.999").is_err());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Address {
    ip: IpAddr,
}

impl Address {
    pub fn parse(value: &str) -> Result<Self, ParseError> {
        value
            .parse::<IpAddr>()
            .map(Self::from)
            .map_err(|_| ParseError::address(value))
    }

    pub fn ip(&self) -> IpAddr {
        self.ip
    }

    pub fn family(&self) -> Family {
        match self.ip {
            IpAddr::V4(_) => Family::IPv4,
            IpAddr::V6(_) => Family::IPv6,
        }
    }

    /// Address bit pattern; IPv4 addresses occupy the low 32 bits.
    pub fn bits(&self) -> u128 {
        match self.ip {
            IpAddr::V4(ipv4) => u32::from(ipv4) as u128,
            IpAddr::V6(ipv6) => u128::from(ipv6),
        }
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        Self { ip }
    }
}

impl FromStr for Address {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ip)
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
