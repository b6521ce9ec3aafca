use crate::core::address::Address;
use crate::core::errors::ParseError;
use crate::core::family::Family;
use ipnetwork::{IpNetwork, Ipv4Network, Ipv6Network};
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

/*-------------------------------------------------------------------------------------------------
  CIDR Block
-------------------------------------------------------------------------------------------------*/

/// A base [Address] paired with a prefix length (`address/prefix_len`).
///
/// Parsing is non-strict: the base address may have host bits set
/// (`10.0.0.5/24` is accepted); they are ignored when testing membership. A
/// bare address is a block with a full-width prefix.
///
/// ```
/// let block: regionfilter::CidrBlock = "10.0.0.5/24".parse().unwrap();
/// let address: regionfilter::Address = "10.0.0.200".parse().unwrap();
/// assert!(block.contains(&address));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CidrBlock {
    network: IpNetwork,
}

impl CidrBlock {
    pub fn parse(value: &str) -> Result<Self, ParseError> {
        let (address, prefix_len) = match value.split_once('/') {
            Some((address, prefix_len)) => (address, Some(prefix_len)),
            None => (value, None),
        };

        let base = Address::parse(address).map_err(|_| ParseError::cidr(value))?;

        let prefix_len = match prefix_len {
            None => base.family().bit_width(),
            Some(digits) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
                digits.parse::<u8>().map_err(|_| ParseError::cidr(value))?
            }
            Some(_) => return Err(ParseError::cidr(value)),
        };

        // Rejects prefix lengths wider than the address family.
        IpNetwork::new(base.ip(), prefix_len)
            .map(|network| Self { network })
            .map_err(|_| ParseError::cidr(value))
    }

    /// The base address as written, host bits included.
    pub fn base(&self) -> Address {
        Address::from(self.network.ip())
    }

    /// The base address with all host bits cleared.
    pub fn network(&self) -> Address {
        Address::from(self.network.network())
    }

    pub fn prefix_len(&self) -> u8 {
        self.network.prefix()
    }

    pub fn family(&self) -> Family {
        self.base().family()
    }

    /// Test whether `address` lies inside this block. Addresses of a different
    /// family are never contained.
    pub fn contains(&self, address: &Address) -> bool {
        match (self.network, address.ip()) {
            (IpNetwork::V4(ipv4_network), IpAddr::V4(ipv4)) => ipv4_network.contains(ipv4),
            (IpNetwork::V6(ipv6_network), IpAddr::V6(ipv6)) => ipv6_network.contains(ipv6),
            _ => false,
        }
    }
}

/// Free-function form of [CidrBlock::contains].
pub fn contains(address: &Address, block: &CidrBlock) -> bool {
    block.contains(address)
}

impl From<Ipv4Network> for CidrBlock {
    fn from(network: Ipv4Network) -> Self {
        Self {
            network: IpNetwork::V4(network),
        }
    }
}

impl From<Ipv6Network> for CidrBlock {
    fn from(network: Ipv6Network) -> Self {
        Self {
            network: IpNetwork::V6(network),
        }
    }
}

impl FromStr for CidrBlock {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network.ip(), self.network.prefix())
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
