use std::fmt;

/*-------------------------------------------------------------------------------------------------
  Address Family
-------------------------------------------------------------------------------------------------*/

/// IP address family (IPv4 or IPv6) of an [Address](crate::Address) or
/// [CidrBlock](crate::CidrBlock).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Family {
    IPv4,
    IPv6,
}

impl Family {
    pub fn is_ipv4(&self) -> bool {
        match self {
            Family::IPv4 => true,
            Family::IPv6 => false,
        }
    }

    pub fn is_ipv6(&self) -> bool {
        match self {
            Family::IPv4 => false,
            Family::IPv6 => true,
        }
    }

    /// Number of bits in an address of this family.
    pub fn bit_width(&self) -> u8 {
        match self {
            Family::IPv4 => 32,
            Family::IPv6 => 128,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::IPv4 => write!(f, "IPv4"),
            Family::IPv6 => write!(f, "IPv6"),
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
