//! IP address type shared by the v4 and v6 forwarding paths.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// An IP address that can be either IPv4 or IPv6.
///
/// The derived order sorts all IPv4 addresses before all IPv6 addresses
/// and numerically within each family, giving a total order suitable for
/// sorted-container keys. The default value is the unspecified IPv4
/// address, which the routing model treats as "not set".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(untagged)]
pub enum IpAddress {
    V4(Ipv4Addr),
    V6(Ipv6Addr),
}

impl IpAddress {
    /// The unspecified IPv4 address (0.0.0.0).
    pub const UNSPECIFIED: Self = IpAddress::V4(Ipv4Addr::UNSPECIFIED);

    /// Returns true if this is an IPv4 address.
    pub const fn is_ipv4(&self) -> bool {
        matches!(self, IpAddress::V4(_))
    }

    /// Returns true if this is an IPv6 address.
    pub const fn is_ipv6(&self) -> bool {
        matches!(self, IpAddress::V6(_))
    }

    /// Returns true if this is the unspecified address of its family.
    pub fn is_unspecified(&self) -> bool {
        match self {
            IpAddress::V4(addr) => addr.is_unspecified(),
            IpAddress::V6(addr) => addr.is_unspecified(),
        }
    }

    /// Returns the IPv4 address if this is V4, None otherwise.
    pub const fn as_ipv4(&self) -> Option<&Ipv4Addr> {
        match self {
            IpAddress::V4(addr) => Some(addr),
            IpAddress::V6(_) => None,
        }
    }

    /// Returns the IPv6 address if this is V6, None otherwise.
    pub const fn as_ipv6(&self) -> Option<&Ipv6Addr> {
        match self {
            IpAddress::V4(_) => None,
            IpAddress::V6(addr) => Some(addr),
        }
    }
}

impl Default for IpAddress {
    fn default() -> Self {
        IpAddress::UNSPECIFIED
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpAddress::V4(addr) => addr.fmt(f),
            IpAddress::V6(addr) => addr.fmt(f),
        }
    }
}

impl FromStr for IpAddress {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(':') {
            s.parse::<Ipv6Addr>()
                .map(IpAddress::V6)
                .map_err(|_| ParseError::InvalidIpAddress(s.to_string()))
        } else {
            s.parse::<Ipv4Addr>()
                .map(IpAddress::V4)
                .map_err(|_| ParseError::InvalidIpAddress(s.to_string()))
        }
    }
}

impl From<Ipv4Addr> for IpAddress {
    fn from(addr: Ipv4Addr) -> Self {
        IpAddress::V4(addr)
    }
}

impl From<Ipv6Addr> for IpAddress {
    fn from(addr: Ipv6Addr) -> Self {
        IpAddress::V6(addr)
    }
}

impl From<IpAddr> for IpAddress {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(addr) => IpAddress::V4(addr),
            IpAddr::V6(addr) => IpAddress::V6(addr),
        }
    }
}

impl From<IpAddress> for IpAddr {
    fn from(addr: IpAddress) -> Self {
        match addr {
            IpAddress::V4(addr) => IpAddr::V4(addr),
            IpAddress::V6(addr) => IpAddr::V6(addr),
        }
    }
}
