//! Encapsulation types for nexthop groups.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The packet encapsulation applied to traffic using a nexthop group.
///
/// IP-in-IP and GRE groups use the group-level tunnel fields (TTL,
/// source IP, source interface). MPLS groups carry a label switching
/// operation on each entry instead. Null groups use neither.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum EncapType {
    /// No encapsulation.
    #[default]
    Null,
    /// IP in IP encapsulation.
    IpInIp,
    /// GRE encapsulation.
    Gre,
    /// MPLS label imposition.
    Mpls,
}

impl EncapType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "null" => Some(Self::Null),
            "ipinip" => Some(Self::IpInIp),
            "gre" => Some(Self::Gre),
            "mpls" => Some(Self::Mpls),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::IpInIp => "ipinip",
            Self::Gre => "gre",
            Self::Mpls => "mpls",
        }
    }

    /// Returns true for encapsulations that use the group-level tunnel
    /// fields (TTL, source IP, source interface).
    pub fn is_tunnel(&self) -> bool {
        matches!(self, Self::IpInIp | Self::Gre)
    }
}

impl fmt::Display for EncapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(EncapType::parse("ipinip"), Some(EncapType::IpInIp));
        assert_eq!(EncapType::parse("GRE"), Some(EncapType::Gre));
        assert_eq!(EncapType::parse("mpls"), Some(EncapType::Mpls));
        assert_eq!(EncapType::parse("vxlan"), None);
    }

    #[test]
    fn test_default() {
        assert_eq!(EncapType::default(), EncapType::Null);
    }

    #[test]
    fn test_is_tunnel() {
        assert!(EncapType::IpInIp.is_tunnel());
        assert!(EncapType::Gre.is_tunnel());
        assert!(!EncapType::Mpls.is_tunnel());
        assert!(!EncapType::Null.is_tunnel());
    }

    #[test]
    fn test_display() {
        assert_eq!(EncapType::IpInIp.to_string(), "ipinip");
        assert_eq!(EncapType::Null.to_string(), "null");
    }
}
