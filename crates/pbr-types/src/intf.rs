//! Interface identifier type.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A switch interface identifier (e.g. "Ethernet0", "Loopback3").
///
/// The default value is the empty identifier, meaning "no interface".
/// Interface naming is platform-defined; this type only rejects
/// identifiers that cannot appear in configuration keys.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct IntfId(String);

impl IntfId {
    /// Creates an interface identifier from a name.
    pub fn new(name: impl Into<String>) -> Self {
        IntfId(name.into())
    }

    /// Returns the interface name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if no interface is named.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for IntfId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for IntfId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().any(char::is_whitespace) {
            return Err(ParseError::InvalidIntfId(s.to_string()));
        }
        Ok(IntfId(s.to_string()))
    }
}

impl From<&str> for IntfId {
    fn from(name: &str) -> Self {
        IntfId(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_and_display() {
        let intf = IntfId::new("Ethernet0");
        assert_eq!(intf.as_str(), "Ethernet0");
        assert_eq!(intf.to_string(), "Ethernet0");
        assert!(!intf.is_empty());
    }

    #[test]
    fn test_default_is_empty() {
        let intf = IntfId::default();
        assert!(intf.is_empty());
        assert_eq!(intf.to_string(), "");
    }

    #[test]
    fn test_parse() {
        let intf: IntfId = "Loopback3".parse().unwrap();
        assert_eq!(intf.as_str(), "Loopback3");

        assert!("Ethernet 0".parse::<IntfId>().is_err());
    }

    #[test]
    fn test_ordering() {
        let a = IntfId::new("Ethernet0");
        let b = IntfId::new("Ethernet4");
        assert!(a < b);
    }
}
