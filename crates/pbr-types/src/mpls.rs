//! MPLS label and switching-operation primitives.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A 20-bit MPLS label value (0-1048575).
///
/// Labels 0-15 are reserved by RFC 3032; the common ones are exposed as
/// constants. Reserved labels are still valid values here, since label
/// stacks routinely carry explicit-null labels.
///
/// # Examples
///
/// ```
/// use pbr_types::MplsLabel;
///
/// let label = MplsLabel::new(100).unwrap();
/// assert_eq!(label.as_u32(), 100);
///
/// // Values above 2^20 - 1 are rejected
/// assert!(MplsLabel::new(1 << 20).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct MplsLabel(u32);

impl MplsLabel {
    /// Maximum valid label value (2^20 - 1).
    pub const MAX: u32 = 0xF_FFFF;

    /// IPv4 explicit null (RFC 3032).
    pub const IPV4_EXPLICIT_NULL: MplsLabel = MplsLabel(0);

    /// Router alert (RFC 3032).
    pub const ROUTER_ALERT: MplsLabel = MplsLabel(1);

    /// IPv6 explicit null (RFC 3032).
    pub const IPV6_EXPLICIT_NULL: MplsLabel = MplsLabel(2);

    /// Implicit null, signalled but never carried on the wire (RFC 3032).
    pub const IMPLICIT_NULL: MplsLabel = MplsLabel(3);

    /// Creates a new MPLS label.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not fit in 20 bits.
    pub const fn new(value: u32) -> Result<Self, ParseError> {
        if value <= Self::MAX {
            Ok(MplsLabel(value))
        } else {
            Err(ParseError::InvalidMplsLabel(value))
        }
    }

    /// Returns the label value as a u32.
    pub const fn as_u32(&self) -> u32 {
        self.0
    }

    /// Returns true if this is one of the RFC 3032 reserved labels (0-15).
    pub const fn is_reserved(&self) -> bool {
        self.0 <= 15
    }
}

impl fmt::Display for MplsLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MplsLabel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .parse()
            .map_err(|_| ParseError::InvalidMplsLabel(u32::MAX))?;
        MplsLabel::new(value)
    }
}

impl TryFrom<u32> for MplsLabel {
    type Error = ParseError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        MplsLabel::new(value)
    }
}

impl From<MplsLabel> for u32 {
    fn from(label: MplsLabel) -> u32 {
        label.0
    }
}

/// An MPLS label switching operation.
///
/// The operation says what a forwarding entry does with its label stack:
/// nothing (plain IP forwarding), push the stack onto the frame, pop the
/// outermost label, or swap it.
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
pub enum MplsActionType {
    /// No label operation.
    #[default]
    None,
    /// Push the label stack onto the frame.
    Push,
    /// Pop the outermost label.
    Pop,
    /// Swap the outermost label.
    Swap,
}

impl MplsActionType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" => Some(Self::None),
            "push" => Some(Self::Push),
            "pop" => Some(Self::Pop),
            "swap" => Some(Self::Swap),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Push => "push",
            Self::Pop => "pop",
            Self::Swap => "swap",
        }
    }
}

impl fmt::Display for MplsActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MplsActionType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseError::InvalidMplsAction(s.to_string()))
    }
}
