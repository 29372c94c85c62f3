//! Nexthop group destination entries.

use crate::MplsAction;
use pbr_types::IpAddress;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One forwarding destination: a nexthop IP address plus an optional
/// MPLS switching operation.
///
/// The default action is inert, meaning plain IP forwarding. Field
/// declaration order matters: the derived total order compares the MPLS
/// action before the address, and downstream sorted containers depend
/// on that precedence.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct NexthopEntry {
    mpls_action: MplsAction,
    nexthop: IpAddress,
}

impl NexthopEntry {
    /// Creates an entry for a destination address with no MPLS action.
    pub fn new(nexthop: IpAddress) -> Self {
        Self {
            mpls_action: MplsAction::default(),
            nexthop,
        }
    }

    /// Attaches an MPLS action (builder form).
    pub fn with_mpls_action(mut self, mpls_action: MplsAction) -> Self {
        self.mpls_action = mpls_action;
        self
    }

    /// The nexthop IP address for this entry.
    pub fn nexthop(&self) -> IpAddress {
        self.nexthop
    }

    /// Replaces the destination address.
    pub fn set_nexthop(&mut self, nexthop: IpAddress) {
        self.nexthop = nexthop;
    }

    /// The MPLS switching operation for this entry.
    pub fn mpls_action(&self) -> &MplsAction {
        &self.mpls_action
    }

    /// Replaces the attached action.
    pub fn set_mpls_action(&mut self, mpls_action: MplsAction) {
        self.mpls_action = mpls_action;
    }
}

impl fmt::Display for NexthopEntry {
    /// Renders as `<ip>` for plain forwarding, `<ip>+<action>` when an
    /// MPLS action is attached, e.g. `10.0.0.1+push[100]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mpls_action.is_noop() {
            write!(f, "{}", self.nexthop)
        } else {
            write!(f, "{}+{}", self.nexthop, self.mpls_action)
        }
    }
}

/// Error when parsing a [`NexthopEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNexthopEntryError {
    pub message: String,
}

impl fmt::Display for ParseNexthopEntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid nexthop entry: {}", self.message)
    }
}

impl std::error::Error for ParseNexthopEntryError {}

impl FromStr for NexthopEntry {
    type Err = ParseNexthopEntryError;

    /// Parses the [`Display`] form: `<ip>` or `<ip>+<action>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (ip_part, action_part) = match s.split_once('+') {
            Some((ip, action)) => (ip, Some(action)),
            None => (s, None),
        };

        let nexthop = ip_part
            .parse::<IpAddress>()
            .map_err(|e| ParseNexthopEntryError {
                message: e.to_string(),
            })?;

        let mut entry = NexthopEntry::new(nexthop);
        if let Some(action) = action_part {
            entry.set_mpls_action(action.parse().map_err(
                |e: crate::ParseMplsActionError| ParseNexthopEntryError {
                    message: e.to_string(),
                },
            )?);
        }
        Ok(entry)
    }
}
