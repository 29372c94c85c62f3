//! The nexthop group aggregate.

use crate::{EncapType, NexthopEntry};
use itertools::Itertools;
use pbr_types::{IntfId, IpAddress};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Default TTL written into IP-in-IP and GRE tunnel headers.
pub const DEFAULT_TTL: u16 = 64;

/// A named collection of forwarding destinations with tunnel
/// encapsulation parameters, used by policy routing to direct traffic
/// across a set of candidate paths.
///
/// Entries live in slot-indexed maps. Slot numbers are caller-assigned
/// ECMP positions and stay stable: removing an entry leaves a gap, it
/// never renumbers the neighbors, so incremental updates preserve the
/// positions of the remaining members.
///
/// Two maps coexist. `nexthops` is the canonical entry map;
/// `destination_ips` is a legacy address-only map kept for callers that
/// predate per-entry MPLS actions. They are independent overlays over
/// the same slot space and are never synchronized with each other;
/// mixing both on one group is the caller's mistake to avoid.
///
/// Field declaration order is the comparison precedence. The derived
/// equality and total order over the full field tuple are the contract
/// forwarding-sync code uses to decide whether a group changed.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct NexthopGroup {
    name: String,
    encap_type: EncapType,
    ttl: u16,
    source_ip: IpAddress,
    source_intf: IntfId,
    persistent: bool,
    nexthops: BTreeMap<u16, NexthopEntry>,
    destination_ips: BTreeMap<u16, IpAddress>,
}

impl NexthopGroup {
    /// Creates a group with the given name and encapsulation type. Both
    /// are fixed for the life of the group; changing the encapsulation
    /// means building a new group.
    pub fn new(name: impl Into<String>, encap_type: EncapType) -> Self {
        Self {
            name: name.into(),
            encap_type,
            ttl: DEFAULT_TTL,
            source_ip: IpAddress::UNSPECIFIED,
            source_intf: IntfId::default(),
            persistent: false,
            nexthops: BTreeMap::new(),
            destination_ips: BTreeMap::new(),
        }
    }

    /// The unique name of the group. Uniqueness across groups is the
    /// forwarding-table manager's job, not this type's.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The packet encapsulation used on the group.
    pub fn encap_type(&self) -> EncapType {
        self.encap_type
    }

    /// The TTL set in frame headers of IP-in-IP or GRE tunnels.
    pub fn ttl(&self) -> u16 {
        self.ttl
    }

    /// Sets the tunnel TTL. Settable on any group; only tunnel
    /// encapsulations consume it.
    pub fn set_ttl(&mut self, ttl: u16) {
        self.ttl = ttl;
    }

    /// The source IP used on frames sent on this group.
    pub fn source_ip(&self) -> IpAddress {
        self.source_ip
    }

    pub fn set_source_ip(&mut self, source_ip: IpAddress) {
        self.source_ip = source_ip;
    }

    /// The source interface for tunnel frames.
    pub fn source_intf(&self) -> &IntfId {
        &self.source_intf
    }

    pub fn set_source_intf(&mut self, source_intf: IntfId) {
        self.source_intf = source_intf;
    }

    /// Whether the group definition survives agent restart. Consumed by
    /// the manager's retention policy; no in-memory effect.
    pub fn persistent(&self) -> bool {
        self.persistent
    }

    pub fn set_persistent(&mut self, persistent: bool) {
        self.persistent = persistent;
    }

    /// The canonical slot-to-entry map, ascending by slot.
    pub fn nexthops(&self) -> &BTreeMap<u16, NexthopEntry> {
        &self.nexthops
    }

    /// Replaces the whole entry map.
    pub fn set_nexthops(&mut self, nexthops: BTreeMap<u16, NexthopEntry>) {
        self.nexthops = nexthops;
    }

    /// Inserts or overwrites the entry at `slot`. An existing entry is
    /// silently replaced.
    pub fn insert_nexthop(&mut self, slot: u16, entry: NexthopEntry) {
        self.nexthops.insert(slot, entry);
    }

    /// Removes the entry at `slot`, returning it if present. Absent
    /// slots are a no-op; other slots are never renumbered.
    pub fn remove_nexthop(&mut self, slot: u16) -> Option<NexthopEntry> {
        self.nexthops.remove(&slot)
    }

    /// The legacy slot-to-address map, retained for callers that never
    /// adopted the entry map. Independent of `nexthops`: populating one
    /// map never populates the other. New code should use
    /// [`nexthops`](Self::nexthops).
    pub fn destination_ips(&self) -> &BTreeMap<u16, IpAddress> {
        &self.destination_ips
    }

    /// Replaces the whole legacy map.
    pub fn set_destination_ips(&mut self, destination_ips: BTreeMap<u16, IpAddress>) {
        self.destination_ips = destination_ips;
    }

    /// Inserts or overwrites the legacy address at `slot`.
    pub fn insert_destination_ip(&mut self, slot: u16, addr: IpAddress) {
        self.destination_ips.insert(slot, addr);
    }

    /// Removes the legacy address at `slot`, returning it if present.
    pub fn remove_destination_ip(&mut self, slot: u16) -> Option<IpAddress> {
        self.destination_ips.remove(&slot)
    }

    /// Number of destinations in the group. The canonical map is
    /// authoritative whenever it has entries; the legacy map's count is
    /// reported only when the canonical map is empty.
    pub fn size(&self) -> u16 {
        let n = if self.nexthops.is_empty() {
            self.destination_ips.len()
        } else {
            self.nexthops.len()
        };
        n.min(u16::MAX as usize) as u16
    }

    /// Returns true if neither map has entries.
    pub fn is_empty(&self) -> bool {
        self.nexthops.is_empty() && self.destination_ips.is_empty()
    }
}

impl Default for NexthopGroup {
    fn default() -> Self {
        Self::new(String::new(), EncapType::Null)
    }
}

impl fmt::Display for NexthopGroup {
    /// Canonical rendering: every field in declaration order, maps
    /// ascending by slot, label stacks outermost-first. Structurally
    /// equal groups render identically, so the output is usable for
    /// logging-based diffing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nexthops = self
            .nexthops
            .iter()
            .map(|(slot, entry)| format!("{}: {}", slot, entry))
            .join(", ");
        let destination_ips = self
            .destination_ips
            .iter()
            .map(|(slot, addr)| format!("{}: {}", slot, addr))
            .join(", ");
        write!(
            f,
            "NexthopGroup(name={}, encap_type={}, ttl={}, source_ip={}, \
             source_intf={}, persistent={}, nexthops={{{}}}, destination_ips={{{}}})",
            self.name,
            self.encap_type,
            self.ttl,
            self.source_ip,
            self.source_intf,
            self.persistent,
            nexthops,
            destination_ips,
        )
    }
}
