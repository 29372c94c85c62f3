//! Nexthop group model for policy routing.
//!
//! A nexthop group is a named, ordered collection of forwarding
//! destinations (IP nexthops, optionally with MPLS label switching
//! operations) plus tunnel encapsulation parameters. Policy routing uses
//! groups to spread traffic across candidate paths, terminate tunnels,
//! or impose MPLS labels.
//!
//! Everything here is a plain value type: mutation is synchronous,
//! assignment deep-copies, and there is no internal synchronization.
//! Callers mutate a group on one logical thread and publish a copy when
//! done. The derived equality and total order over the full field tuple
//! are what forwarding-sync code uses to tell a changed group from an
//! unchanged one without inspecting internals; [`NexthopGroupTable`]
//! packages that check.
//!
//! # Key Components
//!
//! - [`MplsAction`]: a switching operation plus an outermost-first label stack
//! - [`NexthopEntry`]: one destination (IP address + MPLS action)
//! - [`NexthopGroup`]: the aggregate, with slot-indexed entry maps
//! - [`NexthopGroupTable`]: name-keyed storage with change detection

mod encap;
mod entry;
mod group;
mod mpls_action;
mod table;

pub use encap::EncapType;
pub use entry::{NexthopEntry, ParseNexthopEntryError};
pub use group::NexthopGroup;
pub use mpls_action::{MplsAction, ParseMplsActionError};
pub use table::{GroupUpdate, NexthopGroupTable};
