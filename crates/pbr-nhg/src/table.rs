//! Name-keyed storage for nexthop groups with change detection.

use crate::NexthopGroup;
use log::{debug, info};
use std::collections::BTreeMap;

/// Outcome of a [`NexthopGroupTable::upsert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupUpdate {
    /// No group with this name existed; the group was added.
    Inserted,
    /// A group with this name existed and differed; it was replaced.
    Replaced,
    /// An equal group was already present; nothing was written.
    Unchanged,
}

/// Nexthop groups indexed by name.
///
/// Lookups never create entries. `upsert` classifies each write with
/// the group equality relation, which lets a forwarding-sync loop skip
/// reprogramming groups that did not change. Iteration is
/// name-ascending, so successive snapshots diff cleanly.
#[derive(Debug, Clone, Default)]
pub struct NexthopGroupTable {
    groups: BTreeMap<String, NexthopGroup>,
}

impl NexthopGroupTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            groups: BTreeMap::new(),
        }
    }

    /// Number of groups in the table.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if the table holds no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns true if a group with this name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    /// Looks up a group by name. Missing names return `None`; no entry
    /// is created.
    pub fn get(&self, name: &str) -> Option<&NexthopGroup> {
        self.groups.get(name)
    }

    /// Iterates over `(name, group)` pairs, name-ascending.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NexthopGroup)> {
        self.groups.iter().map(|(name, group)| (name.as_str(), group))
    }

    /// Iterates over group names, ascending.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Writes a group under its own name, reporting what the write did.
    /// An equal group already in the table is left untouched and
    /// reported [`GroupUpdate::Unchanged`] — the dedup path.
    pub fn upsert(&mut self, group: NexthopGroup) -> GroupUpdate {
        let outcome = match self.groups.get(group.name()) {
            None => GroupUpdate::Inserted,
            Some(existing) if *existing == group => GroupUpdate::Unchanged,
            Some(_) => GroupUpdate::Replaced,
        };

        match outcome {
            GroupUpdate::Unchanged => {
                debug!("Nexthop group {} unchanged, skipping write", group.name());
            }
            GroupUpdate::Inserted => {
                info!(
                    "Added nexthop group {} ({} entries)",
                    group.name(),
                    group.size()
                );
                self.groups.insert(group.name().to_owned(), group);
            }
            GroupUpdate::Replaced => {
                info!(
                    "Replaced nexthop group {} ({} entries)",
                    group.name(),
                    group.size()
                );
                self.groups.insert(group.name().to_owned(), group);
            }
        }
        outcome
    }

    /// Removes the group with this name, returning it if present.
    /// Removing an absent name is a no-op.
    pub fn remove(&mut self, name: &str) -> Option<NexthopGroup> {
        let removed = self.groups.remove(name);
        if removed.is_some() {
            info!("Removed nexthop group {}", name);
        } else {
            debug!("Nexthop group {} not present, nothing to remove", name);
        }
        removed
    }
}
