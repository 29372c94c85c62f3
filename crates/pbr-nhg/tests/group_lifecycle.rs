//! End-to-end exercise of the nexthop group model as a forwarding-sync
//! loop would drive it: build groups, publish them into a table, mutate,
//! and rely on equality to decide what needs reprogramming.

use pbr_nhg::{
    EncapType, GroupUpdate, MplsAction, NexthopEntry, NexthopGroup, NexthopGroupTable,
};
use pbr_types::{IntfId, IpAddress, MplsActionType, MplsLabel};

fn ip(s: &str) -> IpAddress {
    s.parse().unwrap()
}

fn label(value: u32) -> MplsLabel {
    MplsLabel::new(value).unwrap()
}

/// Builds the MPLS load-balancing group a label-imposition policy would
/// publish: one push action per candidate path.
fn mpls_group() -> NexthopGroup {
    let mut group = NexthopGroup::new("lb-mpls", EncapType::Mpls);
    group.insert_nexthop(
        0,
        NexthopEntry::new(ip("10.0.0.1")).with_mpls_action(MplsAction::with_labels(
            MplsActionType::Push,
            [label(100)],
        )),
    );
    group.insert_nexthop(
        1,
        NexthopEntry::new(ip("10.0.0.2")).with_mpls_action(MplsAction::with_labels(
            MplsActionType::Push,
            [label(200)],
        )),
    );
    group
}

#[test]
fn sync_loop_skips_unchanged_groups() {
    let mut table = NexthopGroupTable::new();

    assert_eq!(table.upsert(mpls_group()), GroupUpdate::Inserted);

    // A rebuilt-but-identical group must not look like a change.
    assert_eq!(table.upsert(mpls_group()), GroupUpdate::Unchanged);

    // Deepening one entry's label stack is a change.
    let mut updated = mpls_group();
    let mut entry = updated.nexthops()[&0].clone();
    let mut action = entry.mpls_action().clone();
    action.push_label(label(50));
    entry.set_mpls_action(action);
    updated.insert_nexthop(0, entry);

    assert_eq!(table.upsert(updated), GroupUpdate::Replaced);
    let stored = table.get("lb-mpls").unwrap();
    assert_eq!(
        stored.nexthops()[&0].mpls_action().label_stack(),
        &[label(50), label(100)]
    );
}

#[test]
fn tunnel_group_round_trip() {
    let mut group = NexthopGroup::new("tun-gre", EncapType::Gre);
    group.set_ttl(128);
    group.set_source_ip(ip("192.0.2.10"));
    group.set_source_intf(IntfId::new("Loopback0"));
    group.insert_nexthop(0, NexthopEntry::new(ip("198.51.100.1")));
    group.insert_nexthop(1, NexthopEntry::new(ip("198.51.100.2")));

    let mut table = NexthopGroupTable::new();
    table.upsert(group.clone());

    // Dropping one ECMP member keeps the other member's slot.
    group.remove_nexthop(0);
    assert_eq!(table.upsert(group), GroupUpdate::Replaced);

    let stored = table.get("tun-gre").unwrap();
    assert_eq!(stored.size(), 1);
    assert!(stored.nexthops().get(&0).is_none());
    assert_eq!(
        stored.nexthops().get(&1),
        Some(&NexthopEntry::new(ip("198.51.100.2")))
    );
}

#[test]
fn legacy_callers_stay_on_the_address_map() {
    let mut group = NexthopGroup::new("legacy", EncapType::Null);
    group.insert_destination_ip(0, ip("10.1.1.1"));
    group.insert_destination_ip(1, ip("10.1.1.2"));

    // The entry map stays empty; the legacy view is what counts.
    assert!(group.nexthops().is_empty());
    assert_eq!(group.size(), 2);

    let mut table = NexthopGroupTable::new();
    assert_eq!(table.upsert(group.clone()), GroupUpdate::Inserted);

    // Legacy-map edits are changes like any other.
    group.remove_destination_ip(0);
    assert_eq!(table.upsert(group), GroupUpdate::Replaced);
    assert_eq!(table.get("legacy").unwrap().size(), 1);
}

#[test]
fn canonical_text_form_is_stable_for_diffing() {
    let a = mpls_group();
    let b = mpls_group();
    assert_eq!(a.to_string(), b.to_string());

    // Any observable difference must show up in the text form.
    let mut c = mpls_group();
    c.set_persistent(true);
    assert_ne!(a.to_string(), c.to_string());

    let rendered = a.to_string();
    let zero = rendered.find("0: 10.0.0.1+push[100]").unwrap();
    let one = rendered.find("1: 10.0.0.2+push[200]").unwrap();
    assert!(zero < one);
}

#[test]
fn groups_order_totally_for_sorted_containers() {
    use std::collections::BTreeSet;

    let mut set = BTreeSet::new();
    set.insert(mpls_group());
    set.insert(mpls_group());

    let mut other = mpls_group();
    other.set_ttl(1);
    set.insert(other);

    // Duplicate collapsed, variant kept.
    assert_eq!(set.len(), 2);
}
