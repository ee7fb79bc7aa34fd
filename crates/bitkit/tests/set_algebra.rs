// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Set-algebra laws exercised through the public API only.

use bitkit::{flag_set_ops, FlagSet};

#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    DataAvailable = 1 << 0,
    SampleLost = 1 << 1,
    LivelinessChanged = 1 << 3,
    SubscriptionMatched = 1 << 6,
    PublicationMatched = 1 << 10,
}

flag_set_ops!(Status: u16);
type StatusMask = FlagSet<Status>;

const ALL_STATUSES: [Status; 5] = [
    Status::DataAvailable,
    Status::SampleLost,
    Status::LivelinessChanged,
    Status::SubscriptionMatched,
    Status::PublicationMatched,
];

fn random_mask() -> StatusMask {
    let mut mask = StatusMask::empty();
    for status in ALL_STATUSES {
        if fastrand::bool() {
            mask |= status;
        }
    }
    mask
}

#[test]
fn union_is_commutative_and_associative() {
    for _ in 0..64 {
        let (a, b, c) = (random_mask(), random_mask(), random_mask());
        assert_eq!(a | b, b | a);
        assert_eq!((a | b) | c, a | (b | c));
    }
}

#[test]
fn intersection_is_commutative_and_associative() {
    for _ in 0..64 {
        let (a, b, c) = (random_mask(), random_mask(), random_mask());
        assert_eq!(a & b, b & a);
        assert_eq!((a & b) & c, a & (b & c));
    }
}

#[test]
fn identities_hold() {
    for _ in 0..64 {
        let a = random_mask();
        assert_eq!(a | StatusMask::empty(), a);
        assert_eq!(a & StatusMask::all(), a);
        assert_eq!(a | a, a);
        assert_eq!(a & a, a);
        assert_eq!(!(!a), a);
    }
}

#[test]
fn single_flag_roundtrips_to_bits() {
    for status in ALL_STATUSES {
        assert_eq!(StatusMask::from(status).bits(), status as u16);
    }
}

#[test]
fn assign_operators_update_the_receiver() {
    let mut mask = StatusMask::empty();
    mask |= Status::DataAvailable;
    mask |= Status::SampleLost | Status::LivelinessChanged;
    assert_eq!(mask.bits(), 0b1011);

    mask &= Status::SampleLost | Status::SubscriptionMatched;
    assert_eq!(mask, StatusMask::from(Status::SampleLost));
}

#[test]
fn flag_literal_may_lead_the_expression() {
    let mask = Status::SampleLost | Status::PublicationMatched;
    assert_eq!(Status::DataAvailable | mask, mask | Status::DataAvailable);
    assert_eq!(Status::SampleLost & mask, mask & Status::SampleLost);
    assert_eq!(
        (Status::DataAvailable & mask).bits(),
        0,
        "flag outside the mask intersects to empty"
    );
}

#[test]
fn complement_may_carry_unnamed_bits() {
    // Bit 2 is not a named status; the complement of empty still holds it.
    let everything = !StatusMask::empty();
    assert_eq!(everything.bits(), u16::MAX);
    for status in ALL_STATUSES {
        assert!(everything.contains(status));
    }
}

#[test]
fn masks_work_as_hash_map_keys() {
    use std::collections::HashMap;

    let mut counts: HashMap<StatusMask, u32> = HashMap::new();
    *counts
        .entry(Status::DataAvailable | Status::SampleLost)
        .or_insert(0) += 1;
    *counts
        .entry(Status::SampleLost | Status::DataAvailable)
        .or_insert(0) += 1;

    assert_eq!(counts.len(), 1, "equal masks collapse to one key");
}
