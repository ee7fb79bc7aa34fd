// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Flag-set walkthrough: model a reader's status word and filter it
//! against an enabled mask, the way an event loop would.

use bitkit::{flag_set_ops, FlagSet};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReaderStatus {
    DataAvailable = 1 << 0,
    SampleLost = 1 << 1,
    LivelinessChanged = 1 << 2,
    DeadlineMissed = 1 << 3,
}

flag_set_ops!(ReaderStatus: u8);
type StatusMask = FlagSet<ReaderStatus>;

fn main() {
    // The application cares about data and lost samples only.
    let enabled = ReaderStatus::DataAvailable | ReaderStatus::SampleLost;
    println!("enabled mask: {enabled:?}");

    // The runtime reports everything that happened this cycle.
    let mut active = StatusMask::empty();
    active |= ReaderStatus::DataAvailable;
    active |= ReaderStatus::LivelinessChanged;
    println!("active mask:  {active:?}");

    // Only enabled statuses trigger work.
    let triggered = active & enabled;
    if triggered.any() {
        for status in [
            ReaderStatus::DataAvailable,
            ReaderStatus::SampleLost,
            ReaderStatus::LivelinessChanged,
            ReaderStatus::DeadlineMissed,
        ] {
            if triggered.contains(status) {
                println!("handling {status:?}");
            }
        }
    }

    // Everything except the enabled statuses, for diagnostics.
    let ignored = active & !enabled;
    println!("ignored bits: {:#b}", ignored.bits());
}
