// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # bitkit - strongly-typed flag sets and seeded non-cryptographic hashing
//!
//! Two small, allocation-free building blocks:
//!
//! - [`FlagSet`] - a typed bit set over flag-style enums, with the usual
//!   set algebra (`|`, `&`, `!`) and per-enum operators generated by
//!   [`flag_set_ops!`](crate::flag_set_ops).
//! - [`hash`] - the seeded MurmurHash2 family (32-bit and 64-bit digests)
//!   for hash tables, dedup keys and content fingerprints.
//!
//! ## Quick Start
//!
//! ```rust
//! use bitkit::{flag_set_ops, FlagSet};
//!
//! #[repr(u8)]
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum State {
//!     Ready = 1 << 0,
//!     Waiting = 1 << 1,
//!     Done = 1 << 2,
//! }
//!
//! flag_set_ops!(State: u8);
//! type States = FlagSet<State>;
//!
//! let mut states = State::Ready | State::Waiting;
//! states |= State::Done;
//! assert!(states.contains(State::Waiting));
//! assert_eq!((states & State::Ready).bits(), 1);
//! assert!((states & !States::empty()).any());
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`FlagSet`] | Set of single-bit enum values stored as one integer |
//! | [`Flag`] | Trait connecting a flag enum to its underlying bits |
//! | [`Bits`] | Sealed trait over the supported underlying integers |
//!
//! ## Preconditions
//!
//! Flag enums must use pairwise disjoint single-bit discriminants
//! (1, 2, 4, 8, ...). This is a caller obligation and is never checked at
//! runtime; overlapping bits make the set algebra silently lossy.

/// Strongly-typed bit-flag sets over enum types.
pub mod flags;
/// Seeded MurmurHash2 digests (32-bit and 64-bit).
pub mod hash;

pub use flags::{Bits, Flag, FlagSet};
pub use hash::{murmur2_32, murmur2_64};
