// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Seeded MurmurHash2 digests.
//!
//! Austin Appleby's MurmurHash2 family in its 32-bit and 64-bit
//! (MurmurHash64A) variants. Fast, well-distributed, and NOT
//! cryptographic: do not use where an attacker controls the input and
//! collisions are costly.
//!
//! Blocks are read little-endian regardless of host byte order, so
//! digests are stable across platforms.

/// 32-bit MurmurHash2 of `data` under the given seed.
///
/// ```rust
/// assert_eq!(bitkit::murmur2_32(23, b"four"), 2072697618);
/// ```
#[must_use]
pub fn murmur2_32(seed: u32, data: &[u8]) -> u32 {
    const M: u32 = 0x5bd1_e995;
    const R: u32 = 24;

    let mut h = seed ^ (data.len() as u32);

    let mut chunks = data.chunks_exact(4);
    for chunk in &mut chunks {
        let mut k = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        k = k.wrapping_mul(M);
        k ^= k >> R;
        k = k.wrapping_mul(M);
        h = h.wrapping_mul(M);
        h ^= k;
    }

    let tail = chunks.remainder();
    if !tail.is_empty() {
        for (i, &byte) in tail.iter().enumerate() {
            h ^= u32::from(byte) << (8 * i);
        }
        h = h.wrapping_mul(M);
    }

    h ^= h >> 13;
    h = h.wrapping_mul(M);
    h ^= h >> 15;
    h
}

/// 64-bit MurmurHash2 (MurmurHash64A) of `data` under the given seed.
///
/// ```rust
/// assert_eq!(bitkit::murmur2_64(23, b"eightbit"), 14685337704530366946);
/// ```
#[must_use]
pub fn murmur2_64(seed: u64, data: &[u8]) -> u64 {
    const M: u64 = 0xc6a4_a793_5bd1_e995;
    const R: u32 = 47;

    let mut h = seed ^ (data.len() as u64).wrapping_mul(M);

    let mut chunks = data.chunks_exact(8);
    for chunk in &mut chunks {
        let mut k = u64::from_le_bytes([
            chunk[0], chunk[1], chunk[2], chunk[3], chunk[4], chunk[5], chunk[6], chunk[7],
        ]);
        k = k.wrapping_mul(M);
        k ^= k >> R;
        k = k.wrapping_mul(M);
        h ^= k;
        h = h.wrapping_mul(M);
    }

    let tail = chunks.remainder();
    if !tail.is_empty() {
        for (i, &byte) in tail.iter().enumerate() {
            h ^= u64::from(byte) << (8 * i);
        }
        h = h.wrapping_mul(M);
    }

    h ^= h >> R;
    h = h.wrapping_mul(M);
    h ^= h >> R;
    h
}
