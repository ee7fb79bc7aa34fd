// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Strongly-typed bit-flag sets.
//!
//! A [`FlagSet<T>`] stores a combination of single-bit enum values of `T`
//! as one unsigned integer, while keeping the operations typed: sets only
//! combine with sets or flags of the same enum, never across enum types.
//!
//! Declaring a flag enum takes three steps:
//!
//! ```rust
//! use bitkit::{flag_set_ops, FlagSet};
//!
//! #[repr(u8)]
//! #[derive(Clone, Copy)]
//! enum State {
//!     Ready = 1 << 0,
//!     Waiting = 1 << 1,
//!     Done = 1 << 2,
//! }
//!
//! flag_set_ops!(State: u8);
//! type States = FlagSet<State>;
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

mod private {
    pub trait Sealed {}
}

/// Underlying storage for a [`FlagSet`].
///
/// Sealed; implemented for `u8`, `u16`, `u32` and `u64`. Pick the
/// narrowest width that holds the highest flag bit.
pub trait Bits: Copy + Eq + Hash + fmt::Binary + private::Sealed + 'static {
    /// The zero value (empty set).
    const EMPTY: Self;
    /// All bits set (complement of empty).
    const ALL: Self;

    fn or(self, other: Self) -> Self;
    fn and(self, other: Self) -> Self;
    fn not(self) -> Self;
}

/// Generate the `Bits` impl for each supported unsigned integer.
macro_rules! impl_bits {
    ($($ty:ty),* $(,)?) => {$(
        impl private::Sealed for $ty {}

        impl Bits for $ty {
            const EMPTY: Self = 0;
            const ALL: Self = <$ty>::MAX;

            #[inline]
            fn or(self, other: Self) -> Self {
                self | other
            }

            #[inline]
            fn and(self, other: Self) -> Self {
                self & other
            }

            #[inline]
            fn not(self) -> Self {
                !self
            }
        }
    )*};
}

impl_bits!(u8, u16, u32, u64);

/// A flag-style enum usable inside a [`FlagSet`].
///
/// Implemented by [`flag_set_ops!`](crate::flag_set_ops); rarely written
/// by hand.
///
/// # Precondition
///
/// Every discriminant must occupy exactly one distinct bit position
/// (1, 2, 4, 8, ...). Overlapping bits are a caller-side logic error: the
/// set algebra stays total and panic-free, but results are meaningless.
/// This is never validated at runtime.
pub trait Flag: Copy {
    /// Underlying unsigned integer wide enough for every flag bit.
    type Bits: Bits;

    /// The flag's bit pattern in the underlying type.
    fn bits(self) -> Self::Bits;
}

/// Set of single-bit enum values of `T`, stored as one `T::Bits` integer.
///
/// A pure value type: `Copy`, no allocation, no interior state. Every
/// operator returns a new set except `|=` / `&=`, which update in place.
///
/// The complement operator flips the full width of `T::Bits`, so a set
/// may carry bits that match no named flag. That is accepted behavior;
/// mask with a "valid bits" constant downstream if strict validity
/// matters.
pub struct FlagSet<T: Flag> {
    bits: T::Bits,
    _marker: PhantomData<T>,
}

impl<T: Flag> FlagSet<T> {
    /// The empty set.
    #[inline]
    pub fn empty() -> Self {
        Self::from_bits(T::Bits::EMPTY)
    }

    /// The set with every bit of the underlying type set.
    ///
    /// Identity element of `&`; includes bits outside any named flag.
    #[inline]
    pub fn all() -> Self {
        Self::from_bits(T::Bits::ALL)
    }

    /// Raw underlying bitmask, for interop with APIs expecting a plain
    /// integer.
    #[inline]
    pub fn bits(self) -> T::Bits {
        self.bits
    }

    /// `true` when no bit is set.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.bits == T::Bits::EMPTY
    }

    /// `true` when at least one bit is set.
    #[inline]
    pub fn any(self) -> bool {
        !self.is_empty()
    }

    /// `true` when the given flag's bit is set.
    #[inline]
    pub fn contains(self, flag: T) -> bool {
        self.bits.and(flag.bits()) == flag.bits()
    }

    // Raw construction is deliberately not public: sets are built from
    // enumerators and set algebra only.
    #[inline]
    pub(crate) fn from_bits(bits: T::Bits) -> Self {
        Self {
            bits,
            _marker: PhantomData,
        }
    }
}

// Manual impls so no bounds beyond `T: Flag` leak into the API (a derive
// would require e.g. `T: PartialEq`).

impl<T: Flag> Clone for FlagSet<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Flag> Copy for FlagSet<T> {}

impl<T: Flag> PartialEq for FlagSet<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<T: Flag> Eq for FlagSet<T> {}

impl<T: Flag> Hash for FlagSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<T: Flag> Default for FlagSet<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Flag> fmt::Debug for FlagSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlagSet({:#b})", self.bits)
    }
}

impl<T: Flag> From<T> for FlagSet<T> {
    /// Set containing exactly the given flag.
    #[inline]
    fn from(flag: T) -> Self {
        Self::from_bits(flag.bits())
    }
}

impl<T: Flag> BitOr for FlagSet<T> {
    type Output = Self;

    /// Union of two sets.
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self::from_bits(self.bits.or(rhs.bits))
    }
}

impl<T: Flag> BitOr<T> for FlagSet<T> {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: T) -> Self {
        self | Self::from(rhs)
    }
}

impl<T: Flag> BitOrAssign for FlagSet<T> {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl<T: Flag> BitOrAssign<T> for FlagSet<T> {
    #[inline]
    fn bitor_assign(&mut self, rhs: T) {
        *self = *self | rhs;
    }
}

impl<T: Flag> BitAnd for FlagSet<T> {
    type Output = Self;

    /// Intersection of two sets.
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self::from_bits(self.bits.and(rhs.bits))
    }
}

impl<T: Flag> BitAnd<T> for FlagSet<T> {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: T) -> Self {
        self & Self::from(rhs)
    }
}

impl<T: Flag> BitAndAssign for FlagSet<T> {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}

impl<T: Flag> BitAndAssign<T> for FlagSet<T> {
    #[inline]
    fn bitand_assign(&mut self, rhs: T) {
        *self = *self & rhs;
    }
}

impl<T: Flag> Not for FlagSet<T> {
    type Output = Self;

    /// Complement over the full width of `T::Bits`.
    #[inline]
    fn not(self) -> Self {
        Self::from_bits(self.bits.not())
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::{Flag, FlagSet};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl<T: Flag> Serialize for FlagSet<T>
    where
        T::Bits: Serialize,
    {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.bits().serialize(serializer)
        }
    }

    impl<'de, T: Flag> Deserialize<'de> for FlagSet<T>
    where
        T::Bits: Deserialize<'de>,
    {
        /// Deserializes the raw bitmask. Bits outside any named flag are
        /// preserved, same as the complement operator.
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            Ok(FlagSet::from_bits(T::Bits::deserialize(deserializer)?))
        }
    }
}

/// Wire a flag enum into the [`FlagSet`] algebra.
///
/// Implements [`Flag`] for the enum plus the operator forms coherence
/// rules keep off the generic type: `flag | flag`, `flag & flag`,
/// `flag | set` and `flag & set`.
///
/// ```rust
/// use bitkit::{flag_set_ops, FlagSet};
///
/// #[repr(u32)]
/// #[derive(Clone, Copy)]
/// enum Caps {
///     Read = 1 << 0,
///     Write = 1 << 1,
/// }
///
/// flag_set_ops!(Caps: u32);
///
/// let rw = Caps::Read | Caps::Write;
/// assert_eq!(rw.bits(), 3);
/// ```
#[macro_export]
macro_rules! flag_set_ops {
    ($flag:ty: $bits:ty) => {
        impl $crate::flags::Flag for $flag {
            type Bits = $bits;

            #[inline]
            fn bits(self) -> $bits {
                self as $bits
            }
        }

        impl ::std::ops::BitOr for $flag {
            type Output = $crate::flags::FlagSet<$flag>;

            #[inline]
            fn bitor(self, rhs: $flag) -> Self::Output {
                $crate::flags::FlagSet::from(self) | rhs
            }
        }

        impl ::std::ops::BitOr<$crate::flags::FlagSet<$flag>> for $flag {
            type Output = $crate::flags::FlagSet<$flag>;

            #[inline]
            fn bitor(self, rhs: $crate::flags::FlagSet<$flag>) -> Self::Output {
                rhs | self
            }
        }

        impl ::std::ops::BitAnd for $flag {
            type Output = $crate::flags::FlagSet<$flag>;

            #[inline]
            fn bitand(self, rhs: $flag) -> Self::Output {
                $crate::flags::FlagSet::from(self) & rhs
            }
        }

        impl ::std::ops::BitAnd<$crate::flags::FlagSet<$flag>> for $flag {
            type Output = $crate::flags::FlagSet<$flag>;

            #[inline]
            fn bitand(self, rhs: $crate::flags::FlagSet<$flag>) -> Self::Output {
                rhs & self
            }
        }
    };
}
