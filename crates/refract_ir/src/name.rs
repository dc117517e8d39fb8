//! Interned string identifier.

use std::fmt;

/// Interned string identifier.
///
/// A `Name` is a plain index into a [`StringInterner`](crate::StringInterner).
/// Equality and hashing are O(1) integer operations, which keeps method-name
/// comparison during chain matching cheap.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Pre-interned empty string.
    pub const EMPTY: Name = Name(0);

    /// Create from a raw interner index.
    #[inline]
    pub const fn new(index: u32) -> Self {
        Name(index)
    }

    /// Get the index into the interner.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::EMPTY
    }
}
