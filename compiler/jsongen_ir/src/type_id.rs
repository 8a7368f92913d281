//! Type identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of a type inside a `TypeGraph`.
///
/// Only meaningful together with the graph that produced it.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    /// Create a type id from a raw arena index.
    #[inline]
    pub const fn new(index: u32) -> Self {
        TypeId(index)
    }

    /// Get the raw arena index.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Get the index as `usize` for slice access.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeId({})", self.0)
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
