//! Capability tags.
//!
//! Whether a type can write itself, produce its own bytes, or report its
//! own emptiness is decided by the introspector and recorded here. The
//! generator reads the tags; it never probes the type again.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Serialization capabilities a type satisfies.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
    pub struct Capabilities: u8 {
        /// Implements `Marshaler`: writes itself into the output writer.
        const FAST_MARSHAL = 1 << 0;
        /// Implements `RawMarshaler`: produces pre-encoded bytes, may fail.
        const STD_MARSHAL = 1 << 1;
        /// Implements `Optional`: decides its own emptiness.
        const IS_DEFINED = 1 << 2;
    }
}

impl Capabilities {
    /// True if the type can encode itself by either marshal capability.
    #[inline]
    pub fn can_marshal(self) -> bool {
        self.intersects(Capabilities::FAST_MARSHAL | Capabilities::STD_MARSHAL)
    }
}
