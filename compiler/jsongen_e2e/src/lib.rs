//! End-to-end fixtures for jsongen.
//!
//! `build.rs` generates encoders for the types in [`fixtures`] into
//! `OUT_DIR`; they are included here and executed by the tests.

pub mod fixtures;

/// Encoders generated with the default configuration.
pub mod model {
    include!(concat!(env!("OUT_DIR"), "/model_jsongen.rs"));
}

/// Encoders generated with `omit_empty` on, no standard adapters and the
/// `sparse_` prefix.
pub mod sparse {
    include!(concat!(env!("OUT_DIR"), "/sparse_jsongen.rs"));
}
