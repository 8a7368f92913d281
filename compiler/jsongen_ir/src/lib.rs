//! jsongen IR - Type Descriptor Graph
//!
//! This crate contains the structural type descriptions the encoder
//! generator consumes:
//! - `TypeId` handles into a flat `TypeGraph` arena
//! - `TypeKind`, the closed set of supported shapes
//! - `ScalarKind`, one entry per primitive writer
//! - `Capabilities`, resolved once at introspection time
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: records reference each other through `TypeId`,
//!   so mutually recursive types need no boxing and no special casing.
//! - **Validate Once**: a `TypeGraph` can only be obtained through the
//!   builder or deserialization, both of which check it. Downstream code
//!   indexes the graph without re-checking.

mod builder;
mod capabilities;
mod desc;
mod graph;
mod scalar;
mod type_id;

pub use builder::TypeGraphBuilder;
pub use capabilities::Capabilities;
pub use desc::{FieldDesc, RecordDesc, TypeDesc, TypeKind};
pub use graph::{GraphError, TypeGraph};
pub use scalar::ScalarKind;
pub use type_id::TypeId;
