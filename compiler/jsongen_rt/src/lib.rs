//! Runtime support for jsongen-generated encoders.
//!
//! Generated code writes through [`Writer`] and reaches types with custom
//! behavior through three traits:
//!
//! - [`Marshaler`]: write self directly into a `Writer` (fast path)
//! - [`RawMarshaler`]: produce already-encoded bytes, possibly failing
//! - [`Optional`]: decide whether a value counts as empty for `omitempty`
//!
//! Every generated record implements `Marshaler`, and `RawMarshaler` unless
//! standard adapters were disabled at generation time.

mod writer;

use std::fmt;

use serde::Serialize;
use thiserror::Error;

pub use writer::Writer;

/// Errors recorded while encoding.
#[derive(Debug, Error)]
pub enum Error {
    /// Reported by a user `RawMarshaler` implementation.
    #[error("{0}")]
    Custom(String),
    /// The dynamic fallback could not encode a value.
    #[error("dynamic value could not be encoded: {0}")]
    Dynamic(#[from] serde_json::Error),
    #[error("non-finite float {0} cannot be encoded as JSON")]
    NonFiniteFloat(f64),
}

impl Error {
    pub fn custom(message: impl fmt::Display) -> Self {
        Error::Custom(message.to_string())
    }
}

/// Writes `self` as JSON into a caller-supplied writer.
///
/// Errors are recorded on the writer rather than returned, so nested
/// encoders can share one buffer without threading results through.
pub trait Marshaler {
    fn marshal_json(&self, out: &mut Writer);
}

/// Produces the JSON encoding of `self` as a fresh byte vector.
///
/// The bytes are inserted verbatim by generated encoders; they are not
/// validated.
pub trait RawMarshaler {
    fn marshal_json_raw(&self) -> Result<Vec<u8>, Error>;
}

/// Explicit emptiness for `omitempty` fields.
pub trait Optional {
    fn is_defined(&self) -> bool;
}

/// Encode a dynamic value through serde.
///
/// Used by generated code for method-free dynamic fields, where the
/// concrete type is only known when the encoder runs.
pub fn marshal_dynamic<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, Error> {
    Ok(serde_json::to_vec(value)?)
}

/// Encode any `Marshaler` into a new buffer.
pub fn to_vec<T: Marshaler + ?Sized>(value: &T) -> Result<Vec<u8>, Error> {
    let mut out = Writer::new();
    value.marshal_json(&mut out);
    out.build_bytes()
}
