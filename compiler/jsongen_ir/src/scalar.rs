//! Scalar kinds.
//!
//! Every kind maps 1:1 onto a writer method of the runtime `Writer`.
//! There is no implicit widening: an `int16` field is written with the
//! `int16` writer, never with `int64`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A primitive value kind with a fixed width.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarKind {
    Bool,
    String,
    /// Pointer-sized signed integer (`isize`).
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    /// Pointer-sized unsigned integer (`usize`).
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
}

impl ScalarKind {
    /// All scalar kinds, in declaration order.
    pub const ALL: [ScalarKind; 14] = [
        ScalarKind::Bool,
        ScalarKind::String,
        ScalarKind::Int,
        ScalarKind::Int8,
        ScalarKind::Int16,
        ScalarKind::Int32,
        ScalarKind::Int64,
        ScalarKind::Uint,
        ScalarKind::Uint8,
        ScalarKind::Uint16,
        ScalarKind::Uint32,
        ScalarKind::Uint64,
        ScalarKind::Float32,
        ScalarKind::Float64,
    ];

    /// Name of the runtime writer method for this kind.
    pub const fn writer(self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::String => "string",
            ScalarKind::Int => "int",
            ScalarKind::Int8 => "int8",
            ScalarKind::Int16 => "int16",
            ScalarKind::Int32 => "int32",
            ScalarKind::Int64 => "int64",
            ScalarKind::Uint => "uint",
            ScalarKind::Uint8 => "uint8",
            ScalarKind::Uint16 => "uint16",
            ScalarKind::Uint32 => "uint32",
            ScalarKind::Uint64 => "uint64",
            ScalarKind::Float32 => "float32",
            ScalarKind::Float64 => "float64",
        }
    }

    /// The Rust type a value of this kind has in the target program.
    pub const fn rust_type(self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::String => "String",
            ScalarKind::Int => "isize",
            ScalarKind::Int8 => "i8",
            ScalarKind::Int16 => "i16",
            ScalarKind::Int32 => "i32",
            ScalarKind::Int64 => "i64",
            ScalarKind::Uint => "usize",
            ScalarKind::Uint8 => "u8",
            ScalarKind::Uint16 => "u16",
            ScalarKind::Uint32 => "u32",
            ScalarKind::Uint64 => "u64",
            ScalarKind::Float32 => "f32",
            ScalarKind::Float64 => "f64",
        }
    }

    /// Bit width, or `None` for kinds without a fixed numeric width.
    ///
    /// `int`/`uint` report the width of the generating host.
    pub const fn width(self) -> Option<u32> {
        match self {
            ScalarKind::Bool | ScalarKind::String => None,
            ScalarKind::Int8 | ScalarKind::Uint8 => Some(8),
            ScalarKind::Int16 | ScalarKind::Uint16 => Some(16),
            ScalarKind::Int32 | ScalarKind::Uint32 | ScalarKind::Float32 => Some(32),
            ScalarKind::Int64 | ScalarKind::Uint64 | ScalarKind::Float64 => Some(64),
            ScalarKind::Int | ScalarKind::Uint => Some(usize::BITS),
        }
    }

    /// True for the string kind, the only kind accepted as a map key.
    #[inline]
    pub const fn is_string(self) -> bool {
        matches!(self, ScalarKind::String)
    }

    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, ScalarKind::Float32 | ScalarKind::Float64)
    }

    /// True for every integer and floating point kind.
    #[inline]
    pub const fn is_numeric(self) -> bool {
        !matches!(self, ScalarKind::Bool | ScalarKind::String)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.writer())
    }
}
