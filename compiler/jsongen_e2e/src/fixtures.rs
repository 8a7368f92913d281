//! Types whose encoders `build.rs` generates.

use std::collections::{BTreeMap, HashMap};

use jsongen_rt::{Error, Marshaler, Optional, RawMarshaler, Writer};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Basic {
    pub name: String,
    pub count: i32,
}

/// One field per scalar kind, named after its writer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scalars {
    pub bool: bool,
    pub string: String,
    pub int: isize,
    pub int8: i8,
    pub int16: i16,
    pub int32: i32,
    pub int64: i64,
    pub uint: usize,
    pub uint8: u8,
    pub uint16: u16,
    pub uint32: u32,
    pub uint64: u64,
    pub float32: f32,
    pub float64: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Node {
    pub value: i64,
    pub next: Option<Box<Node>>,
    pub children: Vec<Node>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Parent {
    pub name: String,
    pub children: Vec<Child>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Child {
    pub name: String,
    pub parent: Option<Box<Parent>>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Collections {
    pub matrix: Vec<Vec<i32>>,
    pub counts: HashMap<String, u8>,
    pub groups: BTreeMap<String, Vec<Basic>>,
    pub maybe: Vec<Option<Basic>>,
}

/// Seconds, encoded as an `"@<n>"` string by its own marshaler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Timestamp(pub u64);

impl Marshaler for Timestamp {
    fn marshal_json(&self, out: &mut Writer) {
        out.string(&format!("@{}", self.0));
    }
}

/// Pre-encoded JSON; empty content is an error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawBlob(pub Vec<u8>);

impl RawMarshaler for RawBlob {
    fn marshal_json_raw(&self) -> Result<Vec<u8>, Error> {
        if self.0.is_empty() {
            return Err(Error::custom("empty blob"));
        }
        Ok(self.0.clone())
    }
}

/// Integer with explicit presence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MaybeInt(pub Option<i64>);

impl Marshaler for MaybeInt {
    fn marshal_json(&self, out: &mut Writer) {
        match self.0 {
            Some(n) => out.int64(n),
            None => out.raw_string("null"),
        }
    }
}

impl Optional for MaybeInt {
    fn is_defined(&self) -> bool {
        self.0.is_some()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Custom {
    pub at: Timestamp,
    pub blob: RawBlob,
    pub maybe: MaybeInt,
    pub extra: serde_json::Value,
    pub r#type: String,
    /// Never serialized.
    pub secret: String,
}

/// Generated with `omit_empty` on and without standard adapters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sparse {
    pub a: String,
    pub b: Vec<u8>,
    pub c: Option<u32>,
    pub d: f64,
    pub keep: bool,
    pub leaf: Leaf,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Leaf {
    pub tag: String,
}
