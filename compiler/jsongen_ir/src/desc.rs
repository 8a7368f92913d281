//! Type, record and field descriptors.

use serde::{Deserialize, Serialize};

use crate::{Capabilities, ScalarKind, TypeId};

/// Structural description of one type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDesc {
    /// Canonical reference to the type in generated code
    /// (e.g. `crate::model::User`). Required for records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub kind: TypeKind,
    #[serde(default, skip_serializing_if = "Capabilities::is_empty")]
    pub capabilities: Capabilities,
}

impl TypeDesc {
    /// An anonymous type without capabilities.
    pub fn new(kind: TypeKind) -> Self {
        TypeDesc {
            name: None,
            kind,
            capabilities: Capabilities::empty(),
        }
    }

    /// A named type without capabilities.
    pub fn named(name: impl Into<String>, kind: TypeKind) -> Self {
        TypeDesc {
            name: Some(name.into()),
            kind,
            capabilities: Capabilities::empty(),
        }
    }

    /// Attach capability tags.
    #[must_use]
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities |= capabilities;
        self
    }

    /// Get the record description if this is a record.
    pub fn as_record(&self) -> Option<&RecordDesc> {
        match &self.kind {
            TypeKind::Record(record) => Some(record),
            _ => None,
        }
    }

    #[inline]
    pub fn is_record(&self) -> bool {
        matches!(self.kind, TypeKind::Record(_))
    }
}

/// The closed set of type shapes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Scalar(ScalarKind),
    Record(RecordDesc),
    /// `Vec<T>`, slices, arrays: anything iterable by position.
    Sequence { element: TypeId },
    /// Associative container. Only string keys are encodable.
    Map { key: TypeId, value: TypeId },
    /// `Option<T>`, or `Option<Box<T>>` when `boxed`.
    Optional {
        element: TypeId,
        #[serde(default)]
        boxed: bool,
    },
    /// Dynamic value. `methods` lists the methods the declared interface
    /// requires; only method-free interfaces are encodable.
    Any {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        methods: Vec<String>,
    },
    /// Opaque type encodable only through its capabilities.
    Custom,
}

impl TypeKind {
    /// Type ids directly referenced by this kind, in field order.
    pub fn references(&self) -> Vec<TypeId> {
        match self {
            TypeKind::Scalar(_) | TypeKind::Any { .. } | TypeKind::Custom => Vec::new(),
            TypeKind::Record(record) => record.fields.iter().map(|f| f.ty).collect(),
            TypeKind::Sequence { element } | TypeKind::Optional { element, .. } => vec![*element],
            TypeKind::Map { key, value } => vec![*key, *value],
        }
    }
}

/// An ordered list of named fields.
///
/// Declaration order is significant: it is the emission order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDesc {
    pub fields: Vec<FieldDesc>,
}

/// One field of a record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDesc {
    /// Declared identifier, used for access in generated code.
    pub name: String,
    pub ty: TypeId,
    /// Raw tag as authored, e.g. `"n,omitempty"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl FieldDesc {
    pub fn new(name: impl Into<String>, ty: TypeId) -> Self {
        FieldDesc {
            name: name.into(),
            ty,
            tag: None,
        }
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}
