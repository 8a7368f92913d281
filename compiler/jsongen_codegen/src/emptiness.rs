//! Emptiness checks for `omitempty` fields.

use jsongen_ir::{Capabilities, TypeId, TypeKind};

use crate::context::GenEnv;
use crate::value::ValueRef;

/// Generated condition deciding whether a value counts as empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EmptyCheck {
    /// The value is always present (records, custom types).
    Never,
    /// Boolean expressions for "is empty" and its negation.
    When { empty: String, present: String },
}

impl EmptyCheck {
    fn when(empty: String, present: String) -> Self {
        EmptyCheck::When { empty, present }
    }

    /// The "is present" condition, if the value can be empty at all.
    pub fn present(&self) -> Option<&str> {
        match self {
            EmptyCheck::Never => None,
            EmptyCheck::When { present, .. } => Some(present),
        }
    }

    /// The "is empty" condition, if the value can be empty at all.
    pub fn empty(&self) -> Option<&str> {
        match self {
            EmptyCheck::Never => None,
            EmptyCheck::When { empty, .. } => Some(empty),
        }
    }
}

/// Build the emptiness check for `value` of type `ty`.
///
/// An explicit `IS_DEFINED` capability takes priority over the kind.
pub fn empty_check(env: GenEnv<'_>, ty: TypeId, value: &ValueRef) -> EmptyCheck {
    let desc = &env.graph[ty];

    if desc.capabilities.contains(Capabilities::IS_DEFINED) {
        let defined = format!("{}::Optional::is_defined({})", env.rt(), value.borrow());
        return EmptyCheck::when(format!("!{defined}"), defined);
    }

    let recv = value.receiver();
    match &desc.kind {
        TypeKind::Sequence { .. } | TypeKind::Map { .. } => {
            EmptyCheck::when(format!("{recv}.is_empty()"), format!("!{recv}.is_empty()"))
        }
        TypeKind::Optional { .. } => {
            EmptyCheck::when(format!("{recv}.is_none()"), format!("{recv}.is_some()"))
        }
        TypeKind::Any { .. } => {
            EmptyCheck::when(format!("{recv}.is_null()"), format!("!{recv}.is_null()"))
        }
        TypeKind::Scalar(kind) if kind.is_string() => {
            EmptyCheck::when(format!("{recv}.is_empty()"), format!("!{recv}.is_empty()"))
        }
        TypeKind::Scalar(kind) if kind.is_float() => {
            let place = value.place();
            EmptyCheck::when(format!("{place} == 0.0"), format!("{place} != 0.0"))
        }
        TypeKind::Scalar(kind) if kind.is_numeric() => {
            let place = value.place();
            EmptyCheck::when(format!("{place} == 0"), format!("{place} != 0"))
        }
        TypeKind::Scalar(_) => {
            let place = value.place();
            EmptyCheck::when(format!("!{place}"), place)
        }
        TypeKind::Record(_) | TypeKind::Custom => EmptyCheck::Never,
    }
}

#[cfg(test)]
mod tests;
