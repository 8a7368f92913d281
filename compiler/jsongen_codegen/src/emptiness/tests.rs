#![allow(clippy::unwrap_used, clippy::expect_used)]

use jsongen_ir::{FieldDesc, ScalarKind, TypeGraph, TypeGraphBuilder};
use pretty_assertions::assert_eq;

use super::*;
use crate::GenConfig;

fn check(build: impl FnOnce(&mut TypeGraphBuilder) -> TypeId) -> EmptyCheck {
    let mut b = TypeGraphBuilder::new();
    let ty = build(&mut b);
    let graph: TypeGraph = b.build().unwrap();
    let config = GenConfig::default();
    empty_check(GenEnv::new(&graph, &config), ty, &ValueRef::field("v", "f"))
}

fn when(empty: &str, present: &str) -> EmptyCheck {
    EmptyCheck::When {
        empty: empty.to_string(),
        present: present.to_string(),
    }
}

#[test]
fn sequences_and_maps_check_length() {
    let seq = check(|b| {
        let int = b.scalar(ScalarKind::Int8);
        b.sequence(int)
    });
    assert_eq!(seq, when("v.f.is_empty()", "!v.f.is_empty()"));

    let map = check(|b| {
        let key = b.scalar(ScalarKind::String);
        b.map(key, key)
    });
    assert_eq!(map, when("v.f.is_empty()", "!v.f.is_empty()"));
}

#[test]
fn optionals_check_absence() {
    let opt = check(|b| {
        let int = b.scalar(ScalarKind::Int8);
        b.boxed(int)
    });
    assert_eq!(opt, when("v.f.is_none()", "v.f.is_some()"));
}

#[test]
fn any_checks_null() {
    assert_eq!(check(TypeGraphBuilder::any), when("v.f.is_null()", "!v.f.is_null()"));
}

#[test]
fn scalars() {
    assert_eq!(
        check(|b| b.scalar(ScalarKind::Bool)),
        when("!v.f", "v.f")
    );
    assert_eq!(
        check(|b| b.scalar(ScalarKind::String)),
        when("v.f.is_empty()", "!v.f.is_empty()")
    );
    assert_eq!(
        check(|b| b.scalar(ScalarKind::Uint16)),
        when("v.f == 0", "v.f != 0")
    );
    assert_eq!(
        check(|b| b.scalar(ScalarKind::Float32)),
        when("v.f == 0.0", "v.f != 0.0")
    );
}

#[test]
fn every_numeric_kind_compares_with_zero() {
    for kind in ScalarKind::ALL.into_iter().filter(|k| k.is_numeric()) {
        let result = check(|b| b.scalar(kind));
        assert!(result.empty().unwrap().starts_with("v.f == 0"), "{kind}");
    }
}

#[test]
fn records_are_never_empty() {
    let result = check(|b| b.record("crate::R", vec![]));
    assert_eq!(result, EmptyCheck::Never);
    assert_eq!(result.present(), None);
}

#[test]
fn custom_without_capability_is_never_empty() {
    let result = check(|b| b.custom("crate::Stamp", jsongen_ir::Capabilities::FAST_MARSHAL));
    assert_eq!(result, EmptyCheck::Never);
}

#[test]
fn is_defined_capability_wins_over_kind() {
    let result = check(|b| {
        let r = b.record("crate::Maybe", vec![]);
        let desc = jsongen_ir::TypeDesc::named(
            "crate::Wrapped",
            jsongen_ir::TypeKind::Sequence { element: r },
        )
        .with_capabilities(jsongen_ir::Capabilities::IS_DEFINED);
        b.add(desc)
    });
    assert_eq!(
        result,
        when(
            "!::jsongen_rt::Optional::is_defined(&v.f)",
            "::jsongen_rt::Optional::is_defined(&v.f)"
        )
    );
}

#[test]
fn deref_bindings_use_place_for_comparisons() {
    let mut b = TypeGraphBuilder::new();
    let int = b.scalar(ScalarKind::Int64);
    let flag = b.scalar(ScalarKind::Bool);
    let _unused = b.record("crate::R", vec![FieldDesc::new("x", int)]);
    let graph = b.build().unwrap();
    let config = GenConfig::default();
    let env = GenEnv::new(&graph, &config);

    assert_eq!(
        empty_check(env, int, &ValueRef::behind("p0", 2)).present(),
        Some("**p0 != 0")
    );
    assert_eq!(
        empty_check(env, flag, &ValueRef::behind("v1", 1)).empty(),
        Some("!*v1")
    );
}
