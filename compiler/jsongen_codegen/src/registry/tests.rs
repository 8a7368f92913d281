#![allow(clippy::unwrap_used, clippy::expect_used)]

use jsongen_ir::{FieldDesc, ScalarKind, TypeGraphBuilder};
use pretty_assertions::assert_eq;

use super::*;

fn graph() -> (TypeGraph, TypeId, TypeId, TypeId) {
    let mut b = TypeGraphBuilder::new();
    let int = b.scalar(ScalarKind::Int32);
    let a = b.record("crate::a::Item", vec![FieldDesc::new("x", int)]);
    let c = b.record("crate::b::Item", vec![]);
    let page = b.record("crate::HTTPPage<crate::a::Item>", vec![]);
    (b.build().unwrap(), a, c, page)
}

#[test]
fn request_assigns_names_once() {
    let (graph, a, _, _) = graph();
    let mut registry = TypeRegistry::new("encode_");
    let first = registry.request(&graph, a).unwrap().clone();
    let second = registry.request(&graph, a).unwrap().clone();
    assert_eq!(first, second);
    assert_eq!(first.function, "encode_item");
    assert_eq!(first.type_ref, "crate::a::Item");
    assert_eq!(registry.len(), 1);
}

#[test]
fn colliding_names_get_suffixes() {
    let (graph, a, c, _) = graph();
    let mut registry = TypeRegistry::new("encode_");
    registry.request(&graph, a).unwrap();
    let other = registry.request(&graph, c).unwrap();
    assert_eq!(other.function, "encode_item_2");
}

#[test]
fn generic_arguments_do_not_leak_into_names() {
    let (graph, _, _, page) = graph();
    let mut registry = TypeRegistry::new("enc_");
    assert_eq!(registry.request(&graph, page).unwrap().function, "enc_http_page");
}

#[test]
fn worklist_is_fifo_and_deduplicated() {
    let (graph, a, c, page) = graph();
    let mut registry = TypeRegistry::new("encode_");
    registry.request(&graph, c).unwrap();
    registry.request(&graph, a).unwrap();
    registry.request(&graph, c).unwrap();
    registry.request(&graph, page).unwrap();

    let order: Vec<_> = std::iter::from_fn(|| registry.next_pending()).collect();
    assert_eq!(order, vec![c, a, page]);
}

#[test]
fn claimed_records_leave_the_worklist() {
    let (graph, a, c, _) = graph();
    let mut registry = TypeRegistry::new("encode_");
    registry.request(&graph, a).unwrap();
    registry.request(&graph, c).unwrap();
    registry.claim(&graph, a).unwrap();
    assert_eq!(registry.next_pending(), Some(c));
    assert_eq!(registry.next_pending(), None);
}

#[test]
fn claim_registers_unknown_records() {
    let (graph, a, _, _) = graph();
    let mut registry = TypeRegistry::new("encode_");
    let entry = registry.claim(&graph, a).unwrap();
    assert_eq!(registry.get(a), Some(&entry));
    assert_eq!(registry.next_pending(), None);
}

#[test]
fn non_records_are_refused() {
    let mut b = TypeGraphBuilder::new();
    let int = b.scalar(ScalarKind::Int64);
    let graph = b.build().unwrap();
    let mut registry = TypeRegistry::new("encode_");
    let err = registry.request(&graph, int).unwrap_err();
    assert_eq!(err, GenError::NotARecord { ty: "i64".to_string() });
    assert!(registry.is_empty());
}

#[test]
fn short_names() {
    assert_eq!(short_name("crate::model::User"), "User");
    assert_eq!(short_name("Page<crate::X>"), "Page");
    assert_eq!(short_name("Plain"), "Plain");
}
