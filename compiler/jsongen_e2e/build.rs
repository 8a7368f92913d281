//! Generates encoders for the fixture types in `src/fixtures.rs`.
//!
//! The type graphs below mirror the fixture declarations by hand; a real
//! project would produce them with an introspection step.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use jsongen_codegen::{generate, GenConfig};
use jsongen_ir::{Capabilities, FieldDesc, ScalarKind, TypeGraph, TypeGraphBuilder};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"));

    write(
        &out_dir.join("model_jsongen.rs"),
        &model_graph(),
        &GenConfig::default(),
    );

    let sparse = GenConfig {
        omit_empty: true,
        std_adapters: false,
        function_prefix: "sparse_".to_string(),
        ..GenConfig::default()
    };
    write(&out_dir.join("sparse_jsongen.rs"), &sparse_graph(), &sparse);
}

fn write(path: &Path, graph: &TypeGraph, config: &GenConfig) {
    let code = match generate(graph, config) {
        Ok(code) => code,
        Err(errors) => panic!("encoder generation failed:\n{errors}"),
    };
    fs::write(path, code).expect("write generated encoders");
}

fn model_graph() -> TypeGraph {
    let mut b = TypeGraphBuilder::new();
    let string = b.scalar(ScalarKind::String);
    let int32 = b.scalar(ScalarKind::Int32);
    let int64 = b.scalar(ScalarKind::Int64);
    let uint8 = b.scalar(ScalarKind::Uint8);

    let basic = b.record(
        "crate::fixtures::Basic",
        vec![
            FieldDesc::new("name", string).with_tag("n"),
            FieldDesc::new("count", int32).with_tag("c,omitempty"),
        ],
    );

    let scalar_fields = ScalarKind::ALL
        .iter()
        .map(|&kind| {
            let ty = b.scalar(kind);
            FieldDesc::new(kind.writer(), ty)
        })
        .collect();
    let scalars = b.record("crate::fixtures::Scalars", scalar_fields);

    let node = b.reserve();
    let next = b.boxed(node);
    let children = b.sequence(node);
    b.define_record(
        node,
        "crate::fixtures::Node",
        vec![
            FieldDesc::new("value", int64),
            FieldDesc::new("next", next),
            FieldDesc::new("children", children).with_tag("children,omitempty"),
        ],
    );

    let parent = b.reserve();
    let child = b.reserve();
    let boxed_parent = b.boxed(parent);
    let child_list = b.sequence(child);
    b.define_record(
        parent,
        "crate::fixtures::Parent",
        vec![
            FieldDesc::new("name", string),
            FieldDesc::new("children", child_list),
        ],
    );
    b.define_record(
        child,
        "crate::fixtures::Child",
        vec![
            FieldDesc::new("name", string),
            FieldDesc::new("parent", boxed_parent),
        ],
    );

    let row = b.sequence(int32);
    let matrix = b.sequence(row);
    let counts = b.map(string, uint8);
    let basics = b.sequence(basic);
    let groups = b.map(string, basics);
    let maybe_basic = b.optional(basic);
    let maybe = b.sequence(maybe_basic);
    let collections = b.record(
        "crate::fixtures::Collections",
        vec![
            FieldDesc::new("matrix", matrix),
            FieldDesc::new("counts", counts),
            FieldDesc::new("groups", groups),
            FieldDesc::new("maybe", maybe),
        ],
    );

    let timestamp = b.custom("crate::fixtures::Timestamp", Capabilities::FAST_MARSHAL);
    let blob = b.custom("crate::fixtures::RawBlob", Capabilities::STD_MARSHAL);
    let maybe_int = b.custom(
        "crate::fixtures::MaybeInt",
        Capabilities::FAST_MARSHAL | Capabilities::IS_DEFINED,
    );
    let value = b.any();
    let custom = b.record(
        "crate::fixtures::Custom",
        vec![
            FieldDesc::new("at", timestamp),
            FieldDesc::new("blob", blob),
            FieldDesc::new("maybe", maybe_int).with_tag("maybe,omitempty"),
            FieldDesc::new("extra", value).with_tag("extra,omitempty"),
            FieldDesc::new("type", string),
            FieldDesc::new("secret", string).with_tag("-"),
        ],
    );

    for root in [basic, scalars, node, parent, collections, custom] {
        b.root(root);
    }
    b.build().expect("fixture graph is valid")
}

fn sparse_graph() -> TypeGraph {
    let mut b = TypeGraphBuilder::new();
    let string = b.scalar(ScalarKind::String);
    let uint8 = b.scalar(ScalarKind::Uint8);
    let uint32 = b.scalar(ScalarKind::Uint32);
    let float64 = b.scalar(ScalarKind::Float64);
    let boolean = b.scalar(ScalarKind::Bool);

    let leaf = b.record(
        "crate::fixtures::Leaf",
        vec![FieldDesc::new("tag", string)],
    );
    let bytes = b.sequence(uint8);
    let maybe = b.optional(uint32);
    let sparse = b.record(
        "crate::fixtures::Sparse",
        vec![
            FieldDesc::new("a", string),
            FieldDesc::new("b", bytes),
            FieldDesc::new("c", maybe),
            FieldDesc::new("d", float64),
            FieldDesc::new("keep", boolean).with_tag("keep,!omitempty"),
            FieldDesc::new("leaf", leaf),
        ],
    );
    b.root(sparse);
    b.build().expect("sparse graph is valid")
}
