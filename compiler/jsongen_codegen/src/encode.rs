//! Type encoder: the recursive dispatcher.
//!
//! Decides, for any reachable type, which code writes a value of it.
//! Priority, first match wins:
//!
//! 1. `FAST_MARSHAL` capability: delegate to `Marshaler::marshal_json`
//! 2. `STD_MARSHAL` capability: splice `RawMarshaler` bytes verbatim
//! 3. scalar kinds: the exact primitive writer for the kind
//! 4. composite shapes: sequence, record, optional, map, any
//!
//! Records are never inlined. They are requested from the registry and
//! called by name, which is what keeps recursive type graphs finite.

use tracing::trace;

use jsongen_ir::{Capabilities, ScalarKind, TypeId, TypeKind};

use crate::context::RecordContext;
use crate::value::ValueRef;
use crate::GenError;

/// Emit code that writes `value` (of type `ty`) to `out`.
pub fn emit_type(ctx: &mut RecordContext<'_>, ty: TypeId, value: &ValueRef) -> Result<(), GenError> {
    let env = ctx.env;
    let graph = env.graph;
    let rt = env.rt();
    let desc = &graph[ty];

    if desc.capabilities.contains(Capabilities::FAST_MARSHAL) {
        ctx.line(format!("{rt}::Marshaler::marshal_json({}, out);", value.borrow()));
        return Ok(());
    }
    if desc.capabilities.contains(Capabilities::STD_MARSHAL) {
        ctx.line(format!(
            "out.raw({rt}::RawMarshaler::marshal_json_raw({}));",
            value.borrow()
        ));
        return Ok(());
    }

    match &desc.kind {
        TypeKind::Scalar(kind) => {
            emit_scalar(ctx, *kind, value);
            Ok(())
        }
        TypeKind::Sequence { element } => emit_sequence(ctx, *element, value),
        TypeKind::Record(_) => {
            let function = ctx.registry.request(graph, ty)?.function.clone();
            trace!(%function, depth = ctx.depth(), "record call");
            ctx.line(format!("{function}(out, {});", value.borrow()));
            Ok(())
        }
        TypeKind::Optional { element, boxed } => emit_optional(ctx, *element, *boxed, value),
        TypeKind::Map { key, value: element } => {
            let key_is_string = matches!(graph[*key].kind, TypeKind::Scalar(k) if k.is_string());
            if !key_is_string {
                return Err(GenError::UnsupportedMapKey {
                    map: graph.display(ty),
                    key: graph.display(*key),
                });
            }
            emit_map(ctx, *element, value)
        }
        TypeKind::Any { methods } => {
            if !methods.is_empty() {
                return Err(GenError::InterfaceWithMethods {
                    ty: graph.display(ty),
                    methods: methods.clone(),
                });
            }
            ctx.line(format!("out.raw({rt}::marshal_dynamic({}));", value.borrow()));
            Ok(())
        }
        TypeKind::Custom => Err(GenError::UnsupportedType {
            ty: graph.display(ty),
        }),
    }
}

fn emit_scalar(ctx: &mut RecordContext<'_>, kind: ScalarKind, value: &ValueRef) {
    let writer = kind.writer();
    if kind.is_string() {
        ctx.line(format!("out.{writer}({});", value.borrow()));
    } else {
        ctx.line(format!("out.{writer}({});", value.place()));
    }
}

fn emit_sequence(
    ctx: &mut RecordContext<'_>,
    element: TypeId,
    value: &ValueRef,
) -> Result<(), GenError> {
    let n = ctx.fresh_index();
    let index = format!("i{n}");
    let item = format!("v{n}");

    ctx.line("out.raw_byte(b'[');");
    ctx.line(format!(
        "for ({index}, {item}) in {}.iter().enumerate() {{",
        value.receiver()
    ));
    ctx.indent();
    ctx.line(format!("if {index} > 0 {{"));
    ctx.indent();
    ctx.line("out.raw_byte(b',');");
    ctx.dedent();
    ctx.line("}");
    emit_type(ctx, element, &ValueRef::behind(&item, 1))?;
    ctx.dedent();
    ctx.line("}");
    ctx.line("out.raw_byte(b']');");
    Ok(())
}

fn emit_optional(
    ctx: &mut RecordContext<'_>,
    element: TypeId,
    boxed: bool,
    value: &ValueRef,
) -> Result<(), GenError> {
    let binding = format!("p{}", ctx.fresh_index());
    let derefs = if boxed { 2 } else { 1 };

    ctx.line(format!("if let Some({binding}) = {} {{", value.borrow()));
    ctx.indent();
    emit_type(ctx, element, &ValueRef::behind(&binding, derefs))?;
    ctx.dedent();
    ctx.line("} else {");
    ctx.indent();
    ctx.line("out.raw_string(\"null\");");
    ctx.dedent();
    ctx.line("}");
    Ok(())
}

fn emit_map(ctx: &mut RecordContext<'_>, element: TypeId, value: &ValueRef) -> Result<(), GenError> {
    let m = format!("m{}", ctx.fresh_index());

    ctx.line("out.raw_byte(b'{');");
    ctx.line(format!("let mut {m}_first = true;"));
    ctx.line(format!("for ({m}_name, {m}_value) in {} {{", value.borrow()));
    ctx.indent();
    ctx.line(format!("if !{m}_first {{"));
    ctx.indent();
    ctx.line("out.raw_byte(b',');");
    ctx.dedent();
    ctx.line("}");
    ctx.line(format!("{m}_first = false;"));
    ctx.line(format!("out.string({m}_name);"));
    ctx.line("out.raw_byte(b':');");
    emit_type(ctx, element, &ValueRef::behind(&format!("{m}_value"), 1))?;
    ctx.dedent();
    ctx.line("}");
    ctx.line("out.raw_byte(b'}');");
    Ok(())
}
