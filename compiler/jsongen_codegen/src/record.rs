//! Record encoder: one encoder function per record, plus adapters.

use tracing::debug;

use jsongen_ir::{Capabilities, TypeId};

use crate::context::{GenEnv, RecordContext};
use crate::field::emit_field;
use crate::registry::{RegistryEntry, TypeRegistry};
use crate::GenError;

/// Lints the generated code must not trip in the including crate.
const ALLOW: &str =
    "#[allow(unused_mut, unused_assignments, unused_variables, clippy::all, clippy::pedantic)]";

/// Generated text for one record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordUnit {
    pub ty: TypeId,
    /// Canonical type reference the encoder takes.
    pub type_ref: String,
    /// Name of the encoder function.
    pub function: String,
    /// Encoder function followed by its adapter impls.
    pub code: String,
}

/// Generate the encoder of record `id`.
///
/// Nested records are only requested from `registry`; the caller drains it.
pub fn generate_record(
    env: GenEnv<'_>,
    registry: &mut TypeRegistry,
    id: TypeId,
) -> Result<RecordUnit, GenError> {
    let entry = registry.claim(env.graph, id)?;
    let desc = &env.graph[id];
    let Some(record) = desc.as_record() else {
        return Err(GenError::NotARecord {
            ty: env.graph.display(id),
        });
    };
    let rt = env.rt();
    let RegistryEntry { function, type_ref } = entry;

    let mut ctx = RecordContext::new(env, registry);
    ctx.line(ALLOW);
    ctx.line(format!(
        "pub fn {function}(out: &mut {rt}::Writer, v: &{type_ref}) {{"
    ));
    ctx.indent();
    ctx.line("out.raw_byte(b'{');");
    let flag_at = ctx.mark();

    for field in &record.fields {
        emit_field(&mut ctx, desc, field).map_err(|source| GenError::Field {
            record: type_ref.clone(),
            field: field.name.clone(),
            source: Box::new(source),
        })?;
    }
    if ctx.uses_first_flag() {
        ctx.insert_line(flag_at, "let mut first = true;");
    }

    ctx.line("out.raw_byte(b'}');");
    ctx.dedent();
    ctx.line("}");

    // A record with its own marshal behavior already implements the trait.
    if !desc.capabilities.contains(Capabilities::FAST_MARSHAL) {
        emit_fast_adapter(&mut ctx, rt, &function, &type_ref);
    }
    if env.config.std_adapters && !desc.capabilities.contains(Capabilities::STD_MARSHAL) {
        emit_std_adapter(&mut ctx, rt, &function, &type_ref);
    }

    debug!(%function, %type_ref, fields = record.fields.len(), "generated record");
    Ok(RecordUnit {
        ty: id,
        type_ref,
        function,
        code: ctx.finish(),
    })
}

fn emit_fast_adapter(ctx: &mut RecordContext<'_>, rt: &str, function: &str, type_ref: &str) {
    ctx.line("");
    ctx.line(format!("impl {rt}::Marshaler for {type_ref} {{"));
    ctx.indent();
    ctx.line(format!("fn marshal_json(&self, out: &mut {rt}::Writer) {{"));
    ctx.indent();
    ctx.line(format!("{function}(out, self);"));
    ctx.dedent();
    ctx.line("}");
    ctx.dedent();
    ctx.line("}");
}

fn emit_std_adapter(ctx: &mut RecordContext<'_>, rt: &str, function: &str, type_ref: &str) {
    ctx.line("");
    ctx.line(format!("impl {rt}::RawMarshaler for {type_ref} {{"));
    ctx.indent();
    ctx.line(format!(
        "fn marshal_json_raw(&self) -> ::core::result::Result<::std::vec::Vec<u8>, {rt}::Error> {{"
    ));
    ctx.indent();
    ctx.line(format!("let mut out = {rt}::Writer::new();"));
    ctx.line(format!("{function}(&mut out, self);"));
    ctx.line("out.build_bytes()");
    ctx.dedent();
    ctx.line("}");
    ctx.dedent();
    ctx.line("}");
}
