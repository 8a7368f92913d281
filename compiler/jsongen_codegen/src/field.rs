//! Field encoder: tag resolution, omission policy and separators.
//!
//! Separators are resolved at generation time while the state is known.
//! A conditional field makes it unknowable, and from then on the generated
//! `first` flag decides, until an unconditional field settles it again.

use tracing::{trace, warn};

use jsongen_ir::{FieldDesc, TypeDesc};
use jsongen_rt::Writer;

use crate::context::{RecordContext, Separator};
use crate::emptiness::{empty_check, EmptyCheck};
use crate::encode::emit_type;
use crate::tag::FieldTag;
use crate::value::ValueRef;
use crate::GenError;

/// Emit the code writing one field of the record bound to `v`.
pub fn emit_field(
    ctx: &mut RecordContext<'_>,
    record: &TypeDesc,
    field: &FieldDesc,
) -> Result<(), GenError> {
    let tag = FieldTag::parse(field.tag.as_deref());
    if tag.skip {
        trace!(field = %field.name, "skipped");
        return Ok(());
    }
    if !tag.ignored.is_empty() {
        warn!(
            field = %field.name,
            directives = ?tag.ignored,
            "ignoring unknown tag directives"
        );
    }

    let env = ctx.env;
    let key = match &tag.name {
        Some(name) => name.clone(),
        None => env.namer.field_name(record, field),
    };
    let value = ValueRef::field("v", &field.name);
    let omit = tag.omits_empty(env.config.omit_empty);
    let check = if omit {
        empty_check(env, field.ty, &value)
    } else {
        EmptyCheck::Never
    };
    trace!(field = %field.name, %key, omit, "field");

    match check.present() {
        None => {
            emit_key(ctx, &key, false);
            emit_type(ctx, field.ty, &value)?;
            ctx.set_separator(Separator::Trailing);
        }
        Some(present) => {
            let before = ctx.separator();
            ctx.line(format!("if {present} {{"));
            ctx.indent();
            emit_key(ctx, &key, true);
            emit_type(ctx, field.ty, &value)?;
            ctx.dedent();
            ctx.line("}");
            ctx.set_separator(match before {
                Separator::Trailing => Separator::Trailing,
                Separator::Leading | Separator::Dynamic => Separator::Dynamic,
            });
        }
    }
    Ok(())
}

/// Emit the separator and key of a field that is about to be written.
fn emit_key(ctx: &mut RecordContext<'_>, key: &str, conditional: bool) {
    match ctx.separator() {
        Separator::Leading => {
            if conditional {
                // Later fields must see that something was written.
                ctx.mark_first_flag();
                ctx.line("first = false;");
            }
            ctx.line(format!("out.raw_string({});", key_literal(key, false)));
        }
        Separator::Trailing => {
            ctx.line(format!("out.raw_string({});", key_literal(key, true)));
        }
        Separator::Dynamic => {
            ctx.mark_first_flag();
            ctx.line("if first {");
            ctx.indent();
            ctx.line("first = false;");
            ctx.dedent();
            ctx.line("} else {");
            ctx.indent();
            ctx.line("out.raw_byte(b',');");
            ctx.dedent();
            ctx.line("}");
            ctx.line(format!("out.raw_string({});", key_literal(key, false)));
        }
    }
}

/// Rust string literal holding `"key":`, escaped the way the runtime
/// escapes strings, optionally preceded by a comma.
pub fn key_literal(key: &str, comma: bool) -> String {
    let mut text = Writer::with_capacity(key.len() + 4);
    if comma {
        text.raw_byte(b',');
    }
    text.string(key);
    text.raw_byte(b':');
    format!("{:?}", String::from_utf8_lossy(text.as_bytes()))
}
