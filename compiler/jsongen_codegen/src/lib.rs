//! JSON Encoder Generation for jsongen
//!
//! Turns a validated [`TypeGraph`] into Rust source: one specialized encoder
//! function per reachable record, writing straight into a
//! `jsongen_rt::Writer` with no runtime introspection.
//!
//! # Architecture
//!
//! ```text
//! TypeGraph + GenConfig
//!        ↓
//!   Generator          (worklist over roots and discovered records)
//!        ↓
//!   generate_record    (encoder fn + adapters, one RecordContext each)
//!        ↓
//!   emit_field         (tag, omitempty, separators)
//!        ↓
//!   emit_type          (recursive dispatch; nested records by name)
//!        ↓
//!   GenerationReport   (units in generation order + per-record errors)
//! ```
//!
//! ```
//! use jsongen_codegen::{generate, GenConfig};
//! use jsongen_ir::{FieldDesc, ScalarKind, TypeGraphBuilder};
//!
//! let mut b = TypeGraphBuilder::new();
//! let s = b.scalar(ScalarKind::String);
//! let user = b.record("crate::User", vec![FieldDesc::new("name", s)]);
//! b.root(user);
//! let graph = b.build().unwrap();
//!
//! let code = generate(&graph, &GenConfig::default()).unwrap();
//! assert!(code.contains("pub fn encode_user(out: &mut ::jsongen_rt::Writer, v: &crate::User)"));
//! ```

mod config;
mod context;
mod emptiness;
mod encode;
mod error;
mod field;
mod naming;
mod record;
mod registry;
mod sink;
mod tag;
mod value;

use tracing::debug;

use jsongen_ir::TypeGraph;

pub use config::GenConfig;
pub use context::{GenEnv, RecordContext, Separator};
pub use emptiness::{empty_check, EmptyCheck};
pub use encode::emit_type;
pub use error::{GenError, GenErrors};
pub use field::{emit_field, key_literal};
pub use naming::{snake_case, FieldNamer, NamingPolicy};
pub use record::{generate_record, RecordUnit};
pub use registry::{RegistryEntry, TypeRegistry};
pub use sink::{CodeSink, StringSink};
pub use tag::FieldTag;
pub use value::ValueRef;

/// First line of every generated file.
pub const HEADER: &str = "// Code generated by jsongen. DO NOT EDIT.";

/// One generation run over a type graph.
pub struct Generator<'a> {
    graph: &'a TypeGraph,
    config: &'a GenConfig,
    namer: &'a dyn FieldNamer,
}

impl<'a> Generator<'a> {
    pub fn new(graph: &'a TypeGraph, config: &'a GenConfig) -> Self {
        Generator {
            graph,
            config,
            namer: &config.naming,
        }
    }

    /// Replace the configured naming policy with a custom namer.
    #[must_use]
    pub fn with_namer(mut self, namer: &'a dyn FieldNamer) -> Self {
        self.namer = namer;
        self
    }

    /// Generate every record reachable from the roots.
    ///
    /// A failing record is reported and skipped; the run continues with the
    /// rest of the worklist.
    pub fn run(&self) -> GenerationReport {
        let env = GenEnv {
            graph: self.graph,
            config: self.config,
            namer: self.namer,
        };
        let mut registry = TypeRegistry::new(self.config.function_prefix.clone());
        let mut units = Vec::new();
        let mut errors = Vec::new();

        for root in self.graph.effective_roots() {
            if let Err(err) = registry.request(self.graph, root) {
                errors.push(err);
            }
        }

        while let Some(id) = registry.next_pending() {
            match record::generate_record(env, &mut registry, id) {
                Ok(unit) => units.push(unit),
                Err(err) => {
                    debug!(ty = %self.graph.display(id), error = %err, "record failed");
                    errors.push(err);
                }
            }
        }

        debug!(
            records = units.len(),
            errors = errors.len(),
            "generation finished"
        );
        GenerationReport {
            units,
            errors,
            header: self.config.header,
        }
    }
}

/// Units and errors of one generation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationReport {
    /// Generated records, in generation order.
    pub units: Vec<RecordUnit>,
    pub errors: Vec<GenError>,
    header: bool,
}

impl GenerationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Render the file text: header, then units separated by blank lines.
    pub fn render(&self) -> String {
        let mut sink = StringSink::with_capacity(self.units.iter().map(|u| u.code.len() + 1).sum());
        self.render_into(&mut sink);
        sink.output()
    }

    pub fn render_into(&self, sink: &mut dyn CodeSink) {
        if self.header {
            sink.emit_line(HEADER);
        }
        for (i, unit) in self.units.iter().enumerate() {
            if i > 0 || self.header {
                sink.emit("\n");
            }
            sink.emit(&unit.code);
        }
    }

    /// The rendered file, or every recorded error.
    pub fn into_result(self) -> Result<String, GenErrors> {
        if self.errors.is_empty() {
            Ok(self.render())
        } else {
            Err(GenErrors(self.errors))
        }
    }
}

/// Generate the encoders of `graph` in one call.
pub fn generate(graph: &TypeGraph, config: &GenConfig) -> Result<String, GenErrors> {
    Generator::new(graph, config).run().into_result()
}
