//! Generation state.
//!
//! `GenEnv` is the read-only part shared by every record of a run.
//! `RecordContext` is the mutable state of one record encoder: its output,
//! indentation, separator state and the counter for auxiliary names. A new
//! context is created per record, so nothing leaks between records.

use jsongen_ir::TypeGraph;

use crate::naming::FieldNamer;
use crate::registry::TypeRegistry;
use crate::GenConfig;

/// Read-only inputs of a generation run.
#[derive(Clone, Copy)]
pub struct GenEnv<'a> {
    pub graph: &'a TypeGraph,
    pub config: &'a GenConfig,
    pub namer: &'a dyn FieldNamer,
}

impl<'a> GenEnv<'a> {
    /// Environment using the configured naming policy.
    pub fn new(graph: &'a TypeGraph, config: &'a GenConfig) -> Self {
        GenEnv {
            graph,
            config,
            namer: &config.naming,
        }
    }

    /// Path of the runtime crate in generated code.
    #[inline]
    pub fn rt(&self) -> &'a str {
        &self.config.runtime_path
    }
}

/// Whether a comma is needed before the next field.
///
/// Resolved statically while it is known, deferred to the generated
/// `first` flag once a conditional field makes it unknowable.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Separator {
    /// No field has been written yet.
    Leading,
    /// At least one field has certainly been written.
    Trailing,
    /// Decided at run time by the generated `first` flag.
    Dynamic,
}

/// Mutable state of one record encoder.
pub struct RecordContext<'a> {
    pub env: GenEnv<'a>,
    pub registry: &'a mut TypeRegistry,
    separator: Separator,
    uses_first_flag: bool,
    indent: usize,
    output: String,
    next_var: u32,
}

impl<'a> RecordContext<'a> {
    pub fn new(env: GenEnv<'a>, registry: &'a mut TypeRegistry) -> Self {
        RecordContext {
            env,
            registry,
            separator: Separator::Leading,
            uses_first_flag: false,
            indent: 0,
            output: String::with_capacity(1024),
            next_var: 0,
        }
    }

    /// Next index for auxiliary names (`i0`, `v0`, `m1`, ...).
    pub fn fresh_index(&mut self) -> u32 {
        let n = self.next_var;
        self.next_var += 1;
        n
    }

    #[inline]
    pub fn separator(&self) -> Separator {
        self.separator
    }

    #[inline]
    pub fn set_separator(&mut self, separator: Separator) {
        self.separator = separator;
    }

    /// Record that the generated code assigns the `first` flag.
    pub fn mark_first_flag(&mut self) {
        self.uses_first_flag = true;
    }

    #[inline]
    pub fn uses_first_flag(&self) -> bool {
        self.uses_first_flag
    }

    /// Current nesting depth.
    #[inline]
    pub fn depth(&self) -> usize {
        self.indent
    }

    pub fn indent(&mut self) {
        self.indent += 1;
    }

    pub fn dedent(&mut self) {
        debug_assert!(self.indent > 0, "dedent called with zero indent");
        self.indent = self.indent.saturating_sub(1);
    }

    /// Write one indented line.
    pub fn line(&mut self, text: impl AsRef<str>) {
        self.push_indent();
        self.output.push_str(text.as_ref());
        self.output.push('\n');
    }

    /// Current output position, for a later `insert_line`.
    pub fn mark(&self) -> usize {
        self.output.len()
    }

    /// Insert a line at a position obtained from `mark`, indented to the
    /// current depth.
    pub fn insert_line(&mut self, at: usize, text: &str) {
        let mut line = "    ".repeat(self.indent);
        line.push_str(text);
        line.push('\n');
        self.output.insert_str(at, &line);
    }

    /// Take the generated output.
    pub fn finish(self) -> String {
        self.output
    }

    fn push_indent(&mut self) {
        for _ in 0..self.indent {
            self.output.push_str("    ");
        }
    }
}
