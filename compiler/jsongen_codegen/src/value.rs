//! Value references in generated code.
//!
//! A `ValueRef` is a place expression of the value's own type: either a
//! field access (`v.name`) or a dereferenced loop/match binding (`*v0`,
//! `**p1` for boxed optionals). The three renderings cover every position
//! the generated code uses a value in.

/// A place expression naming a value in generated code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueRef {
    base: String,
    derefs: usize,
}

impl ValueRef {
    /// Field `field` of the record bound to `base`.
    pub fn field(base: &str, field: &str) -> Self {
        ValueRef {
            base: format!("{base}.{}", rust_ident(field)),
            derefs: 0,
        }
    }

    /// The value behind a binding of reference type; `derefs` is the number
    /// of indirections (2 for `&Box<T>`).
    pub fn behind(binding: &str, derefs: usize) -> Self {
        ValueRef {
            base: binding.to_string(),
            derefs,
        }
    }

    /// Place expression: `v.count`, `*v0`.
    pub fn place(&self) -> String {
        format!("{}{}", "*".repeat(self.derefs), self.base)
    }

    /// Shared reference to the value: `&v.name`, `v0`, `&**p0`.
    pub fn borrow(&self) -> String {
        match self.derefs {
            1 => self.base.clone(),
            n => format!("&{}{}", "*".repeat(n), self.base),
        }
    }

    /// Method-call receiver. Auto-deref makes the binding itself enough.
    pub fn receiver(&self) -> &str {
        &self.base
    }
}

/// Escape Rust keywords used as field names.
fn rust_ident(name: &str) -> String {
    const KEYWORDS: &[&str] = &[
        "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern",
        "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
        "pub", "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use",
        "where", "while", "abstract", "become", "box", "do", "final", "gen", "macro", "override",
        "priv", "try", "typeof", "unsized", "virtual", "yield",
    ];
    if KEYWORDS.contains(&name) {
        format!("r#{name}")
    } else {
        name.to_string()
    }
}
