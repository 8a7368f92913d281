//! Field key naming.
//!
//! A tag name override always wins; the policy only decides keys for fields
//! that do not carry one.

use serde::{Deserialize, Serialize};

use jsongen_ir::{FieldDesc, TypeDesc};

/// Maps a field to its serialized key.
pub trait FieldNamer {
    fn field_name(&self, record: &TypeDesc, field: &FieldDesc) -> String;
}

/// Built-in naming policies.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingPolicy {
    /// The declared identifier, unchanged.
    #[default]
    AsDeclared,
    /// `user_id` -> `userId`
    LowerCamelCase,
    /// `user_id` -> `UserId`
    UpperCamelCase,
    /// `user_id` -> `user-id`
    KebabCase,
}

impl NamingPolicy {
    pub fn apply(self, ident: &str) -> String {
        let ident = ident.strip_prefix("r#").unwrap_or(ident);
        match self {
            NamingPolicy::AsDeclared => ident.to_string(),
            NamingPolicy::LowerCamelCase => camel_case(ident, false),
            NamingPolicy::UpperCamelCase => camel_case(ident, true),
            NamingPolicy::KebabCase => ident.replace('_', "-"),
        }
    }
}

impl FieldNamer for NamingPolicy {
    fn field_name(&self, _record: &TypeDesc, field: &FieldDesc) -> String {
        self.apply(&field.name)
    }
}

fn camel_case(ident: &str, upper_first: bool) -> String {
    let mut out = String::with_capacity(ident.len());
    let mut upper_next = upper_first;
    for (i, c) in ident.chars().enumerate() {
        if c == '_' {
            // A leading underscore is kept, inner ones become word breaks.
            if i == 0 {
                out.push('_');
            } else {
                upper_next = true;
            }
            continue;
        }
        if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else if out.is_empty() && !upper_first {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Convert a type name to a snake_case identifier fragment.
///
/// `HTTPServer` -> `http_server`, `UserID` -> `user_id`.
pub fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            continue;
        }
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary && !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }
    while out.ends_with('_') {
        out.pop();
    }
    out
}
