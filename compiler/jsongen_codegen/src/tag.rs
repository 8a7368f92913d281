//! Field tag directives.
//!
//! A tag is `name[,directive]*`. The first token overrides the serialized
//! key (empty keeps the naming policy), a lone `-` skips the field.
//! `omitempty` and `!omitempty` may appear any number of times; the last one
//! wins. Anything else is ignored so newer tags still generate.

/// Parsed form of a field tag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldTag {
    /// Serialized-name override.
    pub name: Option<String>,
    /// The field is never serialized.
    pub skip: bool,
    /// Per-field omission policy; `None` defers to the global default.
    pub omit_empty: Option<bool>,
    /// Directives that were not recognized.
    pub ignored: Vec<String>,
}

impl FieldTag {
    pub fn parse(tag: Option<&str>) -> Self {
        let mut parsed = FieldTag::default();
        let Some(tag) = tag else {
            return parsed;
        };

        let mut tokens = tag.split(',');
        let name = tokens.next().unwrap_or_default();
        let mut directives = tokens.peekable();

        if name == "-" && directives.peek().is_none() {
            parsed.skip = true;
            return parsed;
        }
        if !name.is_empty() {
            parsed.name = Some(name.to_string());
        }

        for directive in directives {
            match directive {
                "omitempty" => parsed.omit_empty = Some(true),
                "!omitempty" => parsed.omit_empty = Some(false),
                "" => {}
                other => parsed.ignored.push(other.to_string()),
            }
        }
        parsed
    }

    /// Effective omission policy given the global default.
    #[inline]
    pub fn omits_empty(&self, default: bool) -> bool {
        self.omit_empty.unwrap_or(default)
    }
}
