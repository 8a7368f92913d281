//! Generation errors.
//!
//! All of these are author-facing: they describe a type the generator
//! cannot encode, never a runtime encoding failure.

use std::fmt;

use thiserror::Error;

/// Why a record could not be generated.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GenError {
    #[error("map type `{map}` not supported: only string keys are allowed, found key kind `{key}`")]
    UnsupportedMapKey { map: String, key: String },

    #[error(
        "interface type `{ty}` not supported: only method-free dynamic values are allowed (requires {})",
        .methods.join(", ")
    )]
    InterfaceWithMethods { ty: String, methods: Vec<String> },

    #[error("don't know how to encode `{ty}`")]
    UnsupportedType { ty: String },

    #[error("cannot generate encoder for `{ty}`: not a record type")]
    NotARecord { ty: String },

    #[error("in field `{record}.{field}`: {source}")]
    Field {
        record: String,
        field: String,
        source: Box<GenError>,
    },
}

impl GenError {
    /// The innermost error, past any field context.
    pub fn root_cause(&self) -> &GenError {
        match self {
            GenError::Field { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Every record failure of one generation run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenErrors(pub Vec<GenError>);

impl GenErrors {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GenError> {
        self.0.iter()
    }
}

impl fmt::Display for GenErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "error: {err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for GenErrors {}
