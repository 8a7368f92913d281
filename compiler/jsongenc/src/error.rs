//! Driver errors.

use std::path::PathBuf;

use thiserror::Error;

use jsongen_codegen::GenErrors;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: invalid type graph: {source}", path.display())]
    Graph {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(
        "{} and {} would both write {}",
        first.display(),
        second.display(),
        output.display()
    )]
    OutputCollision {
        output: PathBuf,
        first: PathBuf,
        second: PathBuf,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(
        "{}: {} record(s) could not be generated\n{}",
        path.display(),
        errors.len(),
        errors
    )]
    Generation { path: PathBuf, errors: GenErrors },

    #[error("{0}")]
    Usage(String),
}
