//! Driver configuration (`jsongen.toml`).
//!
//! ```toml
//! output_dir = "src/generated"
//! keep_going = true
//!
//! [codegen]
//! omit_empty = true
//! naming = "lower_camel_case"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use jsongen_codegen::GenConfig;

/// File name looked up in the working directory when no config is given.
pub const CONFIG_FILE: &str = "jsongen.toml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Everything the driver needs besides the input files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DriverConfig {
    /// Options passed through to the generator.
    pub codegen: GenConfig,
    /// Directory for generated files; next to each input when unset.
    pub output_dir: Option<PathBuf>,
    /// Appended to the input file stem to name the output.
    pub output_suffix: String,
    /// Keep processing remaining inputs after one fails.
    pub keep_going: bool,
    /// Log filter used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            codegen: GenConfig::default(),
            output_dir: None,
            output_suffix: "_jsongen.rs".to_string(),
            keep_going: false,
            log_level: "warn".to_string(),
        }
    }
}

impl DriverConfig {
    /// Load and validate a config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate config text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// `jsongen.toml` in `dir` if present, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            Self::from_file(candidate)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.output_suffix.ends_with(".rs") {
            return Err(ConfigError::Invalid(format!(
                "output_suffix `{}` must end with `.rs`",
                self.output_suffix
            )));
        }
        if !is_identifier_prefix(&self.codegen.function_prefix) {
            return Err(ConfigError::Invalid(format!(
                "function_prefix `{}` cannot start a Rust identifier",
                self.codegen.function_prefix
            )));
        }
        if self.codegen.runtime_path.trim().is_empty() {
            return Err(ConfigError::Invalid("runtime_path is empty".into()));
        }
        Ok(())
    }
}

/// Non-empty, starts like an identifier, continues with identifier chars.
fn is_identifier_prefix(prefix: &str) -> bool {
    let mut chars = prefix.chars();
    chars
        .next()
        .is_some_and(|c| c == '_' || c.is_alphabetic())
        && chars.all(|c| c == '_' || c.is_alphanumeric())
}

#[cfg(test)]
mod tests;
