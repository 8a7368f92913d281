//! Command-line option parsing for `jsongen gen` and `jsongen check`.

use std::path::{Path, PathBuf};

use crate::config::DriverConfig;
use crate::error::DriverError;

/// Options shared by `gen` and `check`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[allow(
    clippy::struct_excessive_bools,
    reason = "independent CLI switches"
)]
pub struct GenArgs {
    pub inputs: Vec<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub omit_empty: bool,
    pub no_std_adapters: bool,
    pub keep_going: bool,
    pub verbose: bool,
}

impl GenArgs {
    /// Parse the arguments following the subcommand name.
    pub fn parse(args: &[String]) -> Result<Self, DriverError> {
        let mut parsed = GenArgs::default();
        let mut i = 0;
        while i < args.len() {
            let arg = args[i].as_str();
            match arg {
                "-o" | "--out-dir" | "--config" => {
                    let Some(value) = args.get(i + 1) else {
                        return Err(DriverError::Usage(format!("{arg} requires a value")));
                    };
                    if arg == "--config" {
                        parsed.config = Some(PathBuf::from(value));
                    } else {
                        parsed.output_dir = Some(PathBuf::from(value));
                    }
                    i += 2;
                    continue;
                }
                "--omit-empty" => parsed.omit_empty = true,
                "--no-std-adapters" => parsed.no_std_adapters = true,
                "--keep-going" | "-k" => parsed.keep_going = true,
                "--verbose" | "-v" => parsed.verbose = true,
                _ => {
                    if let Some(dir) = arg.strip_prefix("--out-dir=") {
                        parsed.output_dir = Some(PathBuf::from(dir));
                    } else if let Some(file) = arg.strip_prefix("--config=") {
                        parsed.config = Some(PathBuf::from(file));
                    } else if arg.starts_with('-') {
                        return Err(DriverError::Usage(format!("unknown option `{arg}`")));
                    } else {
                        parsed.inputs.push(PathBuf::from(arg));
                    }
                }
            }
            i += 1;
        }
        if parsed.inputs.is_empty() {
            return Err(DriverError::Usage("no input graphs given".to_string()));
        }
        Ok(parsed)
    }

    /// Load the configuration (explicit file, else `jsongen.toml` in `cwd`)
    /// and apply command-line overrides on top.
    pub fn resolve_config(&self, cwd: &Path) -> Result<DriverConfig, DriverError> {
        let mut config = match &self.config {
            Some(path) => DriverConfig::from_file(path)?,
            None => DriverConfig::discover(cwd)?,
        };
        if let Some(dir) = &self.output_dir {
            config.output_dir = Some(dir.clone());
        }
        if self.omit_empty {
            config.codegen.omit_empty = true;
        }
        if self.no_std_adapters {
            config.codegen.std_adapters = false;
        }
        if self.keep_going {
            config.keep_going = true;
        }
        if self.verbose {
            config.log_level = "debug".to_string();
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests;
