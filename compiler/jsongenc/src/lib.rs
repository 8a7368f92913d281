//! jsongen driver.
//!
//! Loads configuration and JSON type graphs, runs the generator over each
//! graph and writes one Rust source file per input.
//!
//! ```text
//! jsongen.toml + CLI overrides ──► DriverConfig
//! <graph>.json ──► TypeGraph ──► Generator ──► <stem>_jsongen.rs
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;

use std::sync::Once;

pub use cli::GenArgs;
pub use config::{ConfigError, DriverConfig, CONFIG_FILE};
pub use error::DriverError;
pub use pipeline::{
    check_all, generate_all, generate_file, load_graph, output_collisions, output_path,
    render_graph, FileOutcome, RunSummary,
};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing output on stderr.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` (the configured
/// `log_level`) is used. Only the first call has an effect.
pub fn init_tracing(default_filter: &str) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_filter))
            .unwrap_or_else(|_| EnvFilter::new("warn"));
        // A subscriber installed by the embedding process takes precedence.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .try_init();
    });
}
