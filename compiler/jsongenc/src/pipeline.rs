//! Per-file generation pipeline.
//!
//! Each input graph is an independent generation run with its own registry
//! and output file, so inputs are processed in parallel.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

use jsongen_codegen::{GenConfig, GenErrors, Generator};
use jsongen_ir::TypeGraph;

use crate::config::DriverConfig;
use crate::error::DriverError;

/// A successfully written output file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Number of record encoders generated.
    pub records: usize,
}

/// Result of processing a batch of inputs.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub written: Vec<FileOutcome>,
    pub failures: Vec<DriverError>,
    /// Inputs not attempted because an earlier one failed.
    pub skipped: usize,
}

impl RunSummary {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty() && self.skipped == 0
    }
}

/// Read and validate a JSON type graph.
pub fn load_graph(path: &Path) -> Result<TypeGraph, DriverError> {
    let text = fs::read_to_string(path).map_err(|source| DriverError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| DriverError::Graph {
        path: path.to_path_buf(),
        source,
    })
}

/// Where the output for `input` goes: `<dir>/<stem><suffix>`.
pub fn output_path(input: &Path, config: &DriverConfig) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "graph".into(), |stem| stem.to_string_lossy());
    let file_name = format!("{stem}{}", config.output_suffix);
    match &config.output_dir {
        Some(dir) => dir.join(file_name),
        None => input
            .parent()
            .map_or_else(|| PathBuf::from(&file_name), |parent| parent.join(&file_name)),
    }
}

/// Generate the source for one graph without writing anything.
///
/// Returns the rendered file and the number of records generated.
pub fn render_graph(
    path: &Path,
    graph: &TypeGraph,
    config: &GenConfig,
) -> Result<(String, usize), DriverError> {
    let report = Generator::new(graph, config).run();
    if !report.is_ok() {
        for err in &report.errors {
            warn!(path = %path.display(), error = %err, "record failed");
        }
        return Err(DriverError::Generation {
            path: path.to_path_buf(),
            errors: GenErrors(report.errors),
        });
    }
    let records = report.units.len();
    Ok((report.render(), records))
}

/// Load, generate and write one input file.
pub fn generate_file(input: &Path, config: &DriverConfig) -> Result<FileOutcome, DriverError> {
    let graph = load_graph(input)?;
    debug!(path = %input.display(), types = graph.len(), "loaded graph");
    let (code, records) = render_graph(input, &graph, &config.codegen)?;

    let output = output_path(input, config);
    if let Some(dir) = output.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| DriverError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    fs::write(&output, code).map_err(|source| DriverError::Io {
        path: output.clone(),
        source,
    })?;
    info!(path = %output.display(), records, "wrote");

    Ok(FileOutcome {
        input: input.to_path_buf(),
        output,
        records,
    })
}

/// Inputs that map to an output path already claimed by an earlier input.
pub fn output_collisions(inputs: &[PathBuf], config: &DriverConfig) -> Vec<DriverError> {
    let mut claimed: FxHashMap<PathBuf, &Path> = FxHashMap::default();
    let mut collisions = Vec::new();
    for input in inputs {
        let output = output_path(input, config);
        if let Some(first) = claimed.get(&output) {
            collisions.push(DriverError::OutputCollision {
                first: first.to_path_buf(),
                second: input.clone(),
                output,
            });
        } else {
            claimed.insert(output, input);
        }
    }
    collisions
}

/// Generate every input in parallel.
///
/// Inputs sharing an output path fail the whole batch before anything is
/// written. Without `keep_going`, inputs not yet started when a failure is
/// seen are skipped. Outcomes keep input order.
pub fn generate_all(inputs: &[PathBuf], config: &DriverConfig) -> RunSummary {
    let collisions = output_collisions(inputs, config);
    if !collisions.is_empty() {
        for err in &collisions {
            warn!(error = %err, "output collision");
        }
        return RunSummary {
            failures: collisions,
            ..RunSummary::default()
        };
    }

    let failed = AtomicBool::new(false);
    let results: Vec<Option<Result<FileOutcome, DriverError>>> = inputs
        .par_iter()
        .map(|input| {
            if !config.keep_going && failed.load(Ordering::Relaxed) {
                return None;
            }
            let result = generate_file(input, config);
            if result.is_err() {
                failed.store(true, Ordering::Relaxed);
            }
            Some(result)
        })
        .collect();

    let mut summary = RunSummary::default();
    for result in results {
        match result {
            Some(Ok(outcome)) => summary.written.push(outcome),
            Some(Err(err)) => summary.failures.push(err),
            None => summary.skipped += 1,
        }
    }
    summary
}

/// Validate inputs and run generation without writing output.
///
/// Returns, per input, the number of records that would be generated.
pub fn check_all(inputs: &[PathBuf], config: &GenConfig) -> Vec<Result<usize, DriverError>> {
    inputs
        .par_iter()
        .map(|input| {
            let graph = load_graph(input)?;
            render_graph(input, &graph, config).map(|(_, records)| records)
        })
        .collect()
}
