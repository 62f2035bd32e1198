use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::error::FaviconError;
use crate::domain::report::{FaviconFailure, FaviconReport, FaviconResult, PipelineInputSource};
use crate::engine::encode::encode_wrapped;
use crate::engine::fingerprint::Fingerprint;
use crate::engine::mmh3::HashOptions;
use crate::io::reader;

/// Input arguments for favicon command execution API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaviconCommandArgs {
    /// Resource files; stdin is read when empty.
    pub inputs: Vec<PathBuf>,
    pub options: HashOptions,
}

/// Structured command response that carries exit-code mapping and JSON payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FaviconCommandResponse {
    pub exit_code: i32,
    pub payload: Value,
}

pub fn run_with_stdin<R: Read>(args: &FaviconCommandArgs, stdin: R) -> FaviconCommandResponse {
    let report = execute(args, stdin);
    let exit_code = if report.is_complete() { 0 } else { 2 };
    match serde_json::to_value(&report) {
        Ok(payload) => FaviconCommandResponse { exit_code, payload },
        Err(_) => FaviconCommandResponse {
            exit_code: 1,
            payload: json!({
                "error": "internal_error",
                "message": "failed to serialize favicon report"
            }),
        },
    }
}

/// Fingerprint every input; a failed item never aborts the batch.
pub fn execute<R: Read>(args: &FaviconCommandArgs, stdin: R) -> FaviconReport {
    let mut report = FaviconReport::default();
    if args.inputs.is_empty() {
        let bytes = reader::read_bytes(stdin).map_err(|source| FaviconError::ReadInput { source });
        record(&mut report, &PipelineInputSource::stdin("input"), bytes, args.options);
        return report;
    }

    for path in unique_inputs(&args.inputs) {
        let source = PipelineInputSource::path("input", path.display().to_string());
        record(&mut report, &source, read_resource(path), args.options);
    }
    report
}

/// Inputs with duplicates removed, first occurrence order preserved.
pub fn unique_inputs(inputs: &[PathBuf]) -> Vec<&Path> {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(inputs.len());
    for path in inputs {
        if seen.insert(path.as_path()) {
            unique.push(path.as_path());
        }
    }
    unique
}

pub fn pipeline_sources(args: &FaviconCommandArgs) -> Vec<PipelineInputSource> {
    if args.inputs.is_empty() {
        return vec![PipelineInputSource::stdin("input")];
    }
    unique_inputs(&args.inputs)
        .into_iter()
        .map(|path| PipelineInputSource::path("input", path.display().to_string()))
        .collect()
}

fn read_resource(path: &Path) -> Result<Vec<u8>, FaviconError> {
    let file = File::open(path).map_err(|source| FaviconError::OpenInput {
        path: path.display().to_string(),
        source,
    })?;
    reader::read_bytes(file).map_err(|source| FaviconError::ReadInput { source })
}

fn record(
    report: &mut FaviconReport,
    source: &PipelineInputSource,
    bytes: Result<Vec<u8>, FaviconError>,
    options: HashOptions,
) {
    match bytes {
        Ok(bytes) => {
            let encoded = encode_wrapped(&bytes);
            let fingerprint = Fingerprint::of_encoded(&encoded, options);
            report.results.push(FaviconResult::new(
                source,
                bytes.len(),
                encoded.len(),
                fingerprint,
            ));
        }
        Err(error) => report.failures.push(FaviconFailure {
            source: source.source.clone(),
            path: source.path.clone(),
            message: error.to_string(),
        }),
    }
}

/// Ordered pipeline-step names used for `--emit-pipeline` diagnostics.
pub fn pipeline_steps() -> Vec<String> {
    vec![
        "dedupe_resource_inputs".to_string(),
        "read_resource_bytes".to_string(),
        "encode_base64_wrapped_76".to_string(),
        "murmur3_x86_32".to_string(),
        "write_favicon_report".to_string(),
    ]
}

/// Determinism guards applied by `favicon`.
pub fn deterministic_guards(options: HashOptions) -> Vec<String> {
    vec![
        "rust_native_execution".to_string(),
        "input_order_preserved".to_string(),
        "per_item_failures_do_not_abort_batch".to_string(),
        format!("tail_policy_{}", options.tail),
    ]
}
