use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;

use crate::domain::error::HashError;
use crate::domain::report::{HashReport, PipelineInputSource};
use crate::engine::fingerprint::Fingerprint;
use crate::engine::mmh3::{HashOptions, hash_with};
use crate::io::reader::{self, InputText};
use crate::io::{TextUnits, writer};

/// Where the `hash` command takes its text from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HashInput {
    #[default]
    Stdin,
    Path(PathBuf),
    Text(String),
}

impl HashInput {
    pub fn pipeline_source(&self) -> PipelineInputSource {
        match self {
            Self::Stdin => PipelineInputSource::stdin("input"),
            Self::Path(path) => PipelineInputSource::path("input", path.display().to_string()),
            Self::Text(_) => PipelineInputSource::text("input"),
        }
    }
}

/// Input arguments for hash command execution API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HashCommandArgs {
    pub input: HashInput,
    pub units: TextUnits,
    pub options: HashOptions,
}

/// Execute `hash` and write the report as one JSON line.
pub fn run<R: Read, W: Write>(
    args: &HashCommandArgs,
    stdin: R,
    output: W,
) -> Result<(), HashError> {
    let report = execute(args, stdin)?;
    writer::write_json(output, &report).map_err(|source| HashError::WriteOutput { source })
}

pub fn execute<R: Read>(args: &HashCommandArgs, stdin: R) -> Result<HashReport, HashError> {
    let bytes = load_input(args, stdin)?;
    let text = reader::decode_units(bytes, args.units).map_err(|source| HashError::ReadInput {
        units: args.units,
        source,
    })?;
    let fingerprint = Fingerprint::new(match &text {
        InputText::Bytes(bytes) => hash_with(bytes, args.options),
        InputText::Utf16(units) => hash_with(units, args.options),
    });

    Ok(HashReport {
        hash: fingerprint.value(),
        hash_signed: fingerprint.signed(),
        length: text.len(),
        seed: args.options.seed,
        tail: args.options.tail.as_str().to_string(),
        units: args.units.as_str().to_string(),
    })
}

fn load_input<R: Read>(args: &HashCommandArgs, stdin: R) -> Result<Vec<u8>, HashError> {
    let read_error = |source| HashError::ReadInput {
        units: args.units,
        source,
    };
    match &args.input {
        HashInput::Text(text) => Ok(text.clone().into_bytes()),
        HashInput::Path(path) => {
            let file = File::open(path).map_err(|source| HashError::OpenInput {
                path: path.display().to_string(),
                source,
            })?;
            reader::read_bytes(file).map_err(read_error)
        }
        HashInput::Stdin => reader::read_bytes(stdin).map_err(read_error),
    }
}

/// Ordered pipeline-step names used for `--emit-pipeline` diagnostics.
pub fn pipeline_steps() -> Vec<String> {
    vec![
        "read_hash_input".to_string(),
        "decode_code_units".to_string(),
        "murmur3_x86_32".to_string(),
        "write_hash_report".to_string(),
    ]
}

/// Determinism guards applied by `hash`.
pub fn deterministic_guards(options: HashOptions) -> Vec<String> {
    vec![
        "rust_native_execution".to_string(),
        "code_units_truncated_to_low_byte".to_string(),
        format!("tail_policy_{}", options.tail),
        "wrapping_u32_arithmetic".to_string(),
    ]
}
