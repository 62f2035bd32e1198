use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand, ValueEnum};
use favhash::cmd::hash::{HashCommandArgs, HashInput};
use favhash::cmd::{encode, favicon, hash};
use favhash::domain::error::{EncodeError, HashError};
use favhash::domain::report::{PipelineInput, PipelineInputSource, PipelineReport};
use favhash::engine::mmh3::{HashOptions, TailPolicy};
use favhash::io::{IoError, TextUnits};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Debug, Parser)]
#[command(
    name = "favhash",
    version,
    about = "Favicon fingerprints for http.favicon.hash search queries"
)]
struct Cli {
    #[arg(long, global = true, default_value_t = false)]
    emit_pipeline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Hash text with MurmurHash3 (x86, 32-bit).
    Hash(HashArgs),
    /// Fingerprint favicon resources by their wrapped base64 encoding.
    Favicon(FaviconArgs),
    /// Print the wrapped base64 encoding that favicon fingerprints are computed over.
    Encode(EncodeArgs),
}

#[derive(Debug, clap::Args)]
struct HashArgs {
    #[arg(long, conflicts_with = "input")]
    text: Option<String>,

    #[arg(long)]
    input: Option<PathBuf>,

    #[arg(long, default_value_t = 0)]
    seed: u32,

    #[arg(long, value_enum, default_value_t = CliTailPolicy::Literal)]
    tail: CliTailPolicy,

    #[arg(long, value_enum, default_value_t = CliTextUnits::Bytes)]
    units: CliTextUnits,
}

#[derive(Debug, clap::Args)]
struct FaviconArgs {
    #[arg(long = "input")]
    inputs: Vec<PathBuf>,

    #[arg(long, default_value_t = 0)]
    seed: u32,

    #[arg(long, value_enum, default_value_t = CliTailPolicy::Literal)]
    tail: CliTailPolicy,
}

#[derive(Debug, clap::Args)]
struct EncodeArgs {
    #[arg(long)]
    input: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliTailPolicy {
    Literal,
    Canonical,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliTextUnits {
    Bytes,
    Utf16,
}

impl From<CliTailPolicy> for TailPolicy {
    fn from(value: CliTailPolicy) -> Self {
        match value {
            CliTailPolicy::Literal => Self::Literal,
            CliTailPolicy::Canonical => Self::Canonical,
        }
    }
}

impl From<CliTextUnits> for TextUnits {
    fn from(value: CliTextUnits) -> Self {
        match value {
            CliTextUnits::Bytes => Self::Bytes,
            CliTextUnits::Utf16 => Self::Utf16,
        }
    }
}

#[derive(Serialize)]
struct CliError<'a> {
    error: &'a str,
    message: String,
    code: i32,
    details: Value,
}

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => return handle_parse_error(error),
    };

    let emit_pipeline = cli.emit_pipeline;
    match cli.command {
        Commands::Hash(args) => run_hash(args, emit_pipeline),
        Commands::Favicon(args) => run_favicon(args, emit_pipeline),
        Commands::Encode(args) => run_encode(args, emit_pipeline),
    }
}

fn handle_parse_error(error: clap::Error) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            print!("{error}");
            0
        }
        _ => {
            emit_error(
                "input_usage_error",
                error.to_string(),
                json!({"kind": "cli_parse_error"}),
                3,
            );
            3
        }
    }
}

fn run_hash(args: HashArgs, emit_pipeline: bool) -> i32 {
    let input = match (args.text, args.input) {
        (Some(text), _) => HashInput::Text(text),
        (None, Some(path)) => HashInput::Path(path),
        (None, None) => HashInput::Stdin,
    };
    let options = HashOptions {
        seed: args.seed,
        tail: args.tail.into(),
    };
    let command_args = HashCommandArgs {
        input,
        units: args.units.into(),
        options,
    };
    let pipeline_report = PipelineReport::new(
        "hash",
        PipelineInput::new(vec![command_args.input.pipeline_source()]),
        hash::pipeline_steps(),
        hash::deterministic_guards(options),
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let exit_code = match hash::run(&command_args, stdin.lock(), stdout.lock()) {
        Ok(()) => 0,
        Err(error) => {
            let (exit_code, error_kind) = map_hash_error(&error);
            emit_error(
                error_kind,
                error.to_string(),
                json!({"command": "hash"}),
                exit_code,
            );
            exit_code
        }
    };

    if emit_pipeline {
        emit_pipeline_report(&pipeline_report);
    }
    exit_code
}

fn run_favicon(args: FaviconArgs, emit_pipeline: bool) -> i32 {
    let options = HashOptions {
        seed: args.seed,
        tail: args.tail.into(),
    };
    let command_args = favicon::FaviconCommandArgs {
        inputs: args.inputs,
        options,
    };
    let pipeline_report = PipelineReport::new(
        "favicon",
        PipelineInput::new(favicon::pipeline_sources(&command_args)),
        favicon::pipeline_steps(),
        favicon::deterministic_guards(options),
    );

    let stdin = io::stdin();
    let response = favicon::run_with_stdin(&command_args, stdin.lock());

    let exit_code = match response.exit_code {
        0 | 2 => {
            if emit_json_stdout(&response.payload) {
                response.exit_code
            } else {
                emit_error(
                    "internal_error",
                    "failed to serialize favicon response".to_string(),
                    json!({"command": "favicon"}),
                    1,
                );
                1
            }
        }
        _ => {
            if !emit_json_stderr(&response.payload) {
                emit_error(
                    "internal_error",
                    "failed to serialize favicon error".to_string(),
                    json!({"command": "favicon"}),
                    1,
                );
            }
            1
        }
    };

    if emit_pipeline {
        emit_pipeline_report(&pipeline_report);
    }
    exit_code
}

fn run_encode(args: EncodeArgs, emit_pipeline: bool) -> i32 {
    let source = match &args.input {
        Some(path) => PipelineInputSource::path("input", path.display().to_string()),
        None => PipelineInputSource::stdin("input"),
    };
    let pipeline_report = PipelineReport::new(
        "encode",
        PipelineInput::new(vec![source]),
        encode::pipeline_steps(),
        encode::deterministic_guards(),
    );

    let stdout = io::stdout();
    let mut output = stdout.lock();
    let result = if let Some(path) = &args.input {
        match File::open(path) {
            Ok(file) => encode::run(file, &mut output),
            Err(err) => {
                emit_error(
                    "input_usage_error",
                    format!("failed to open input file `{}`: {err}", path.display()),
                    json!({"command": "encode", "input": path}),
                    3,
                );
                if emit_pipeline {
                    emit_pipeline_report(&pipeline_report);
                }
                return 3;
            }
        }
    } else {
        let stdin = io::stdin();
        encode::run(stdin.lock(), &mut output)
    };

    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            let (exit_code, error_kind) = map_encode_error(&error);
            emit_error(
                error_kind,
                error.to_string(),
                json!({"command": "encode"}),
                exit_code,
            );
            exit_code
        }
    };

    if emit_pipeline {
        emit_pipeline_report(&pipeline_report);
    }
    exit_code
}

fn map_hash_error(error: &HashError) -> (i32, &'static str) {
    match error {
        HashError::OpenInput { .. } | HashError::ReadInput { .. } => (3, "input_usage_error"),
        HashError::WriteOutput { .. } => (1, "internal_error"),
    }
}

fn map_encode_error(error: &EncodeError) -> (i32, &'static str) {
    match error {
        EncodeError::ReadInput { source } => match source {
            IoError::Io(_) => (3, "input_usage_error"),
            _ => (1, "internal_error"),
        },
        EncodeError::WriteOutput { .. } => (1, "internal_error"),
    }
}

fn emit_json_stdout(value: &Value) -> bool {
    match serde_json::to_string(value) {
        Ok(serialized) => {
            println!("{serialized}");
            true
        }
        Err(_) => false,
    }
}

fn emit_json_stderr(value: &Value) -> bool {
    match serde_json::to_string(value) {
        Ok(serialized) => {
            eprintln!("{serialized}");
            true
        }
        Err(_) => false,
    }
}

fn emit_pipeline_report(report: &PipelineReport) {
    match serde_json::to_string(report) {
        Ok(serialized) => eprintln!("{serialized}"),
        Err(error) => emit_error(
            "internal_error",
            format!("failed to serialize pipeline report: {error}"),
            json!({"command": "emit_pipeline"}),
            1,
        ),
    }
}

fn emit_error(error: &'static str, message: String, details: Value, code: i32) {
    let payload = CliError {
        error,
        message,
        code,
        details,
    };
    match serde_json::to_string(&payload) {
        Ok(serialized) => eprintln!("{serialized}"),
        Err(_) => eprintln!(
            "{{\"error\":\"internal_error\",\"message\":\"failed to serialize error\",\"code\":1}}"
        ),
    }
}
