use std::io::{Read, Write};

use crate::domain::error::EncodeError;
use crate::engine::encode::encode_wrapped;
use crate::io::{reader, writer};

/// Execute `encode` from input stream to output stream.
pub fn run<R: Read, W: Write>(input: R, output: W) -> Result<(), EncodeError> {
    let bytes = reader::read_bytes(input).map_err(|source| EncodeError::ReadInput { source })?;
    writer::write_text(output, &encode_wrapped(&bytes))
        .map_err(|source| EncodeError::WriteOutput { source })
}

/// Ordered pipeline-step names used for `--emit-pipeline` diagnostics.
pub fn pipeline_steps() -> Vec<String> {
    vec![
        "read_input_bytes".to_string(),
        "encode_base64_wrapped_76".to_string(),
        "write_encoded_text".to_string(),
    ]
}

/// Determinism guards applied by `encode`.
pub fn deterministic_guards() -> Vec<String> {
    vec![
        "rust_native_execution".to_string(),
        "standard_alphabet_with_padding".to_string(),
        "trailing_newline_after_every_line".to_string(),
    ]
}
