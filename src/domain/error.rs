use thiserror::Error;

use crate::io::{IoError, TextUnits};

/// Errors produced by the `hash` command boundary.
#[derive(Debug, Error)]
pub enum HashError {
    /// Input file could not be opened.
    #[error("failed to open input file `{path}`: {source}")]
    OpenInput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Input could not be read or decoded into the declared units.
    #[error("failed to read {units} input: {source}")]
    ReadInput {
        units: TextUnits,
        #[source]
        source: IoError,
    },

    /// Report could not be written.
    #[error("failed to write hash report: {source}")]
    WriteOutput {
        #[source]
        source: IoError,
    },
}

/// Per-item errors produced while fingerprinting favicon resources.
#[derive(Debug, Error)]
pub enum FaviconError {
    /// Resource file could not be opened.
    #[error("failed to open resource file `{path}`: {source}")]
    OpenInput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Resource bytes could not be read.
    #[error("failed to read resource bytes: {source}")]
    ReadInput {
        #[source]
        source: IoError,
    },
}

/// Errors produced by the `encode` command boundary.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Input bytes could not be read.
    #[error("failed to read input: {source}")]
    ReadInput {
        #[source]
        source: IoError,
    },

    /// Encoded text could not be written.
    #[error("failed to write encoded output: {source}")]
    WriteOutput {
        #[source]
        source: IoError,
    },
}
