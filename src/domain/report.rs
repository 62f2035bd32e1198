use serde::{Deserialize, Serialize};

use crate::engine::fingerprint::Fingerprint;

/// Report emitted by the `hash` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HashReport {
    pub hash: u32,
    pub hash_signed: i32,
    pub length: usize,
    pub seed: u32,
    pub tail: String,
    pub units: String,
}

/// Report emitted by the `favicon` command.
///
/// Items that fail are listed in `failures` and omitted from `results`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FaviconReport {
    pub results: Vec<FaviconResult>,
    pub failures: Vec<FaviconFailure>,
}

impl FaviconReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Fingerprint of one resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FaviconResult {
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub bytes: usize,
    pub encoded_length: usize,
    pub hash: u32,
    pub hash_signed: i32,
    pub query: String,
}

impl FaviconResult {
    pub fn new(
        source: &PipelineInputSource,
        bytes: usize,
        encoded_length: usize,
        fingerprint: Fingerprint,
    ) -> Self {
        Self {
            source: source.source.clone(),
            path: source.path.clone(),
            bytes,
            encoded_length,
            hash: fingerprint.value(),
            hash_signed: fingerprint.signed(),
            query: fingerprint.query(),
        }
    }
}

/// Resource that could not be fingerprinted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FaviconFailure {
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub message: String,
}

/// Diagnostics report emitted when `--emit-pipeline` is enabled.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PipelineReport {
    pub command: String,
    pub input: PipelineInput,
    pub steps: Vec<String>,
    pub deterministic_guards: Vec<String>,
}

impl PipelineReport {
    pub fn new(
        command: impl Into<String>,
        input: PipelineInput,
        steps: Vec<String>,
        deterministic_guards: Vec<String>,
    ) -> Self {
        Self {
            command: command.into(),
            input,
            steps,
            deterministic_guards,
        }
    }
}

/// Input-source descriptors used in pipeline diagnostics.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PipelineInput {
    pub sources: Vec<PipelineInputSource>,
}

impl PipelineInput {
    pub fn new(sources: Vec<PipelineInputSource>) -> Self {
        Self { sources }
    }
}

/// Single input source descriptor.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PipelineInputSource {
    pub label: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl PipelineInputSource {
    pub fn stdin(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            source: "stdin".to_string(),
            path: None,
        }
    }

    pub fn path(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            source: "path".to_string(),
            path: Some(path.into()),
        }
    }

    pub fn text(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            source: "argument".to_string(),
            path: None,
        }
    }
}
