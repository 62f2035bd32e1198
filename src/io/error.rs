use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("unsupported text units: {units}")]
    UnsupportedUnits { units: String },

    #[error("input is not valid utf-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("json serialize error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
