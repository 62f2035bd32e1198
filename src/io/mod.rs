pub mod error;
pub mod reader;
pub mod writer;

use std::fmt;
use std::str::FromStr;

pub use error::IoError;

/// How input bytes are turned into hashable code units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextUnits {
    /// One element per input byte.
    #[default]
    Bytes,
    /// Input is decoded as UTF-8 and hashed as UTF-16 code units.
    Utf16,
}

impl TextUnits {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bytes => "bytes",
            Self::Utf16 => "utf16",
        }
    }
}

impl fmt::Display for TextUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextUnits {
    type Err = IoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bytes" | "latin1" => Ok(Self::Bytes),
            "utf16" | "utf-16" => Ok(Self::Utf16),
            other => Err(IoError::UnsupportedUnits {
                units: other.to_string(),
            }),
        }
    }
}
