use std::io::Read;

use crate::io::{IoError, TextUnits};

/// Input text after unit decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputText {
    Bytes(Vec<u8>),
    Utf16(Vec<u16>),
}

impl InputText {
    /// Number of hashable elements.
    pub fn len(&self) -> usize {
        match self {
            Self::Bytes(bytes) => bytes.len(),
            Self::Utf16(units) => units.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn read_bytes<R: Read>(mut reader: R) -> Result<Vec<u8>, IoError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(bytes)
}

pub fn decode_units(bytes: Vec<u8>, units: TextUnits) -> Result<InputText, IoError> {
    match units {
        TextUnits::Bytes => Ok(InputText::Bytes(bytes)),
        TextUnits::Utf16 => {
            let text = String::from_utf8(bytes)?;
            Ok(InputText::Utf16(text.encode_utf16().collect()))
        }
    }
}
