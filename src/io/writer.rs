use std::io::Write;

use serde::Serialize;

use crate::io::IoError;

/// Write one value as a single JSON line.
pub fn write_json<W: Write, T: Serialize>(mut writer: W, value: &T) -> Result<(), IoError> {
    serde_json::to_writer(&mut writer, value)?;
    writer.write_all(b"\n")?;
    Ok(())
}

pub fn write_text<W: Write>(mut writer: W, text: &str) -> Result<(), IoError> {
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    Ok(())
}
