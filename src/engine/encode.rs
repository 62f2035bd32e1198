use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

/// Maximum number of encoded characters per line.
pub const LINE_WIDTH: usize = 76;

/// Encode bytes as padded base64, broken into lines of `LINE_WIDTH`
/// characters, each terminated by `\n`.
///
/// Empty input encodes to an empty string.
pub fn encode_wrapped(bytes: &[u8]) -> String {
    let encoded = BASE64.encode(bytes);
    let mut wrapped = String::with_capacity(encoded.len() + encoded.len() / LINE_WIDTH + 1);
    for (index, ch) in encoded.chars().enumerate() {
        if index > 0 && index % LINE_WIDTH == 0 {
            wrapped.push('\n');
        }
        wrapped.push(ch);
    }
    if !encoded.is_empty() {
        wrapped.push('\n');
    }
    wrapped
}
