use std::fmt;

use crate::engine::encode::encode_wrapped;
use crate::engine::mmh3::{HashOptions, hash_with};

/// Prefix of the search-index query token for a favicon hash.
pub const QUERY_PREFIX: &str = "http.favicon.hash:";

/// 32-bit favicon fingerprint.
///
/// The search index keys favicons by the signed reinterpretation of the
/// hash, so `Display` and [`Fingerprint::query`] render that form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint(u32);

impl Fingerprint {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Fingerprint raw resource bytes: wrapped base64 text, then hash.
    pub fn of_bytes(bytes: &[u8], options: HashOptions) -> Self {
        Self::of_encoded(&encode_wrapped(bytes), options)
    }

    /// Fingerprint text that is already in wrapped base64 form.
    pub fn of_encoded(encoded: &str, options: HashOptions) -> Self {
        Self(hash_with(encoded.as_bytes(), options))
    }

    pub fn value(self) -> u32 {
        self.0
    }

    pub fn signed(self) -> i32 {
        self.0 as i32
    }

    pub fn query(self) -> String {
        format!("{QUERY_PREFIX}{self}")
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.signed())
    }
}

impl From<Fingerprint> for u32 {
    fn from(value: Fingerprint) -> Self {
        value.0
    }
}
