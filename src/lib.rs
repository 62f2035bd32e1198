//! Favicon fingerprinting with the MurmurHash3 variant used by the
//! `http.favicon.hash` search index.

pub mod cmd;
pub mod domain;
pub mod engine;
pub mod io;

pub use engine::fingerprint::Fingerprint;
pub use engine::mmh3::{HashOptions, TailPolicy, hash, hash_str, hash_with};
