pub mod encode;
pub mod fingerprint;
pub mod mmh3;
