pub mod encode;
pub mod favicon;
pub mod hash;
