//! MurmurHash3 (x86, 32-bit) over byte-truncated code units.
//!
//! Every input element contributes only its low 8 bits. The default tail
//! policy reads the trailing elements at fixed offsets from the end of the
//! input, which is the variant the favicon search index is keyed by.

use std::fmt;

const C1: u32 = 0xcc9e2d51;
const C2: u32 = 0x1b873593;
const R1: u32 = 15;
const R2: u32 = 13;
const M: u32 = 5;
const N: u32 = 0xe6546b64;
const FMIX1: u32 = 0x85ebca6b;
const FMIX2: u32 = 0xc2b2ae35;

/// Input element whose low 8 bits feed the hash.
pub trait CodeUnit: Copy {
    fn low_byte(self) -> u8;
}

impl CodeUnit for u8 {
    fn low_byte(self) -> u8 {
        self
    }
}

impl CodeUnit for u16 {
    fn low_byte(self) -> u8 {
        (self & 0xff) as u8
    }
}

impl CodeUnit for char {
    fn low_byte(self) -> u8 {
        (u32::from(self) & 0xff) as u8
    }
}

/// Which elements feed the final partial block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TailPolicy {
    /// `elem[L-1] << 16`, `elem[L-2] << 8`, `elem[L-3]`, cumulatively by tail
    /// length. Offsets before the start of the input read as zero.
    #[default]
    Literal,
    /// Standard MurmurHash3 tail: the 1..=3 elements after the last block.
    Canonical,
}

impl TailPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Literal => "literal",
            Self::Canonical => "canonical",
        }
    }
}

impl fmt::Display for TailPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hash options shared by the command and engine layers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HashOptions {
    /// Initial accumulator value.
    pub seed: u32,
    pub tail: TailPolicy,
}

impl HashOptions {
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }
}

/// Hash raw bytes with the literal tail policy.
pub fn hash(input: &[u8], seed: u32) -> u32 {
    hash_with(input, HashOptions::with_seed(seed))
}

/// Hash the UTF-16 code units of `input`, one element per code unit.
pub fn hash_str(input: &str, seed: u32) -> u32 {
    let units: Vec<u16> = input.encode_utf16().collect();
    hash_with(&units, HashOptions::with_seed(seed))
}

pub fn hash_with<T: CodeUnit>(input: &[T], options: HashOptions) -> u32 {
    let mut hash = options.seed;

    let blocks = input.chunks_exact(4);
    let rest = blocks.remainder();
    for block in blocks {
        let block = u32::from_le_bytes([
            block[0].low_byte(),
            block[1].low_byte(),
            block[2].low_byte(),
            block[3].low_byte(),
        ]);
        hash ^= mix_block(block);
        hash = hash.rotate_left(R2).wrapping_mul(M).wrapping_add(N);
    }

    let tail = match options.tail {
        TailPolicy::Literal => literal_tail(input),
        TailPolicy::Canonical => canonical_tail(rest),
    };
    if let Some(tail) = tail {
        hash ^= mix_block(tail);
    }

    finalize(hash, input.len())
}

fn mix_block(block: u32) -> u32 {
    block.wrapping_mul(C1).rotate_left(R1).wrapping_mul(C2)
}

fn literal_tail<T: CodeUnit>(input: &[T]) -> Option<u32> {
    let len = input.len();
    let back = |offset: usize| {
        len.checked_sub(offset)
            .and_then(|index| input.get(index))
            .map_or(0, |unit| u32::from(unit.low_byte()))
    };

    match len % 4 {
        0 => None,
        1 => Some(back(3)),
        2 => Some((back(2) << 8) ^ back(3)),
        _ => Some((back(1) << 16) ^ (back(2) << 8) ^ back(3)),
    }
}

fn canonical_tail<T: CodeUnit>(rest: &[T]) -> Option<u32> {
    let byte = |unit: &T| u32::from(unit.low_byte());
    match rest {
        [a] => Some(byte(a)),
        [a, b] => Some((byte(b) << 8) ^ byte(a)),
        [a, b, c] => Some((byte(c) << 16) ^ (byte(b) << 8) ^ byte(a)),
        _ => None,
    }
}

fn finalize(mut hash: u32, len: usize) -> u32 {
    // length is mixed in modulo 2^32
    hash ^= len as u32;
    hash ^= hash >> 16;
    hash = hash.wrapping_mul(FMIX1);
    hash ^= hash >> 13;
    hash = hash.wrapping_mul(FMIX2);
    hash ^= hash >> 16;
    hash
}
