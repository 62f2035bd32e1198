use favhash::{HashOptions, TailPolicy, hash, hash_str, hash_with};

const LITERAL_VECTORS: [(&str, u32, u32); 9] = [
    ("", 0, 0),
    ("", 1, 1364076727),
    ("a", 0, 1364076727),
    ("ab", 0, 1944807004),
    ("abc", 0, 3017643002),
    ("test", 0, 3127628307),
    ("abcde", 42, 3841889064),
    ("abcdef", 0, 1801503219),
    ("sol_log_", 0, 544561597),
];

#[test]
fn literal_vectors_match_reference_run() {
    for (input, seed, expected) in LITERAL_VECTORS {
        assert_eq!(hash(input.as_bytes(), seed), expected, "input {input:?} seed {seed}");
        assert_eq!(hash_str(input, seed), expected, "utf16 input {input:?} seed {seed}");
    }
}

#[test]
fn literal_and_canonical_agree_without_short_tail() {
    let canonical = HashOptions {
        seed: 0,
        tail: TailPolicy::Canonical,
    };
    for input in ["", "test", "abc", "abcdefg", "hello world", "sol_log_"] {
        assert_eq!(
            hash(input.as_bytes(), 0),
            hash_with(input.as_bytes(), canonical),
            "input {input:?}"
        );
    }
}

#[test]
fn literal_and_canonical_diverge_on_short_tails() {
    let canonical = HashOptions {
        seed: 0,
        tail: TailPolicy::Canonical,
    };
    for input in ["a", "ab", "abcde", "abcdef", "Hello, world!"] {
        assert_ne!(
            hash(input.as_bytes(), 0),
            hash_with(input.as_bytes(), canonical),
            "input {input:?}"
        );
    }
}

#[test]
fn default_options_use_zero_seed_and_literal_tail() {
    assert_eq!(
        hash_with(b"abcde".as_slice(), HashOptions::default()),
        hash(b"abcde", 0)
    );
}
