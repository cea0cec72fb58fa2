//! GB 32100-2015 constants and check character computation.
//!
//! The alphabet and weights are fixed by the standard. Lookups go through a
//! table built at compile time, so nothing here is mutable or lazily
//! initialized.

/// The 31 code symbols; each symbol's index is its numeric value.
pub const ALPHABET: [char; 31] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J',
    'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'T', 'U', 'W', 'X', 'Y',
];

/// Positional weights for the first 17 characters.
pub const WEIGHTS: [u32; 17] = [1, 3, 9, 27, 19, 26, 16, 17, 20, 29, 25, 13, 8, 24, 10, 30, 28];

/// Total length of a credit code, check character included.
pub const CODE_LENGTH: usize = 18;

/// Number of characters covered by the checksum.
pub const BODY_LENGTH: usize = 17;

const MODULUS: u32 = 31;
const NOT_IN_ALPHABET: u8 = u8::MAX;

/// ASCII byte -> alphabet value, `NOT_IN_ALPHABET` for everything else.
static VALUE_TABLE: [u8; 128] = build_value_table();

const fn build_value_table() -> [u8; 128] {
    let mut table = [NOT_IN_ALPHABET; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Numeric value of `ch` in the alphabet.
///
/// Lookup is case-sensitive: lowercase letters have no value.
pub fn value_of(ch: char) -> Option<u32> {
    let idx = ch as usize;
    if idx >= VALUE_TABLE.len() {
        return None;
    }
    match VALUE_TABLE[idx] {
        NOT_IN_ALPHABET => None,
        value => Some(u32::from(value)),
    }
}

/// Whether `ch` is one of the 31 code symbols.
pub fn in_alphabet(ch: char) -> bool {
    value_of(ch).is_some()
}

/// Compute the check character for the first 17 characters of `body`.
///
/// Returns `None` if `body` is shorter than 17 characters or any of the
/// first 17 is outside the alphabet. Characters past the 17th are ignored.
pub fn check_character(body: &str) -> Option<char> {
    let mut sum = 0u32;
    let mut seen = 0;

    for (ch, weight) in body.chars().zip(WEIGHTS) {
        sum += value_of(ch)? * weight;
        seen += 1;
    }

    if seen < BODY_LENGTH {
        return None;
    }

    // A zero remainder folds onto position 0 rather than 31.
    let parity = (MODULUS - sum % MODULUS) % MODULUS;
    Some(ALPHABET[parity as usize])
}
