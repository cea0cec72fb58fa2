//! Validation Engine
//!
//! Single-code validation: structure first, then the checksum.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::standard::{check_character, in_alphabet, CODE_LENGTH};

/// Two symbols, six region digits, ten symbols (check character included).
static CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9A-HJ-NPQRTUWXY]{2}[0-9]{6}[0-9A-HJ-NPQRTUWXY]{10}$")
        .expect("credit code pattern is a valid regex")
});

/// Outcome of validating one candidate code
///
/// Variants are checked in declaration order after `Valid`: a code with the
/// wrong length is never reported for its characters, and a code with bad
/// characters is never reported for its checksum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationOutcome {
    Valid,
    InvalidLength,
    /// Pattern mismatch. `offending` lists the distinct upper-cased
    /// characters outside the alphabet in order of appearance; it is empty
    /// when every character is a code symbol but sits in the wrong position.
    InvalidCharacter { offending: Vec<char> },
    InvalidChecksum { expected: char },
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    /// Human-readable rejection reason, `None` for valid codes
    pub fn reason(&self) -> Option<String> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::InvalidLength => {
                Some(format!("length is not {CODE_LENGTH} characters."))
            }
            ValidationOutcome::InvalidCharacter { offending } if offending.is_empty() => {
                Some("does not match the required format.".to_string())
            }
            ValidationOutcome::InvalidCharacter { offending } => {
                let listed: Vec<String> = offending.iter().map(char::to_string).collect();
                Some(format!("contains invalid characters: {}", listed.join(", ")))
            }
            ValidationOutcome::InvalidChecksum { expected } => {
                Some(format!("check character mismatch, expected '{expected}'"))
            }
        }
    }
}

/// Validate a single candidate code
///
/// Matching is case-sensitive for all 18 characters: a lowercase letter
/// anywhere fails the pattern before the checksum is computed.
pub fn validate(code: &str) -> ValidationOutcome {
    if code.chars().count() != CODE_LENGTH {
        return ValidationOutcome::InvalidLength;
    }

    if !CODE_PATTERN.is_match(code) {
        return ValidationOutcome::InvalidCharacter {
            offending: offending_characters(code),
        };
    }

    // Unreachable while the pattern and the alphabet agree
    let Some(expected) = check_character(code) else {
        return ValidationOutcome::InvalidCharacter {
            offending: offending_characters(code),
        };
    };

    // Unchanged today: the pattern only admits uppercase check characters
    let actual = code.chars().last().map(|ch| ch.to_ascii_uppercase());
    if actual == Some(expected) {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::InvalidChecksum { expected }
    }
}

/// Convenience predicate over [`validate`]
pub fn is_valid(code: &str) -> bool {
    validate(code).is_valid()
}

/// Distinct upper-cased characters of `code` that are not code symbols
fn offending_characters(code: &str) -> Vec<char> {
    let mut offending = Vec::new();
    for ch in code.chars().flat_map(char::to_uppercase) {
        if !in_alphabet(ch) && !offending.contains(&ch) {
            offending.push(ch);
        }
    }
    offending
}
