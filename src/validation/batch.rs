//! Batch Validation
//!
//! Tokenizes free-form text and partitions the candidates into valid and
//! invalid codes. Malformed candidates are data, not errors; the only
//! batch-level failure is an input with no candidates at all.

use serde::{Serialize, Serializer};
use thiserror::Error;

use super::engine::{validate, ValidationOutcome};
use crate::tokenizer::tokenize;

/// Batch-level failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BatchError {
    #[error("no valid codes found in input")]
    EmptyInput,
}

impl Serialize for BatchError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A rejected candidate with its diagnosis
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidCode {
    /// Position of the candidate in the tokenized input
    pub index: usize,
    pub code: String,
    pub outcome: ValidationOutcome,
    pub reason: String,
}

/// Result of validating a batch of candidates
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BatchResult {
    pub total: usize,
    pub valid: Vec<String>,
    pub invalid: Vec<InvalidCode>,
    pub error: Option<BatchError>,
}

impl BatchResult {
    fn empty_input() -> Self {
        Self {
            error: Some(BatchError::EmptyInput),
            ..Self::default()
        }
    }

    /// True when no candidates could be extracted
    pub fn is_empty_input(&self) -> bool {
        self.error == Some(BatchError::EmptyInput)
    }

    /// True when candidates were found and every one of them is valid
    pub fn all_valid(&self) -> bool {
        self.error.is_none() && self.invalid.is_empty()
    }
}

/// Validate every candidate found in `text`
pub fn validate_batch(text: &str) -> BatchResult {
    let codes = tokenize(text);
    if codes.is_empty() {
        log::debug!("no candidates extracted from {} bytes of input", text.len());
        return BatchResult::empty_input();
    }

    validate_codes(codes)
}

/// Validate already tokenized candidates, keeping their order
pub fn validate_codes(codes: Vec<String>) -> BatchResult {
    if codes.is_empty() {
        return BatchResult::empty_input();
    }

    let mut result = BatchResult {
        total: codes.len(),
        ..BatchResult::default()
    };

    for (index, code) in codes.into_iter().enumerate() {
        let outcome = validate(&code);
        match outcome.reason() {
            None => result.valid.push(code),
            Some(reason) => {
                log::trace!("rejected {code}: {reason}");
                result.invalid.push(InvalidCode {
                    index,
                    code,
                    outcome,
                    reason,
                });
            }
        }
    }

    log::debug!(
        "validated {} candidates: {} valid, {} invalid",
        result.total,
        result.valid.len(),
        result.invalid.len()
    );

    result
}
