//! USCC Validator
//!
//! Validation of Chinese Unified Social Credit Codes (GB 32100-2015).
//!
//! This library provides:
//! - Tokenizing free-form text into candidate codes
//! - Structural and checksum validation with rejection reasons
//! - Batch classification into valid and invalid codes
//! - Text and JSON reports, plus configuration for the `uscc-check` binary

pub mod config;
pub mod report;
pub mod standard;
pub mod tokenizer;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use standard::check_character;
pub use tokenizer::tokenize;
pub use validation::{is_valid, validate, validate_batch, BatchError, BatchResult, ValidationOutcome};
