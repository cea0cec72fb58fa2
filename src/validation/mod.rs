//! Validation Engine
//!
//! Single-code validation and batch classification, kept free of any I/O.

pub mod batch;
pub mod engine;

pub use batch::{validate_batch, validate_codes, BatchError, BatchResult, InvalidCode};
pub use engine::{is_valid, validate, ValidationOutcome};
