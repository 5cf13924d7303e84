//! Errors for the fallible range operations.
//!
//! Range arithmetic itself is total over IEEE-754 values and never fails;
//! these only surface from text parsing and the opt-in checked division.

use thiserror::Error;

/// Errors produced by fallible range operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("Range literal must be enclosed in brackets: {0}")]
    MissingBrackets(String),

    #[error("Range literal is missing the '...' separator: {0}")]
    MissingSeparator(String),

    #[error("Invalid number format: {0}")]
    InvalidNumber(String),

    #[error("Division of range by zero")]
    DivisionByZero,
}

/// Result type for fallible range operations.
pub type RangeResult<T> = Result<T, RangeError>;
