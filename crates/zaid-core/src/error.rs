//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types for the ZA ID library. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! Errors here cover construction and parsing only. The primary validation
//! entry point does not use `Result` at all — its tri-state
//! `ValidationOutcome` is the success/failure encoding, and the field
//! extractors signal absence with `Option`. Garbage input is never an
//! error condition; it is an `Invalid` outcome or a `None`.

use thiserror::Error;

/// Top-level error type for the ZA ID library.
#[derive(Error, Debug)]
pub enum ZaidError {
    /// Structural validation of an identity number failed.
    #[error("structural error: {0}")]
    Structure(#[from] StructuralError),

    /// A string did not parse as one of the public enums.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Error from structural validation of a sanitized digit string.
///
/// Length is checked strictly before the citizenship digit: the
/// citizenship check indexes position 10, which only exists once the
/// length gate has passed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    /// The sanitized input is not exactly 13 digits.
    #[error("identity number must be exactly 13 digits, got {len}")]
    WrongLength {
        /// Number of digits after sanitization.
        len: usize,
    },

    /// The citizenship digit (position 10) is outside {0, 1, 2}.
    #[error("citizenship digit must be 0, 1, or 2, got {digit:?}")]
    InvalidCitizenshipDigit {
        /// The offending digit.
        digit: char,
    },
}
