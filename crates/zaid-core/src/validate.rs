//! # Validation Pipeline — Tri-State Outcome
//!
//! The primary entry point [`validate()`] runs the hard-gate sequence:
//! sanitize, length, citizenship digit, date of birth, Luhn checksum.
//! Each gate is terminal — the first one to fail names the outcome.
//!
//! ## Outcome ordering invariant
//!
//! An input with BOTH an out-of-range citizenship digit and an impossible
//! date reports `CitizenshipConstraintViolated`, not `Invalid`: the
//! citizenship gate runs strictly before the date gate. Whether that
//! ordering is product intent or a historical accident is an open
//! question upstream; this implementation preserves the observed
//! behavior. Likewise, an impossible date reports `Invalid` even when the
//! checksum would pass.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::dob::is_valid_dob;
use crate::error::{StructuralError, ZaidError};
use crate::identity::IdentityNumber;
use crate::luhn::luhn_valid;

/// Result of validating one identity number.
///
/// A deliberate three-variant enum, not a boolean. The system this
/// replaces modeled the third state as a nullable boolean; downstream
/// consumers depend on the distinction, so it is kept as a first-class
/// variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationOutcome {
    /// Structure, date of birth, and checksum all pass.
    Valid,
    /// Wrong length, impossible date, or failed checksum.
    Invalid,
    /// Citizenship digit outside {0, 1, 2}. Date and checksum were never
    /// evaluated.
    CitizenshipConstraintViolated,
}

impl ValidationOutcome {
    /// True only for [`ValidationOutcome::Valid`].
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns the snake_case string identifier for this outcome.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Invalid => "invalid",
            Self::CitizenshipConstraintViolated => "citizenship_constraint_violated",
        }
    }
}

impl std::fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationOutcome {
    type Err = ZaidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "valid" => Ok(Self::Valid),
            "invalid" => Ok(Self::Invalid),
            "citizenship_constraint_violated" => Ok(Self::CitizenshipConstraintViolated),
            other => Err(ZaidError::Parse(format!(
                "unknown validation outcome: {other:?}"
            ))),
        }
    }
}

/// Validate a raw identity-number string.
///
/// The input may carry spaces, hyphens, or arbitrary noise — it is
/// sanitized to digits first. Pure function: no state, no I/O, linear in
/// input length, and safe on any input including pathological Unicode.
pub fn validate(raw: &str) -> ValidationOutcome {
    let id = match IdentityNumber::parse(raw) {
        Ok(id) => id,
        Err(StructuralError::WrongLength { .. }) => return ValidationOutcome::Invalid,
        Err(StructuralError::InvalidCitizenshipDigit { .. }) => {
            return ValidationOutcome::CitizenshipConstraintViolated
        }
    };
    if !is_valid_dob(id.dob_digits()) {
        return ValidationOutcome::Invalid;
    }
    if luhn_valid(id.as_str()) {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::Invalid
    }
}
