//! # Identity Number — Validated 13-Digit Newtype
//!
//! `IdentityNumber` wraps a sanitized, exactly-13-digit string. Once
//! constructed, field accessors can index positions without re-checking
//! length — the invariant is enforced at the constructor and the inner
//! string is private.
//!
//! ## Field layout (0-indexed)
//!
//! | Positions | Field |
//! |-----------|-------|
//! | 0–5  | YYMMDD date of birth |
//! | 6–9  | sequence number (gender-encoding) |
//! | 10   | citizenship digit (0, 1, 2) |
//! | 11   | race indicator (0–7 legacy, 8–9 modern) |
//! | 12   | Luhn check digit |
//!
//! ## Construction
//!
//! - [`IdentityNumber::parse()`] — strict: sanitize, then length, then
//!   citizenship digit, in that order. Length runs first because the
//!   citizenship check indexes position 10.
//! - [`IdentityNumber::parse_lenient()`] — length only. The field
//!   extractors use this: they must decode fields of numbers whose
//!   citizenship digit is out of range.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{StructuralError, ZaidError};
use crate::sanitize::sanitize;

/// Exact digit length of an identity number.
pub const ID_LENGTH: usize = 13;

/// Byte range of the YYMMDD date of birth.
pub const DOB_RANGE: std::ops::Range<usize> = 0..6;

/// Byte range of the four-digit sequence number.
pub const SEQUENCE_RANGE: std::ops::Range<usize> = 6..10;

/// Position of the citizenship digit.
pub const CITIZENSHIP_INDEX: usize = 10;

/// Position of the race-indicator digit.
pub const RACE_INDEX: usize = 11;

/// Position of the Luhn check digit.
pub const CHECK_INDEX: usize = 12;

/// Sequence numbers below this threshold encode Female; at or above, Male.
pub const MALE_MIN_SEQUENCE: u16 = 5000;

/// A sanitized, exactly-13-digit South African identity number.
///
/// The invariant is purely structural (13 ASCII digits). An
/// `IdentityNumber` is not necessarily *valid* — date and checksum are
/// the pipeline's concern, and `parse_lenient` does not even look at the
/// citizenship digit. Serde deserialization re-validates through the
/// lenient constructor, matching the structural invariant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IdentityNumber(String);

impl IdentityNumber {
    /// Sanitize and structurally validate a raw string.
    ///
    /// # Errors
    ///
    /// - [`StructuralError::WrongLength`] unless sanitization leaves
    ///   exactly 13 digits.
    /// - [`StructuralError::InvalidCitizenshipDigit`] unless position 10
    ///   is `0`, `1`, or `2`.
    pub fn parse(raw: &str) -> Result<Self, StructuralError> {
        let id = Self::parse_lenient(raw)?;
        let digit = id.citizenship_digit();
        if !matches!(digit, '0' | '1' | '2') {
            return Err(StructuralError::InvalidCitizenshipDigit { digit });
        }
        Ok(id)
    }

    /// Sanitize and check length only.
    ///
    /// Accepts numbers whose citizenship digit is out of range — the
    /// field extractors decode those too.
    ///
    /// # Errors
    ///
    /// Returns [`StructuralError::WrongLength`] unless sanitization
    /// leaves exactly 13 digits.
    pub fn parse_lenient(raw: &str) -> Result<Self, StructuralError> {
        let digits = sanitize(raw);
        if digits.len() != ID_LENGTH {
            return Err(StructuralError::WrongLength { len: digits.len() });
        }
        Ok(Self(digits.into_owned()))
    }

    /// The 13 digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The YYMMDD date-of-birth digits.
    pub fn dob_digits(&self) -> &str {
        &self.0[DOB_RANGE]
    }

    /// The four sequence-number digits, zero-padded.
    pub fn sequence_digits(&self) -> &str {
        &self.0[SEQUENCE_RANGE]
    }

    /// The four-digit sequence number as an integer.
    ///
    /// Gender is decided numerically: `"0499"` is 499, which is below the
    /// male threshold. A lexicographic comparison would get this wrong.
    pub fn sequence_number(&self) -> u16 {
        self.sequence_digits()
            .bytes()
            .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'))
    }

    /// The citizenship digit at position 10.
    pub fn citizenship_digit(&self) -> char {
        self.0.as_bytes()[CITIZENSHIP_INDEX] as char
    }

    /// The race-indicator digit at position 11.
    pub fn race_digit(&self) -> char {
        self.0.as_bytes()[RACE_INDEX] as char
    }

    /// The Luhn check digit at position 12.
    pub fn check_digit(&self) -> char {
        self.0.as_bytes()[CHECK_INDEX] as char
    }

    /// Gender encoded by the sequence number.
    pub fn gender(&self) -> Gender {
        if self.sequence_number() < MALE_MIN_SEQUENCE {
            Gender::Female
        } else {
            Gender::Male
        }
    }

    /// Citizenship status, if the citizenship digit is in range.
    pub fn citizenship(&self) -> Option<Citizenship> {
        Citizenship::from_digit(self.citizenship_digit())
    }

    /// True when the race-indicator digit is in the legacy 0–7 band.
    pub fn is_legacy_format(&self) -> bool {
        matches!(self.race_digit(), '0'..='7')
    }
}

impl std::fmt::Display for IdentityNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for IdentityNumber {
    type Err = ZaidError;

    /// Strict parse: length, then citizenship digit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).map_err(ZaidError::from)
    }
}

impl TryFrom<String> for IdentityNumber {
    type Error = StructuralError;

    /// Lenient: the serde representation carries the structural invariant
    /// (13 digits), nothing more.
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_lenient(&value)
    }
}

impl From<IdentityNumber> for String {
    fn from(id: IdentityNumber) -> Self {
        id.0
    }
}

/// Gender encoded by the sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Sequence number 0000–4999.
    Female,
    /// Sequence number 5000–9999.
    Male,
}

impl Gender {
    /// Returns the snake_case string identifier for this gender.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ZaidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "female" => Ok(Self::Female),
            "male" => Ok(Self::Male),
            other => Err(ZaidError::Parse(format!("unknown gender: {other:?}"))),
        }
    }
}

/// Citizenship status encoded by the digit at position 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Citizenship {
    /// Digit `0` — South African citizen.
    Citizen,
    /// Digit `1` — permanent resident.
    PermanentResident,
    /// Digit `2` — refugee.
    Refugee,
}

impl Citizenship {
    /// Decode a citizenship digit; `None` for anything outside {0, 1, 2}.
    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '0' => Some(Self::Citizen),
            '1' => Some(Self::PermanentResident),
            '2' => Some(Self::Refugee),
            _ => None,
        }
    }

    /// The digit this status is encoded as.
    pub fn as_digit(&self) -> char {
        match self {
            Self::Citizen => '0',
            Self::PermanentResident => '1',
            Self::Refugee => '2',
        }
    }

    /// Returns the snake_case string identifier for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Citizen => "citizen",
            Self::PermanentResident => "permanent_resident",
            Self::Refugee => "refugee",
        }
    }
}

impl std::fmt::Display for Citizenship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Citizenship {
    type Err = ZaidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "citizen" => Ok(Self::Citizen),
            "permanent_resident" => Ok(Self::PermanentResident),
            "refugee" => Ok(Self::Refugee),
            other => Err(ZaidError::Parse(format!("unknown citizenship: {other:?}"))),
        }
    }
}
