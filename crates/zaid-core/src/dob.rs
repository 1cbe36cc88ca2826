//! # Date-of-Birth Validation — Century-Ambiguous YYMMDD
//!
//! A two-digit birth year cannot name its century. Rather than guess, the
//! validator accepts a YYMMDD string if ANY of the 1800s, 1900s, or 2000s
//! interpretations is a real calendar date — tried in that fixed order
//! with a short-circuit OR. Age plausibility is explicitly out of scope:
//! a century-valid date from 1826 passes.
//!
//! The calendar itself (month ranges, per-month day counts, Gregorian
//! leap-year rules including the 100/400 exceptions) is delegated to
//! `chrono`. This module never reimplements it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Century prefixes tried against a two-digit year, in fixed order.
///
/// The short-circuit OR makes the current behavior order-insensitive, but
/// the order is kept stable in case disambiguation logic ever becomes
/// order-sensitive.
pub const CENTURY_PREFIXES: [u16; 3] = [18, 19, 20];

/// Returns true if (year, month, day) is a real Gregorian calendar date.
///
/// Thin wrapper over `chrono::NaiveDate::from_ymd_opt`, which enforces
/// month in [1, 12], per-month day validity, and leap-year rules.
pub fn is_valid_calendar_date(year: u16, month: u8, day: u8) -> bool {
    NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day)).is_some()
}

/// Returns true if a six-character YYMMDD string is a plausible birth
/// date in at least one century.
///
/// Fails closed unless the input is exactly six ASCII digits.
pub fn is_valid_dob(yymmdd: &str) -> bool {
    let bytes = yymmdd.as_bytes();
    if bytes.len() != 6 || !bytes.iter().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let yy = two_digits(bytes[0], bytes[1]);
    let month = two_digits(bytes[2], bytes[3]) as u8;
    let day = two_digits(bytes[4], bytes[5]) as u8;
    CENTURY_PREFIXES
        .iter()
        .any(|&century| is_valid_calendar_date(century * 100 + yy, month, day))
}

fn two_digits(hi: u8, lo: u8) -> u16 {
    u16::from(hi - b'0') * 10 + u16::from(lo - b'0')
}

/// The raw two-digit date components of an identity number.
///
/// Components stay zero-padded strings because the year is
/// century-ambiguous: `"00"` is 1800, 1900, or 2000, and this library
/// does not pick one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateComponents {
    /// Two-digit year, zero-padded (`"00"`–`"99"`).
    pub year: String,
    /// Two-digit month, zero-padded (`"01"`–`"12"`).
    pub month: String,
    /// Two-digit day, zero-padded.
    pub day: String,
}

impl DateComponents {
    /// Split a YYMMDD string into components.
    ///
    /// Returns `None` unless the string passes [`is_valid_dob()`].
    pub fn parse(yymmdd: &str) -> Option<Self> {
        if !is_valid_dob(yymmdd) {
            return None;
        }
        Some(Self {
            year: yymmdd[0..2].to_string(),
            month: yymmdd[2..4].to_string(),
            day: yymmdd[4..6].to_string(),
        })
    }

    /// Every century interpretation that is a real calendar date, in
    /// century order (1800s, 1900s, 2000s).
    ///
    /// Exposes the ambiguity instead of resolving it. Most dates yield
    /// three candidates; a leap day like `00-02-29` yields only
    /// 2000-02-29.
    pub fn candidate_dates(&self) -> Vec<NaiveDate> {
        let (Ok(yy), Ok(month), Ok(day)) = (
            self.year.parse::<u16>(),
            self.month.parse::<u32>(),
            self.day.parse::<u32>(),
        ) else {
            return Vec::new();
        };
        CENTURY_PREFIXES
            .iter()
            .filter_map(|&century| {
                NaiveDate::from_ymd_opt(i32::from(century * 100 + yy), month, day)
            })
            .collect()
    }
}
