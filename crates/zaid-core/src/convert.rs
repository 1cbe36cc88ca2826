//! # Legacy Modernization & Collision Detection
//!
//! Pre-reform identity numbers carry a race-indicator digit in 0–7.
//! [`convert_legacy_to_modern()`] rewrites that digit to 8 or 9 and
//! recomputes the Luhn check digit. Two numbers that differ only in race
//! indicator and checksum identify the same person, so
//! [`would_be_duplicates()`] compares the first eleven digits — the
//! registry resolves such collisions by the race indicator alone, never
//! the checksum.

use crate::identity::{IdentityNumber, CHECK_INDEX, RACE_INDEX};
use crate::luhn;
use crate::validate::{validate, ValidationOutcome};

/// Digits that identify a person: date, sequence, citizenship.
const COLLISION_PREFIX_LEN: usize = 11;

/// Rewrite a legacy race indicator to a modern one.
///
/// `target_indicator` must be 8 or 9. The input must come back fully
/// `Valid` from the pipeline — a citizenship violation or bad checksum
/// rejects. Numbers that are already modern are returned unchanged, so
/// the operation is idempotent.
pub fn convert_legacy_to_modern(id: &str, target_indicator: u8) -> Option<IdentityNumber> {
    if !matches!(target_indicator, 8 | 9) {
        return None;
    }
    if validate(id) != ValidationOutcome::Valid {
        return None;
    }
    let parsed = IdentityNumber::parse(id).ok()?;
    if !parsed.is_legacy_format() {
        return Some(parsed);
    }
    let mut digits = parsed.as_str().as_bytes().to_vec();
    digits[RACE_INDEX] = b'0' + target_indicator;
    // The rewritten race digit is now the rightmost of the 12-digit base,
    // so check-digit doubling starts with it.
    let base = std::str::from_utf8(&digits[..CHECK_INDEX]).ok()?;
    let check = luhn::check_digit(base)?;
    digits[CHECK_INDEX] = b'0' + check;
    let converted = String::from_utf8(digits).ok()?;
    IdentityNumber::parse(&converted).ok()
}

/// True when two numbers collide on their identifying prefix.
///
/// Both inputs are sanitized; anything that is not exactly 13 digits is
/// never a duplicate of anything. The comparison covers the first eleven
/// digits only — race indicator and checksum are exactly the fields a
/// legacy/modern pair differs in.
pub fn would_be_duplicates(id1: &str, id2: &str) -> bool {
    let (Ok(a), Ok(b)) = (
        IdentityNumber::parse_lenient(id1),
        IdentityNumber::parse_lenient(id2),
    ) else {
        return false;
    };
    a.as_str()[..COLLISION_PREFIX_LEN] == b.as_str()[..COLLISION_PREFIX_LEN]
}
