//! # Field Extractors — Derived Read-Only Views
//!
//! Free functions that decode individual fields from a raw identity-number
//! string. Every extractor re-sanitizes its input and gates on the
//! 13-digit length only, so they work on numbers that would fail the full
//! pipeline — an out-of-range citizenship digit does not stop gender
//! extraction. Absence is the error signal: malformed input yields `None`
//! or `false`, never a panic.
//!
//! [`extract_info()`] is the exception: it reports fields only for
//! numbers the full pipeline accepts, because a composite view of an
//! invalid number would invite misuse.

use serde::{Deserialize, Serialize};

use crate::dob::DateComponents;
use crate::identity::{Citizenship, Gender, IdentityNumber};
use crate::validate::{validate, ValidationOutcome};

/// Everything derivable from one identity number in a single call.
///
/// Built fresh per call, never cached. When the full validation outcome
/// is anything but `Valid`, `valid` is `false` and every derived field is
/// empty — partially-decoded views of invalid numbers are not offered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedInfo {
    /// True only when the full pipeline returns `Valid`.
    pub valid: bool,
    /// Date-of-birth components.
    pub date_components: Option<DateComponents>,
    /// Gender from the sequence number.
    pub gender: Option<Gender>,
    /// Citizenship status.
    pub citizenship: Option<Citizenship>,
    /// True when the race indicator is in the legacy 0–7 band.
    pub is_legacy: bool,
    /// The raw race-indicator digit.
    pub race_indicator: Option<char>,
}

/// Gender from the sequence number (positions 6–9).
///
/// `None` unless the input sanitizes to exactly 13 digits.
pub fn extract_gender(id: &str) -> Option<Gender> {
    IdentityNumber::parse_lenient(id)
        .ok()
        .map(|id| id.gender())
}

/// Citizenship status from the digit at position 10.
///
/// `None` for wrong-length input or a digit outside {0, 1, 2}.
pub fn extract_citizenship(id: &str) -> Option<Citizenship> {
    IdentityNumber::parse_lenient(id)
        .ok()
        .and_then(|id| id.citizenship())
}

/// True when the number is 13 digits and its race indicator is 0–7.
///
/// Wrong-length input is not legacy — it is nothing.
pub fn is_legacy(id: &str) -> bool {
    IdentityNumber::parse_lenient(id).map_or(false, |id| id.is_legacy_format())
}

/// Date-of-birth components, only when the encoded date passes
/// century-ambiguous validation.
pub fn extract_date_components(id: &str) -> Option<DateComponents> {
    let id = IdentityNumber::parse_lenient(id).ok()?;
    DateComponents::parse(id.dob_digits())
}

/// Decode everything at once.
///
/// Derived fields are populated only when the full pipeline returns
/// `Valid`; both `Invalid` and `CitizenshipConstraintViolated` yield the
/// all-empty default.
pub fn extract_info(id: &str) -> ExtractedInfo {
    if validate(id) != ValidationOutcome::Valid {
        return ExtractedInfo::default();
    }
    // The pipeline accepted it, so the lenient parse cannot fail.
    let Ok(parsed) = IdentityNumber::parse_lenient(id) else {
        return ExtractedInfo::default();
    };
    ExtractedInfo {
        valid: true,
        date_components: DateComponents::parse(parsed.dob_digits()),
        gender: Some(parsed.gender()),
        citizenship: parsed.citizenship(),
        is_legacy: parsed.is_legacy_format(),
        race_indicator: Some(parsed.race_digit()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- gender ----

    #[test]
    fn test_extract_gender_boundary() {
        assert_eq!(extract_gender("8001014999089"), Some(Gender::Female));
        assert_eq!(extract_gender("8001015000083"), Some(Gender::Male));
    }

    #[test]
    fn test_extract_gender_numeric_comparison() {
        // Sequence "0499" is 499 as an integer — female. A string
        // comparison against "5000" would misclassify it.
        assert_eq!(extract_gender("8001010499085"), Some(Gender::Female));
    }

    #[test]
    fn test_extract_gender_ignores_citizenship() {
        // Extractors gate on length only.
        assert_eq!(extract_gender("8001015009387"), Some(Gender::Male));
    }

    #[test]
    fn test_extract_gender_malformed() {
        assert_eq!(extract_gender(""), None);
        assert_eq!(extract_gender("870110580008"), None);
        assert_eq!(extract_gender("no digits here"), None);
    }

    // ---- citizenship ----

    #[test]
    fn test_extract_citizenship_all_values() {
        assert_eq!(
            extract_citizenship("8001015009087"),
            Some(Citizenship::Citizen)
        );
        assert_eq!(
            extract_citizenship("8001015009186"),
            Some(Citizenship::PermanentResident)
        );
        assert_eq!(
            extract_citizenship("8001015009285"),
            Some(Citizenship::Refugee)
        );
    }

    #[test]
    fn test_extract_citizenship_out_of_range() {
        assert_eq!(extract_citizenship("8001015009387"), None);
        assert_eq!(extract_citizenship("8001015009987"), None);
    }

    // ---- legacy flag ----

    #[test]
    fn test_is_legacy() {
        assert!(is_legacy("8001015009004"));
        assert!(is_legacy("8001015009074"));
        assert!(!is_legacy("8001015009087"));
        assert!(!is_legacy("8001015009095"));
    }

    #[test]
    fn test_is_legacy_malformed_is_false() {
        assert!(!is_legacy(""));
        assert!(!is_legacy("800101500900"));
    }

    // ---- date components ----

    #[test]
    fn test_extract_date_components() {
        let c = extract_date_components("8001015009087").unwrap();
        assert_eq!((c.year.as_str(), c.month.as_str(), c.day.as_str()), ("80", "01", "01"));
    }

    #[test]
    fn test_extract_date_components_leading_zeros() {
        let c = extract_date_components("0002295009084").unwrap();
        assert_eq!((c.year.as_str(), c.month.as_str(), c.day.as_str()), ("00", "02", "29"));
    }

    #[test]
    fn test_extract_date_components_invalid_date() {
        assert_eq!(extract_date_components("8013015009082"), None);
        assert_eq!(extract_date_components("0102295009087"), None);
    }

    // ---- composite ----

    #[test]
    fn test_extract_info_valid_modern() {
        let info = extract_info("8001015009087");
        assert!(info.valid);
        assert_eq!(info.gender, Some(Gender::Male));
        assert_eq!(info.citizenship, Some(Citizenship::Citizen));
        assert!(!info.is_legacy);
        assert_eq!(info.race_indicator, Some('8'));
        let c = info.date_components.unwrap();
        assert_eq!((c.year.as_str(), c.month.as_str(), c.day.as_str()), ("80", "01", "01"));
    }

    #[test]
    fn test_extract_info_valid_legacy() {
        let info = extract_info("8001015009004");
        assert!(info.valid);
        assert!(info.is_legacy);
        assert_eq!(info.race_indicator, Some('0'));
    }

    #[test]
    fn test_extract_info_invalid_is_empty() {
        assert_eq!(extract_info("8001015009088"), ExtractedInfo::default());
        assert_eq!(extract_info("870110580008"), ExtractedInfo::default());
    }

    #[test]
    fn test_extract_info_citizenship_violation_is_empty() {
        // Both non-Valid outcomes collapse to the same empty view.
        assert_eq!(extract_info("8001015009387"), ExtractedInfo::default());
    }

    #[test]
    fn test_extract_info_serde_roundtrip() {
        let info = extract_info("8001015009087");
        let json = serde_json::to_string(&info).unwrap();
        let parsed: ExtractedInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(info, parsed);
    }
}
