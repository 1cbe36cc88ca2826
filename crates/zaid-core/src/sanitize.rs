//! # Sanitizer — ASCII-Digit Extraction
//!
//! Strips every character that is not an ASCII digit `0`-`9` from an
//! untrusted input string. This is the sole entry gate of the pipeline:
//! every downstream stage operates on the output of [`sanitize()`] and can
//! therefore assume a well-formed (if possibly wrong-length) digit string.
//!
//! ## Design
//!
//! Non-ASCII decimal digits (Arabic-Indic `٣`, full-width `３`, etc.) are
//! NOT digits here. The identity-number format is ASCII-only, so Unicode
//! digit glyphs are stripped like any other noise rather than
//! transliterated.
//!
//! Total function: any input — empty strings, embedded NULs, pathological
//! Unicode, multi-megabyte garbage — maps to a (possibly empty) digit
//! string in one linear pass, with no recursion and no allocation beyond
//! the output itself.

use std::borrow::Cow;

/// Remove every character that is not an ASCII digit.
///
/// Returns a borrowed slice when the input is already all ASCII digits,
/// allocating only when there is something to strip.
pub fn sanitize(input: &str) -> Cow<'_, str> {
    if input.bytes().all(|b| b.is_ascii_digit()) {
        Cow::Borrowed(input)
    } else {
        Cow::Owned(input.chars().filter(char::is_ascii_digit).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_all_digit_input_borrows() {
        let input = "8001015009087";
        assert!(matches!(sanitize(input), Cow::Borrowed(_)));
        assert_eq!(sanitize(input), input);
    }

    #[test]
    fn test_strips_separators() {
        assert_eq!(sanitize("800101 5009 08 7"), "8001015009087");
        assert_eq!(sanitize("800101-5009-087"), "8001015009087");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_no_digits_at_all() {
        assert_eq!(sanitize("not an id"), "");
    }

    #[test]
    fn test_embedded_nul() {
        assert_eq!(sanitize("80\u{0}01"), "8001");
    }

    #[test]
    fn test_unicode_digits_are_not_digits() {
        // Arabic-Indic three, full-width three, Devanagari three: all
        // stripped, never transliterated.
        assert_eq!(sanitize("٣３३123"), "123");
    }

    #[test]
    fn test_mixed_garbage() {
        assert_eq!(sanitize("id: 87x01!10\n5800•08\t4"), "8701105800084");
    }

    proptest! {
        /// Output contains only ASCII digits, for any input.
        #[test]
        fn sanitize_output_is_all_digits(s in any::<String>()) {
            prop_assert!(sanitize(&s).bytes().all(|b| b.is_ascii_digit()));
        }

        /// Sanitization is idempotent.
        #[test]
        fn sanitize_idempotent(s in any::<String>()) {
            let once = sanitize(&s).into_owned();
            let twice = sanitize(&once);
            prop_assert_eq!(twice.as_ref(), once.as_str());
        }

        /// All-digit strings are fixed points.
        #[test]
        fn digit_strings_pass_through(s in "[0-9]{0,40}") {
            let out = sanitize(&s);
            prop_assert_eq!(out.as_ref(), s.as_str());
        }
    }
}
