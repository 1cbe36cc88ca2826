//! # Luhn Checksum Engine
//!
//! Classic Luhn mod-10 over an all-digit string: walking right to left,
//! the rightmost digit is taken as-is, every second digit is doubled, and
//! doubled values above 9 are reduced by subtracting 9. The number is
//! valid when the sum is divisible by 10.
//!
//! [`luhn_valid()`] checks a full number that already carries its check
//! digit. [`check_digit()`] computes the complement for a base that does
//! not yet carry one — needed when the legacy race-indicator digit is
//! rewritten and the checksum must be recomputed.
//!
//! The check is purely positional from the right, so it works on any
//! length and leading zeros never change the result.

/// Double a single digit and reduce it back into one digit.
///
/// Subtracting 9 from a doubled value above 9 is equivalent to summing
/// its two decimal digits.
fn double_and_reduce(d: u32) -> u32 {
    let doubled = d * 2;
    if doubled > 9 {
        doubled - 9
    } else {
        doubled
    }
}

/// Returns true if the digit string passes the Luhn mod-10 check.
///
/// Fails closed: an empty string or any non-digit character yields
/// `false`.
pub fn luhn_valid(digits: &str) -> bool {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let sum: u32 = digits
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let d = u32::from(b - b'0');
            if i % 2 == 1 {
                double_and_reduce(d)
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

/// Compute the Luhn check digit for a base that does not yet include one.
///
/// The rightmost base digit sits immediately left of the future check
/// digit, so doubling starts with it. Returns `None` if the base is empty
/// or contains a non-digit.
pub fn check_digit(base: &str) -> Option<u8> {
    if base.is_empty() || !base.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let sum: u32 = base
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let d = u32::from(b - b'0');
            if i % 2 == 0 {
                double_and_reduce(d)
            } else {
                d
            }
        })
        .sum();
    Some(((10 - sum % 10) % 10) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ---- standard Luhn vectors ----

    #[test]
    fn test_standard_vectors_valid() {
        assert!(luhn_valid("79927398713"));
        assert!(luhn_valid("49927398716"));
        assert!(luhn_valid("1234567812345670"));
    }

    #[test]
    fn test_standard_vectors_invalid() {
        assert!(!luhn_valid("79927398710"));
        assert!(!luhn_valid("49927398717"));
        assert!(!luhn_valid("1234567812345678"));
    }

    #[test]
    fn test_identity_number_vectors() {
        assert!(luhn_valid("8001015009087"));
        assert!(!luhn_valid("8001015009088"));
        assert!(luhn_valid("8001015009004"));
    }

    // ---- fail-closed behavior ----

    #[test]
    fn test_empty_fails_closed() {
        assert!(!luhn_valid(""));
    }

    #[test]
    fn test_non_digit_fails_closed() {
        assert!(!luhn_valid("7992739871x"));
        assert!(!luhn_valid("7992 7398713"));
        assert!(!luhn_valid("٣9927398713"));
    }

    // ---- positional invariance ----

    #[test]
    fn test_leading_zeros_do_not_change_result() {
        assert!(luhn_valid("079927398713"));
        assert!(luhn_valid("00079927398713"));
        assert!(!luhn_valid("079927398710"));
    }

    // ---- check digit complement ----

    #[test]
    fn test_check_digit_worked_example() {
        // The legacy-to-modern worked example: base with race indicator
        // rewritten to 8 yields check digit 7.
        assert_eq!(check_digit("800101500908"), Some(7));
    }

    #[test]
    fn test_check_digit_rejects_non_digits() {
        assert_eq!(check_digit(""), None);
        assert_eq!(check_digit("80010150090x"), None);
    }

    proptest! {
        /// Leading-zero padding never changes validity.
        #[test]
        fn zero_padding_invariant(s in "[0-9]{1,30}") {
            let padded = format!("0{s}");
            prop_assert_eq!(luhn_valid(&s), luhn_valid(&padded));
        }

        /// Appending the computed check digit always yields a valid number.
        #[test]
        fn check_digit_completes_base(base in "[0-9]{1,30}") {
            let c = check_digit(&base).expect("all-digit base");
            let completed = format!("{base}{c}");
            prop_assert!(luhn_valid(&completed));
        }

        /// Never panics on arbitrary input.
        #[test]
        fn never_panics(s in any::<String>()) {
            let _ = luhn_valid(&s);
            let _ = check_digit(&s);
        }
    }
}
