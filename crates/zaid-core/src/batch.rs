//! # Batch Validation
//!
//! Validates a collection of raw identity-number strings in one call.
//! Results are keyed by the ORIGINAL, unsanitized input so callers can
//! correlate outcomes with what they submitted. Duplicate inputs collapse
//! to a single entry (map semantics, last write wins); two spellings that
//! sanitize to the same digits remain distinct keys.

use std::collections::BTreeMap;

use crate::validate::{validate, ValidationOutcome};

/// Validate every string in `ids`, keyed by the original string.
///
/// Accepts any iterator of string-likes (`&str`, `String`, ...). Each
/// element goes through the full pipeline independently; one garbage
/// entry never affects another.
pub fn batch_validate<I>(ids: I) -> BTreeMap<String, ValidationOutcome>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    ids.into_iter()
        .map(|id| {
            let raw = id.as_ref();
            (raw.to_owned(), validate(raw))
        })
        .collect()
}
