//! # zaid-core — South African Identity Number Validation
//!
//! Validation and decoding for the 13-digit South African national
//! identity number: date of birth, gender-encoding sequence number,
//! citizenship status, the deprecated race indicator, and a Luhn check
//! digit.
//!
//! The entire crate is a pure-function pipeline over a string — no state,
//! no I/O, no globals. Thread safety falls out of that for free.
//!
//! ## Pipeline
//!
//! `sanitize → length gate → citizenship gate → date gate → Luhn gate`
//!
//! The primary entry point is [`validate()`], returning the three-state
//! [`ValidationOutcome`]. The field extractors ([`extract_info()`] and
//! friends) and the derived operations ([`convert_legacy_to_modern()`],
//! [`would_be_duplicates()`], [`batch_validate()`]) each re-run
//! sanitization themselves; nothing assumes pre-validated input.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype for the identifier.** [`IdentityNumber`] holds exactly 13
//!    sanitized digits and carries the field accessors. No bare strings
//!    once parsing succeeds.
//! 2. **Tri-state outcome, not a boolean.** An out-of-range citizenship
//!    digit is a distinct outcome from plain invalidity, and the
//!    citizenship gate runs before the date gate.
//! 3. **Absence is the error signal.** Extractors return `Option`; only
//!    constructors return `Result`. Garbage input never panics.
//! 4. **The calendar is external.** A two-digit year is tried against the
//!    1800s, 1900s, and 2000s; Gregorian rules come from `chrono` and are
//!    never reimplemented.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod batch;
pub mod convert;
pub mod dob;
pub mod error;
pub mod extract;
pub mod identity;
pub mod luhn;
pub mod sanitize;
pub mod validate;

// Re-export primary types for ergonomic imports.
pub use batch::batch_validate;
pub use convert::{convert_legacy_to_modern, would_be_duplicates};
pub use dob::{is_valid_calendar_date, is_valid_dob, DateComponents, CENTURY_PREFIXES};
pub use error::{StructuralError, ZaidError};
pub use extract::{
    extract_citizenship, extract_date_components, extract_gender, extract_info, is_legacy,
    ExtractedInfo,
};
pub use identity::{Citizenship, Gender, IdentityNumber, ID_LENGTH};
pub use luhn::luhn_valid;
pub use sanitize::sanitize;
pub use validate::{validate, ValidationOutcome};
