//! Non-failing entry points for live input fields.
//!
//! A converter that re-runs on every keystroke cannot surface an error for
//! each half-typed value. These wrappers collapse every error kind to `None`
//! and must not be used where the caller needs to tell error kinds apart.

use num_bigint::{BigInt, BigUint};

use crate::decode::decode;
use crate::encode::{encode, parse_arabic};
use crate::validate::validate;

/// [`encode`] that returns `None` instead of an error.
pub fn safe_encode(n: impl Into<BigInt>) -> Option<String> {
    encode(n).ok()
}

/// [`decode`] that returns `None` instead of an error.
pub fn safe_decode(numeral: &str) -> Option<BigUint> {
    decode(numeral).ok()
}

/// One-line message describing why `numeral` is malformed.
///
/// Returns `None` for valid input and for blank input (nothing typed yet).
pub fn describe_validation_error(numeral: &str) -> Option<String> {
    if numeral.trim().is_empty() {
        return None;
    }
    validate(numeral).err().map(|e| e.to_string())
}

/// One-line message describing why Arabic-numeral text cannot be converted.
///
/// Returns `None` for blank input and for text that encodes cleanly.
pub fn describe_arabic_input_error(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    match parse_arabic(trimmed) {
        None => Some("Please enter a valid number".to_string()),
        Some(n) if n.whole < BigInt::from(1) => {
            Some("Ge'ez numerals start from 1 (no zero)".to_string())
        }
        Some(n) if n.fractional => Some("Decimals are not supported in Ge'ez".to_string()),
        Some(_) => None,
    }
}
