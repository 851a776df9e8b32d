//! Ge'ez numeral → integer decoding.
//!
//! Decoding is a single left-to-right pass over a string that has already
//! passed [`validate`](crate::validate::validate). A run of `k` ፼ glyphs closes
//! the pending group and multiplies it by 10,000^k; a bare run stands for an
//! implicit leading one.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::error::{DecodeError, DecodeResult};
use crate::glyph::catalog::{self, DigitClass, MYRIAD, MYRIAD_VALUE};
use crate::validate::validate;

/// Decode a Ge'ez numeral into its integer value.
///
/// ```
/// use geez_numerals::decode::decode;
/// use num_bigint::BigUint;
///
/// assert_eq!(decode("፻፳፫").unwrap(), BigUint::from(123u32));
/// assert_eq!(decode("፼፼").unwrap(), BigUint::from(100_000_000u64));
/// assert!(decode("፫፬").is_err());
/// ```
pub fn decode(numeral: &str) -> DecodeResult<BigUint> {
    let input = numeral.trim();
    if input.is_empty() {
        return Err(DecodeError::EmptyInput);
    }
    validate(input)?;

    let mut total = BigUint::zero();
    let mut group = BigUint::zero();
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        // Validation has already rejected anything outside the catalog.
        let Some(numeral) = catalog::lookup(ch) else {
            continue;
        };
        match numeral.class {
            DigitClass::Myriad => {
                let mut run = 1u32;
                while chars.next_if_eq(&MYRIAD).is_some() {
                    run += 1;
                }
                if group.is_zero() {
                    group = BigUint::from(1u32);
                }
                total += std::mem::take(&mut group) * BigUint::from(MYRIAD_VALUE).pow(run);
            }
            DigitClass::Hundred => {
                if group.is_zero() {
                    group = BigUint::from(100u32);
                } else {
                    group *= 100u32;
                }
            }
            DigitClass::Ones | DigitClass::Tens => group += numeral.value,
        }
    }

    Ok(total + group)
}

/// Decode a Ge'ez numeral into a `u64`.
pub fn decode_u64(numeral: &str) -> DecodeResult<u64> {
    let value = decode(numeral)?;
    value.to_u64().ok_or_else(|| DecodeError::Overflow {
        numeral: numeral.trim().to_string(),
        value: value.to_string(),
        target: "u64",
    })
}
