//! Integer → Ge'ez numeral encoding.
//!
//! Values below 10,000 are written with the hundred multiplier only
//! (`2021` → `፳፻፳፩`). Larger values are split into base-10,000 limbs and each
//! limb is followed by as many ፼ glyphs as its power, so `10⁸` is `፼፼` and the
//! range is unbounded.

use num_bigint::{BigInt, BigUint};
use num_traits::{FromPrimitive, Zero};

use crate::error::{EncodeError, EncodeResult};
use crate::glyph::catalog::{self, HUNDRED, MYRIAD, ONE};

/// Encode a positive integer as a Ge'ez numeral.
///
/// ```
/// use geez_numerals::encode::encode;
///
/// assert_eq!(encode(123).unwrap(), "፻፳፫");
/// assert_eq!(encode(10_000).unwrap(), "፼");
/// assert!(encode(0).is_err());
/// ```
pub fn encode(n: impl Into<BigInt>) -> EncodeResult<String> {
    let n: BigInt = n.into();
    let value = n
        .to_biguint()
        .filter(|v| !v.is_zero())
        .ok_or_else(|| EncodeError::NoRepresentation {
            value: n.to_string(),
        })?;
    Ok(encode_positive(&value))
}

/// Encode a floating-point value that must hold a whole number.
///
/// Integer-ness is checked before range, so `-0.5` is an
/// [`EncodeError::InvalidArgument`] rather than a missing representation.
pub fn encode_f64(x: f64) -> EncodeResult<String> {
    if !x.is_finite() {
        return Err(EncodeError::InvalidArgument {
            input: x.to_string(),
            reason: "not a finite number".into(),
        });
    }
    if x.fract() != 0.0 {
        return Err(EncodeError::InvalidArgument {
            input: x.to_string(),
            reason: "Ge'ez numerals do not support decimal numbers".into(),
        });
    }
    let n = BigInt::from_f64(x).ok_or_else(|| EncodeError::InvalidArgument {
        input: x.to_string(),
        reason: "not representable as an integer".into(),
    })?;
    encode(n)
}

/// Encode Arabic-numeral text such as `"2021"` or `"12.0"`.
///
/// The text is read exactly, with no floating-point step: a fractional part
/// is accepted only when all of its digits are zero.
pub fn encode_str(text: &str) -> EncodeResult<String> {
    let trimmed = text.trim();
    let invalid = |reason: &str| EncodeError::InvalidArgument {
        input: trimmed.to_string(),
        reason: reason.into(),
    };
    let number = parse_arabic(trimmed).ok_or_else(|| invalid("not a number"))?;
    if number.fractional {
        return Err(invalid("Ge'ez numerals do not support decimal numbers"));
    }
    encode(number.whole)
}

/// Arabic-numeral text read digit by digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ArabicText {
    /// Integer part, signed, truncated toward zero.
    pub(crate) whole: BigInt,
    /// Whether a non-zero digit follows the decimal point.
    pub(crate) fractional: bool,
}

/// Parse plain decimal notation (`[+-]digits[.digits]`).
///
/// `inf`, `NaN`, exponents and digit separators are rejected.
pub(crate) fn parse_arabic(text: &str) -> Option<ArabicText> {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let (int_digits, frac_digits) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (int_digits.is_empty() && frac_digits.is_empty())
        || !all_digits(int_digits)
        || !all_digits(frac_digits)
    {
        return None;
    }

    let magnitude = if int_digits.is_empty() {
        BigUint::zero()
    } else {
        int_digits.parse::<BigUint>().ok()?
    };
    let magnitude = BigInt::from(magnitude);
    Some(ArabicText {
        whole: if negative { -magnitude } else { magnitude },
        fractional: frac_digits.bytes().any(|b| b != b'0'),
    })
}

/// Encode a value in `0..=9999` using the hundred multiplier.
///
/// Zero yields the empty string; values above 9999 are a caller bug.
pub fn encode_up_to_9999(n: u16) -> String {
    debug_assert!(n <= 9999, "limb out of range: {n}");
    let mut out = String::new();
    let hundreds = u32::from(n / 100);
    let remainder = u32::from(n % 100);

    match hundreds {
        0 => {}
        1 => out.push(HUNDRED),
        _ => {
            push_two_digit(&mut out, hundreds);
            out.push(HUNDRED);
        }
    }
    push_two_digit(&mut out, remainder);
    out
}

/// Append the digit group for `n` in `0..=99`.
fn push_two_digit(out: &mut String, n: u32) {
    if let Some(tens) = catalog::tens_glyph(n / 10 * 10) {
        out.push(tens);
    }
    if let Some(ones) = catalog::ones_glyph(n % 10) {
        out.push(ones);
    }
}

fn encode_positive(n: &BigUint) -> String {
    let limbs = myriad_limbs(n);
    if let [only] = limbs.as_slice() {
        return encode_up_to_9999(*only);
    }

    let mut out = String::new();
    for (power, &limb) in limbs.iter().enumerate().rev() {
        match (power, limb) {
            (_, 0) => {}
            (0, _) => out.push_str(&encode_up_to_9999(limb)),
            // A bare run would merge into the previous limb's run
            // (፼፼ then ፼ reads as ፼፼፼), so the one is written out there.
            (p, 1) => {
                if out.ends_with(MYRIAD) {
                    out.push(ONE);
                }
                push_myriads(&mut out, p);
            }
            (p, _) => {
                out.push_str(&encode_up_to_9999(limb));
                push_myriads(&mut out, p);
            }
        }
    }

    if out.is_empty() {
        out.push(ONE);
    }
    out
}

fn push_myriads(out: &mut String, count: usize) {
    out.extend(std::iter::repeat_n(MYRIAD, count));
}

/// Base-10,000 limbs of `n`, least significant first.
///
/// Works off the decimal rendering: every four decimal digits, counted from
/// the right, form one limb.
fn myriad_limbs(n: &BigUint) -> Vec<u16> {
    let decimal = n.to_str_radix(10);
    let bytes = decimal.as_bytes();
    bytes
        .rchunks(4)
        .map(|chunk| {
            chunk
                .iter()
                .fold(0u16, |acc, &d| acc * 10 + u16::from(d - b'0'))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_fixed_points() {
        assert_eq!(encode(1).unwrap(), "፩");
        assert_eq!(encode(10).unwrap(), "፲");
        assert_eq!(encode(11).unwrap(), "፲፩");
        assert_eq!(encode(99).unwrap(), "፺፱");
        assert_eq!(encode(100).unwrap(), "፻");
        assert_eq!(encode(101).unwrap(), "፻፩");
        assert_eq!(encode(123).unwrap(), "፻፳፫");
        assert_eq!(encode(200).unwrap(), "፪፻");
        assert_eq!(encode(2021).unwrap(), "፳፻፳፩");
        assert_eq!(encode(9999).unwrap(), "፺፱፻፺፱");
        assert_eq!(encode(10_000).unwrap(), "፼");
    }

    #[test]
    fn myriad_stacking() {
        assert_eq!(encode(20_000).unwrap(), "፪፼");
        assert_eq!(encode(10_001).unwrap(), "፼፩");
        assert_eq!(encode(100_000_000u64).unwrap(), "፼፼");
        assert_eq!(encode(1_000_000_000_000u64).unwrap(), "፼፼፼");
        assert_eq!(encode(123_456_789u64).unwrap(), "፼፼፳፫፻፵፭፼፷፯፻፹፱");
    }

    #[test]
    fn interior_zero_limbs_are_skipped() {
        assert_eq!(encode(100_000_001u64).unwrap(), "፼፼፩");
        assert_eq!(encode(1_000_000_000_001u64).unwrap(), "፼፼፼፩");
        assert_eq!(encode(300_000_000_000_000u64).unwrap(), "፫፻፼፼፼");
    }

    #[test]
    fn adjacent_unit_limbs_keep_explicit_one() {
        assert_eq!(encode(100_010_000u64).unwrap(), "፼፼፩፼");
        assert_eq!(encode(100_010_001u64).unwrap(), "፼፼፩፼፩");
        assert_eq!(encode(1_000_000_010_000u64).unwrap(), "፼፼፼፩፼");
        assert_eq!(encode(1_000_100_000_000u64).unwrap(), "፼፼፼፩፼፼");
    }

    #[test]
    fn zero_and_negative_have_no_representation() {
        assert!(matches!(
            encode(0),
            Err(EncodeError::NoRepresentation { value }) if value == "0"
        ));
        assert!(matches!(
            encode(-5),
            Err(EncodeError::NoRepresentation { value }) if value == "-5"
        ));
    }

    #[test]
    fn fractional_input_is_invalid_argument() {
        assert!(matches!(
            encode_f64(3.5),
            Err(EncodeError::InvalidArgument { .. })
        ));
        assert!(matches!(
            encode_f64(-0.5),
            Err(EncodeError::InvalidArgument { .. })
        ));
        assert!(matches!(
            encode_f64(f64::NAN),
            Err(EncodeError::InvalidArgument { .. })
        ));
        assert_eq!(encode_f64(123.0).unwrap(), "፻፳፫");
        assert!(matches!(
            encode_f64(0.0),
            Err(EncodeError::NoRepresentation { .. })
        ));
    }

    #[test]
    fn encode_from_text() {
        assert_eq!(encode_str(" 2021 ").unwrap(), "፳፻፳፩");
        assert_eq!(encode_str("12.0").unwrap(), "፲፪");
        assert!(matches!(
            encode_str("3.5"),
            Err(EncodeError::InvalidArgument { .. })
        ));
        assert!(matches!(
            encode_str("abc"),
            Err(EncodeError::InvalidArgument { .. })
        ));
        assert!(matches!(
            encode_str("inf"),
            Err(EncodeError::InvalidArgument { .. })
        ));
        assert!(matches!(
            encode_str("-7"),
            Err(EncodeError::NoRepresentation { .. })
        ));
    }

    #[test]
    fn decimal_text_is_read_exactly() {
        use crate::decode::decode;

        // 2^60 + 1 is not representable as f64.
        let numeral = encode_str("1152921504606846977.0").unwrap();
        assert_eq!(decode(&numeral).unwrap(), BigUint::from(1_152_921_504_606_846_977u64));

        let nines = "9".repeat(400);
        let numeral = encode_str(&format!("{nines}.0")).unwrap();
        assert_eq!(decode(&numeral).unwrap().to_string(), nines);
        assert_eq!(encode_str(&format!("{nines}.000")).unwrap(), numeral);

        let long_half = format!("{}.5", "9".repeat(23));
        assert!(matches!(
            encode_str(&long_half),
            Err(EncodeError::InvalidArgument { input, .. }) if input == long_half
        ));
    }

    #[test]
    fn arabic_text_forms() {
        let parsed = parse_arabic("-3.50").unwrap();
        assert_eq!(parsed.whole, BigInt::from(-3));
        assert!(parsed.fractional);
        assert_eq!(parse_arabic(".5").unwrap().whole, BigInt::zero());
        assert!(!parse_arabic("+7.").unwrap().fractional);
        for bad in ["", ".", "-", "1e3", "inf", "NaN", "1.2.3", "1_000", "١٢"] {
            assert!(parse_arabic(bad).is_none(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn up_to_9999_helper() {
        assert_eq!(encode_up_to_9999(0), "");
        assert_eq!(encode_up_to_9999(5), "፭");
        assert_eq!(encode_up_to_9999(150), "፻፶");
        assert_eq!(encode_up_to_9999(1100), "፲፩፻");
    }

    #[test]
    fn limbs_least_significant_first() {
        assert_eq!(myriad_limbs(&BigUint::from(123_456_789u64)), vec![6789, 2345, 1]);
        assert_eq!(myriad_limbs(&BigUint::from(10_000u32)), vec![0, 1]);
    }
}
