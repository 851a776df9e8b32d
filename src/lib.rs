// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # geez-numerals
//!
//! Conversion between integers and Ge'ez (Ethiopic) numerals, with a
//! structural validator for untrusted numeral input.
//!
//! Ge'ez numerals have no zero and are multiplicative: ፻ multiplies the group
//! before it by 100 and ፼ by 10,000. Stacking myriads (`፼፼` = 10,000²) gives
//! an unbounded range, and values are carried as [`num_bigint::BigUint`] so
//! nothing is lost to fixed-width arithmetic.
//!
//! ## Architecture
//!
//! - **Symbol table** (`glyph::catalog`): the 20 numeral glyphs and their classes
//! - **Validator** (`validate`): grammar of digit groups and multipliers
//! - **Encoder** (`encode`): integer → numeral
//! - **Decoder** (`decode`): numeral → integer, gated by the validator
//! - **Live input** (`input`): non-failing wrappers and one-line messages
//! - **Batch** (`batch`): parallel conversion of many inputs
//!
//! ## Library usage
//!
//! ```
//! use geez_numerals::{decode_u64, encode, validate};
//!
//! assert_eq!(encode(2021).unwrap(), "፳፻፳፩");
//! assert_eq!(decode_u64("፳፻፳፩").unwrap(), 2021);
//! assert!(validate("፩፲").is_err());
//! ```

pub mod batch;
pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod glyph;
pub mod input;
pub mod validate;

pub use decode::{decode, decode_u64};
pub use encode::{encode, encode_f64, encode_str};
pub use error::{DecodeError, EncodeError, GeezError, GeezResult, StructuralError};
pub use input::{describe_arabic_input_error, describe_validation_error, safe_decode, safe_encode};
pub use validate::{is_valid, validate};
