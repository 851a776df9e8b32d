//! Rich diagnostic error types for the Ge'ez numeral codec.
//!
//! Each stage defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes and help text so callers (and the CLI) can tell a
//! malformed numeral apart from a value that simply has no Ge'ez form.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for the crate.
///
/// Each variant wraps a stage-specific error, preserving the full diagnostic
/// chain (error codes, help text) through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum GeezError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Structural(#[from] StructuralError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] crate::config::ConfigError),
}

// ---------------------------------------------------------------------------
// Encoder errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("\"{input}\" cannot be encoded: {reason}")]
    #[diagnostic(
        code(geez::encode::invalid_argument),
        help("Ge'ez numerals only represent whole numbers. Decimals are not supported.")
    )]
    InvalidArgument { input: String, reason: String },

    #[error("Ge'ez numerals do not have a representation for {value}")]
    #[diagnostic(
        code(geez::encode::no_representation),
        help("There is no zero and no negative numbers in Ge'ez. Numerals start from 1.")
    )]
    NoRepresentation { value: String },
}

// ---------------------------------------------------------------------------
// Structural (validator) errors
// ---------------------------------------------------------------------------

/// A grammar violation found by [`crate::validate::validate`].
///
/// Positions are 1-based character indices into the trimmed input.
#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum StructuralError {
    #[error("input cannot be empty")]
    #[diagnostic(
        code(geez::validate::empty),
        help("Enter at least one Ge'ez numeral, e.g. ፩.")
    )]
    EmptyInput,

    #[error("invalid character \"{glyph}\" at position {position}: only Ge'ez numerals are allowed")]
    #[diagnostic(
        code(geez::validate::unknown_glyph),
        help("Valid characters are ፩-፱ (ones), ፲-፺ (tens), ፻ (hundred) and ፼ (myriad).")
    )]
    UnknownGlyph { glyph: char, position: usize },

    #[error("multiple tens digits in sequence at position {position}: \"{input}\" is not a valid Ge'ez number")]
    #[diagnostic(
        code(geez::validate::duplicate_tens),
        help("A digit group holds at most one tens digit, e.g. ፳፩ for 21.")
    )]
    DuplicateTens { input: String, position: usize },

    #[error("multiple ones digits in sequence at position {position}: \"{input}\" is not a valid Ge'ez number")]
    #[diagnostic(
        code(geez::validate::duplicate_ones),
        help("A digit group holds at most one ones digit, e.g. ፲፭ for 15.")
    )]
    DuplicateOnes { input: String, position: usize },

    #[error("tens digit after ones digit at position {position}: \"{input}\" is not a valid Ge'ez number")]
    #[diagnostic(
        code(geez::validate::tens_after_ones),
        help("Tens must come before ones: ፲፩ is 11, ፩፲ is invalid.")
    )]
    TensAfterOnes { input: String, position: usize },
}

// ---------------------------------------------------------------------------
// Decoder errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("input cannot be empty")]
    #[diagnostic(
        code(geez::decode::empty),
        help("Enter at least one Ge'ez numeral, e.g. ፩.")
    )]
    EmptyInput,

    #[error(transparent)]
    #[diagnostic(transparent)]
    Structural(#[from] StructuralError),

    #[error("{numeral} denotes {value}, which does not fit in {target}")]
    #[diagnostic(
        code(geez::decode::overflow),
        help("Use `decode` to get an arbitrary-precision value instead.")
    )]
    Overflow {
        numeral: String,
        value: String,
        target: &'static str,
    },
}

/// Result type for encoder operations.
pub type EncodeResult<T> = std::result::Result<T, EncodeError>;

/// Result type for validator operations.
pub type StructuralResult<T> = std::result::Result<T, StructuralError>;

/// Result type for decoder operations.
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;

/// Convenience result type for crate-level operations.
pub type GeezResult<T> = std::result::Result<T, GeezError>;
