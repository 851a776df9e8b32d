//! Parallel batch conversion.
//!
//! Every conversion is independent, so a batch fans out over rayon's pool
//! with no coordination. Results come back in input order, one outcome per
//! input, so a single bad line does not abort the batch.

use rayon::prelude::*;
use serde::Serialize;

use crate::decode::decode;
use crate::encode::encode_str;

/// Direction of a batch conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Arabic numeral text → Ge'ez.
    ToGeez,
    /// Ge'ez → Arabic numeral text.
    ToArabic,
}

/// Outcome of converting one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    /// The input as given (trimmed).
    pub input: String,
    /// Converted text on success. Arabic values are plain decimal strings so
    /// values beyond any fixed-width integer survive JSON output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Error message on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Conversion {
    fn from_result<E: std::fmt::Display>(input: &str, result: Result<String, E>) -> Self {
        match result {
            Ok(output) => Self {
                input: input.to_string(),
                output: Some(output),
                error: None,
            },
            Err(e) => Self {
                input: input.to_string(),
                output: None,
                error: Some(e.to_string()),
            },
        }
    }

    pub fn is_ok(&self) -> bool {
        self.output.is_some()
    }
}

/// Convert one input in the given direction.
pub fn convert(input: &str, direction: Direction) -> Conversion {
    let input = input.trim();
    match direction {
        Direction::ToGeez => Conversion::from_result(input, encode_str(input)),
        Direction::ToArabic => {
            Conversion::from_result(input, decode(input).map(|v| v.to_string()))
        }
    }
}

/// Convert many inputs in parallel, preserving order.
pub fn convert_batch<S: AsRef<str> + Sync>(inputs: &[S], direction: Direction) -> Vec<Conversion> {
    let results: Vec<Conversion> = inputs
        .par_iter()
        .map(|s| convert(s.as_ref(), direction))
        .collect();

    let failed = results.iter().filter(|c| !c.is_ok()).count();
    tracing::debug!(
        total = results.len(),
        failed,
        ?direction,
        "batch conversion complete"
    );
    results
}
