//! Input validation primitives.
//!
//! Every helper here fails with `validation.invalid_argument`, so callers can
//! tell "bad input" apart from a valid empty result:
//! - Validating non-empty strings and collections
//! - Validating that a bound pair is ordered

use crate::error::{Error, Result};

/// Require a string to be non-empty after trimming.
///
/// Returns a reference to the trimmed string on success.
pub fn require_non_empty<'a>(value: &'a str, field: &str, message: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(Error::validation_invalid_argument(field, message, None, None))
    } else {
        Ok(trimmed)
    }
}

/// Require a collection to be non-empty.
pub fn require_non_empty_vec<'a, T>(vec: &'a [T], field: &str, message: &str) -> Result<&'a [T]> {
    if vec.is_empty() {
        Err(Error::validation_invalid_argument(field, message, None, None))
    } else {
        Ok(vec)
    }
}

/// Require `lower <= upper`.
///
/// The offending pair is echoed back in the error's `id` detail.
pub fn require_ordered<T>(lower: T, upper: T, field: &str) -> Result<()>
where
    T: PartialOrd + std::fmt::Display,
{
    if lower > upper {
        return Err(Error::validation_invalid_argument(
            field,
            format!("Lower bound {} is greater than upper bound {}", lower, upper),
            Some(format!("{}..={}", lower, upper)),
            None,
        ));
    }
    Ok(())
}
