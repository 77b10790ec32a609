//! Uniform random integers in an inclusive range.

use rand::Rng;

use crate::error::Result;
use crate::utils::validation;

/// Draw a uniformly distributed integer from `[lower, upper]`.
///
/// Uses the thread-local generator, so concurrent callers draw independently.
/// Fails with `validation.invalid_argument` when `lower > upper`.
pub fn between(lower: i64, upper: i64) -> Result<i64> {
    between_with(&mut rand::thread_rng(), lower, upper)
}

/// Same as [`between`] but draws from a caller-supplied generator.
pub fn between_with<R: Rng + ?Sized>(rng: &mut R, lower: i64, upper: i64) -> Result<i64> {
    validation::require_ordered(lower, upper, "range")?;
    Ok(rng.gen_range(lower..=upper))
}
