//! Heuristic English pluralization.
//!
//! Rules are checked in order against the lower-cased noun and the first
//! match wins. A short exception list then forces the plain `+s` form for
//! nouns the `-ves`/`-es` rules would get wrong. This is not a dictionary:
//! irregular plurals such as `child` or `mouse` come out as `childs` and
//! `mouses`.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::Result;
use crate::utils::validation;

// Suffixes taking `-es`. Note that a vowel followed by `y` also lands here.
static SUFFIX_ES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]+([oszx]|ch|sh|ss|[aeiou]y)$").unwrap());

static SUFFIX_Y_TO_IES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z]+y$").unwrap());

static SUFFIX_F_TO_VES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z]+(f|fe)$").unwrap());

/// Nouns that always take a plain `s`.
pub const EXCEPTIONS: &[&str] = &["photo", "piano", "halo", "roof", "belief", "chef", "chief"];

/// Pluralize `noun`, returning the lower-cased plural.
///
/// Casing of the input is not preserved: `"Bus"` becomes `"buses"`.
/// Fails with `validation.invalid_argument` for a blank noun.
pub fn pluralize(noun: &str) -> Result<String> {
    let noun = validation::require_non_empty(noun, "noun", "Noun cannot be empty")?;
    let lower = noun.to_lowercase();

    if EXCEPTIONS.contains(&lower.as_str()) {
        return Ok(lower + "s");
    }

    let plural = if SUFFIX_ES.is_match(&lower) {
        format!("{}es", lower)
    } else if SUFFIX_Y_TO_IES.is_match(&lower) {
        format!("{}ies", &lower[..lower.len() - 1])
    } else if SUFFIX_F_TO_VES.is_match(&lower) {
        // The regex guarantees an `f` is present.
        let cut = lower.rfind('f').unwrap_or(lower.len());
        format!("{}ves", &lower[..cut])
    } else {
        format!("{}s", lower)
    };

    Ok(plural)
}
