//! Case-insensitive string sorting.

use std::cmp::Ordering;

use crate::error::Result;
use crate::utils::validation;

/// Three-way comparator over the lower-cased forms of two strings.
///
/// `ascending = true` orders A to Z, `false` orders Z to A. Strings that
/// differ only in case compare `Equal`.
pub fn predicate(ascending: bool) -> impl Fn(&str, &str) -> Ordering {
    move |a, b| {
        let ordering = a.to_lowercase().cmp(&b.to_lowercase());
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    }
}

/// Sort `values` case-insensitively.
///
/// With `in_place` the caller's slice is reordered and `None` is returned.
/// Otherwise the slice is left untouched and a sorted copy is returned.
/// The sort is stable. Fails with `validation.invalid_argument` when
/// `values` is empty.
pub fn sort<S>(values: &mut [S], ascending: bool, in_place: bool) -> Result<Option<Vec<S>>>
where
    S: AsRef<str> + Clone,
{
    validation::require_non_empty_vec(values, "values", "Expected at least one string to sort")?;

    if in_place {
        sort_unchecked(values, ascending);
        Ok(None)
    } else {
        let mut copy = values.to_vec();
        sort_unchecked(&mut copy, ascending);
        Ok(Some(copy))
    }
}

/// Sort `values` in place.
pub fn sort_in_place<S: AsRef<str>>(values: &mut [S], ascending: bool) -> Result<()> {
    validation::require_non_empty_vec(values, "values", "Expected at least one string to sort")?;
    sort_unchecked(values, ascending);
    Ok(())
}

/// Return a sorted copy of `values`.
pub fn sorted<S: AsRef<str> + Clone>(values: &[S], ascending: bool) -> Result<Vec<S>> {
    validation::require_non_empty_vec(values, "values", "Expected at least one string to sort")?;
    let mut copy = values.to_vec();
    sort_unchecked(&mut copy, ascending);
    Ok(copy)
}

fn sort_unchecked<S: AsRef<str>>(values: &mut [S], ascending: bool) {
    let compare = predicate(ascending);
    values.sort_by(|a, b| compare(a.as_ref(), b.as_ref()));
}
