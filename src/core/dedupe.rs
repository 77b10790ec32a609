//! Adjacent deduplication for pre-sorted sequences.
//!
//! This is NOT a set dedupe. Only runs of equal neighbours are collapsed, so
//! the input must already be sorted (or at least grouped) by the caller.
//! Equal elements that are not adjacent survive: `[1, 2, 1]` stays
//! `[1, 2, 1]`. Sort first when a global dedupe is wanted.

/// Collapse runs of equal adjacent elements, keeping the first of each run.
///
/// Returns a new vector; the input is never modified. Empty input yields an
/// empty vector.
pub fn dedupe_adjacent<T: PartialEq + Clone>(sorted: &[T]) -> Vec<T> {
    let mut deduped: Vec<T> = Vec::with_capacity(sorted.len());

    for element in sorted {
        if deduped.last() != Some(element) {
            deduped.push(element.clone());
        }
    }

    deduped
}
