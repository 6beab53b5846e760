//! Search primitives.
//!
//! Apply a comparator across a haystack for one or many needles. Nothing here
//! fails: a needle with no hits simply yields an empty [`Matches`].

use std::collections::HashMap;

use tracing::trace;

use crate::compare::Compare;
use crate::types::{Match, Matches};

/// Lazily find every haystack entry satisfying `compare(entry, needle)`, in
/// haystack order.
pub fn find_all<'h, 'a, S, C>(
    haystack: &'h [S],
    compare: &'a C,
    needle: &'a str,
) -> impl Iterator<Item = Match<'h>> + 'a
where
    'h: 'a,
    S: AsRef<str>,
    C: Compare + ?Sized,
{
    haystack.iter().enumerate().filter_map(move |(index, entry)| {
        let entry = entry.as_ref();
        compare
            .compare(entry, needle)
            .then(|| Match::new(index, entry))
    })
}

/// Find a needle in a haystack.
pub fn needle<'h, S, C>(haystack: &'h [S], compare: &C, needle: &str) -> Matches<'h>
where
    S: AsRef<str>,
    C: Compare + ?Sized,
{
    find_all(haystack, compare, needle).collect()
}

/// Find several needles, one [`Matches`] per needle in input order.
pub fn needles<'h, S, C, N>(haystack: &'h [S], compare: &C, needles: &[N]) -> Vec<Matches<'h>>
where
    S: AsRef<str>,
    C: Compare + ?Sized,
    N: AsRef<str>,
{
    needles
        .iter()
        .map(|n| needle(haystack, compare, n.as_ref()))
        .collect()
}

/// Like [`needles`], keyed by needle.
///
/// A needle given twice keeps the result of its last occurrence.
pub fn needles_map<'h, S, C, N>(
    haystack: &'h [S],
    compare: &C,
    needles: &[N],
) -> HashMap<String, Matches<'h>>
where
    S: AsRef<str>,
    C: Compare + ?Sized,
    N: AsRef<str>,
{
    let found = self::needles(haystack, compare, needles);
    let mut map = HashMap::with_capacity(found.len());

    for (n, matches) in needles.iter().zip(found) {
        let n = n.as_ref();
        if map.insert(n.to_string(), matches).is_some() {
            trace!(needle = n, "duplicate needle overwrites earlier result");
        }
    }

    map
}
