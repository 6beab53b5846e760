use std::collections::HashMap;
use std::fmt;

use crate::compare::Compare;

/// A single hit in the haystack.
///
/// Borrows the matched entry, so it cannot outlive the haystack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Match<'h> {
    index: usize,
    value: &'h str,
}

impl<'h> Match<'h> {
    pub(crate) fn new(index: usize, value: &'h str) -> Self {
        Self { index, value }
    }

    /// Index of the entry in the haystack
    pub fn index(&self) -> usize {
        self.index
    }

    /// The matched haystack entry
    pub fn as_str(&self) -> &'h str {
        self.value
    }
}

impl fmt::Display for Match<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value)
    }
}

/// All hits for one needle, in haystack order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Matches<'h>(Vec<Match<'h>>);

impl<'h> Matches<'h> {
    /// Create an empty match list
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of matches
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if nothing matched
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The first match, which is the winner after resolution
    pub fn first(&self) -> Option<&Match<'h>> {
        self.0.first()
    }

    /// Iterate over the matches in order
    pub fn iter(&self) -> std::slice::Iter<'_, Match<'h>> {
        self.0.iter()
    }

    /// View the matches as a slice
    pub fn as_slice(&self) -> &[Match<'h>] {
        &self.0
    }

    /// Consume the list, returning the underlying matches
    pub fn into_vec(self) -> Vec<Match<'h>> {
        self.0
    }

    /// Find the first match whose entry satisfies `compare(entry, needle)`.
    pub fn exists<C>(&self, needle: &str, compare: &C) -> Option<&Match<'h>>
    where
        C: Compare + ?Sized,
    {
        self.position(needle, compare).map(|pos| &self.0[pos])
    }

    /// Like [`Matches::exists`], but returns the position within this list.
    pub fn position<C>(&self, needle: &str, compare: &C) -> Option<usize>
    where
        C: Compare + ?Sized,
    {
        self.0
            .iter()
            .position(|m| compare.compare(m.as_str(), needle))
    }

    /// Matched entries as plain strings, in order
    pub fn to_strings(&self) -> Vec<&'h str> {
        self.0.iter().map(Match::as_str).collect()
    }

    /// Swap two matches by their positions in this list.
    ///
    /// # Panics
    /// Panics if either position is out of bounds.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }
}

impl<'h> FromIterator<Match<'h>> for Matches<'h> {
    fn from_iter<I: IntoIterator<Item = Match<'h>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'h> IntoIterator for Matches<'h> {
    type Item = Match<'h>;
    type IntoIter = std::vec::IntoIter<Match<'h>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, 'h> IntoIterator for &'a Matches<'h> {
    type Item = &'a Match<'h>;
    type IntoIter = std::slice::Iter<'a, Match<'h>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Needle to its single winning match
pub type Resolved<'h> = HashMap<String, Match<'h>>;
