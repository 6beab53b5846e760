//! Resolver module.
//!
//! Reduces the candidates found for every needle to a single best match,
//! favoring exact matches over lazy ones.

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::compare::{cmp, Compare, CompareMode};
use crate::error::{MatchError, Result};
use crate::search::needles_map;
use crate::types::{Matches, Resolved};

/// How repeated needle strings are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// The last occurrence of a needle wins; the mapping has one key per
    /// distinct needle.
    #[default]
    LastWins,
    /// A repeated needle fails with [`MatchError::DuplicateNeedle`].
    Reject,
}

/// Resolver options.
#[derive(Debug, Clone, Default)]
pub struct ResolverOptions {
    /// Handling of repeated needles
    pub duplicates: DuplicatePolicy,
}

impl ResolverOptions {
    /// Create new resolver options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set duplicate needle policy.
    pub fn with_duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }
}

/// Maps every needle to its best match in a haystack.
///
/// The comparator decides which entries are candidates for a needle. A needle
/// with a single candidate resolves to it. A needle with several candidates
/// resolves only if one of them is exactly equal to the needle.
#[derive(Debug, Clone, Default)]
pub struct Resolver<C = CompareMode> {
    compare: C,
    options: ResolverOptions,
}

impl Resolver {
    /// Create a resolver using case-insensitive prefix matching.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Compare> Resolver<C> {
    /// Create a resolver with a custom comparator.
    pub fn with_compare(compare: C) -> Self {
        Self {
            compare,
            options: ResolverOptions::default(),
        }
    }

    /// Set resolver options.
    pub fn with_options(mut self, options: ResolverOptions) -> Self {
        self.options = options;
        self
    }

    /// Get resolver options.
    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Every candidate for every needle, before disambiguation.
    pub fn candidates<'h, S, N>(
        &self,
        haystack: &'h [S],
        needles: &[N],
    ) -> HashMap<String, Matches<'h>>
    where
        S: AsRef<str>,
        N: AsRef<str>,
    {
        needles_map(haystack, &self.compare, needles)
    }

    /// Resolve every needle against the haystack.
    ///
    /// Needles are checked in input order and the first one that fails aborts
    /// the whole resolution.
    pub fn resolve<'h, S, N>(&self, haystack: &'h [S], needles: &[N]) -> Result<'h, Resolved<'h>>
    where
        S: AsRef<str>,
        N: AsRef<str>,
    {
        if self.options.duplicates == DuplicatePolicy::Reject {
            reject_duplicates(needles)?;
        }

        let mut candidates = self.candidates(haystack, needles);
        let mut resolved = Resolved::with_capacity(candidates.len());

        // Removing from the table visits each distinct needle once, at its
        // first position in the input.
        for n in needles {
            let n = n.as_ref();
            let Some(mut matches) = candidates.remove(n) else {
                continue;
            };

            if let Err(err) = disambiguate(n, &mut matches) {
                debug!(needle = n, candidates = err.matches().len(), "{}", err);
                return Err(err);
            }

            if let Some(best) = matches.first() {
                resolved.insert(n.to_string(), *best);
            }
        }

        Ok(resolved)
    }
}

/// Map every needle to its best match using case-insensitive prefix matching.
///
/// Exact matches win over lazy ones. Fails if a needle matches nothing, or
/// matches two or more entries without a single exact match.
pub fn best<'h, S, N>(haystack: &'h [S], needles: &[N]) -> Result<'h, Resolved<'h>>
where
    S: AsRef<str>,
    N: AsRef<str>,
{
    best_func(haystack, CompareMode::default(), needles)
}

/// Like [`best`], with a custom comparator for lazy matching.
///
/// Exact matches are still favored over lazy ones.
pub fn best_func<'h, S, C, N>(
    haystack: &'h [S],
    compare: C,
    needles: &[N],
) -> Result<'h, Resolved<'h>>
where
    S: AsRef<str>,
    C: Compare,
    N: AsRef<str>,
{
    Resolver::with_compare(compare).resolve(haystack, needles)
}

/// Leave the winning candidate at the front of `matches`.
fn disambiguate<'h>(needle: &str, matches: &mut Matches<'h>) -> Result<'h, ()> {
    match matches.len() {
        1 => Ok(()),
        0 => Err(MatchError::NoMatch {
            needle: needle.to_string(),
        }),
        _ => match matches.position(needle, &cmp) {
            Some(pos) => {
                trace!(needle = needle, candidates = matches.len(), "exact match wins");
                matches.swap(0, pos);
                Ok(())
            }
            None => Err(MatchError::Ambiguous {
                needle: needle.to_string(),
                matches: std::mem::take(matches),
            }),
        },
    }
}

fn reject_duplicates<'h, N: AsRef<str>>(needles: &[N]) -> Result<'h, ()> {
    let mut seen = HashSet::with_capacity(needles.len());
    for n in needles {
        let n = n.as_ref();
        if !seen.insert(n) {
            return Err(MatchError::DuplicateNeedle {
                needle: n.to_string(),
            });
        }
    }
    Ok(())
}
