//! String comparators.
//!
//! A comparator receives a haystack entry first and the needle second, and
//! decides whether the entry is a candidate for the needle.

/// Trait for needle comparators
pub trait Compare {
    /// Check if the haystack `candidate` satisfies `needle`
    fn compare(&self, candidate: &str, needle: &str) -> bool;
}

impl<F> Compare for F
where
    F: Fn(&str, &str) -> bool,
{
    fn compare(&self, candidate: &str, needle: &str) -> bool {
        self(candidate, needle)
    }
}

/// Returns true if `a` and `b` are equal
pub fn cmp(a: &str, b: &str) -> bool {
    a == b
}

/// Lowercase one character at a time, without context rules such as the
/// word-final sigma.
fn lower_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

/// Returns true if `a` and `b` are equal in lower case
pub fn cmp_lower(a: &str, b: &str) -> bool {
    lower_chars(a).eq(lower_chars(b))
}

/// Returns true if `b` is a prefix of `a` when both are lower case.
///
/// An empty `b` is a prefix of everything.
pub fn cmp_prefix(a: &str, b: &str) -> bool {
    let mut a = lower_chars(a);
    lower_chars(b).all(|c| a.next() == Some(c))
}

/// Built-in comparison modes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CompareMode {
    /// Exact match: "Apple" matches only "Apple"
    Exact,
    /// Case-insensitive match: "apple" matches "Apple" and "APPLE"
    Lower,
    /// Case-insensitive prefix match: "app" matches "Apple" and "Apples"
    #[default]
    Prefix,
}

impl Compare for CompareMode {
    fn compare(&self, candidate: &str, needle: &str) -> bool {
        match self {
            CompareMode::Exact => cmp(candidate, needle),
            CompareMode::Lower => cmp_lower(candidate, needle),
            CompareMode::Prefix => cmp_prefix(candidate, needle),
        }
    }
}
