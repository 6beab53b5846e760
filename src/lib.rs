//! Best Match - resolve abbreviated names against a list of full names
//!
//! This library completes "needles" (abbreviations typed by a user, such as
//! command line arguments) against a "haystack" of full names:
//! - Exact, case-insensitive and case-insensitive prefix comparators
//! - Custom comparators (any `Fn(&str, &str) -> bool`)
//! - Exact matches always win over lazy matches
//! - Structured errors for needles that match nothing or too much
//!
//! # Example
//!
//! ```rust
//! use best_match::{best, MatchError};
//!
//! let products = ["Apple", "Eggplant", "Pear", "Peach"];
//!
//! // Resolve abbreviations
//! let resolved = best(&products, &["App", "eg", "Peac"]).unwrap();
//! assert_eq!(resolved["App"].as_str(), "Apple");
//! assert_eq!(resolved["eg"].as_str(), "Eggplant");
//! assert_eq!(resolved["Peac"].as_str(), "Peach");
//!
//! // "Pea" matches both "Pear" and "Peach"
//! match best(&products, &["Egg", "Pea"]) {
//!     Err(MatchError::Ambiguous { needle, matches }) => {
//!         assert_eq!(needle, "Pea");
//!         assert_eq!(matches.to_strings(), vec!["Pear", "Peach"]);
//!     }
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```
//!
//! # Resolution Rules
//!
//! | Candidates | Result |
//! |------------|--------|
//! | 0 | `MatchError::NoMatch` |
//! | 1 | that candidate, even if it is not an exact match |
//! | 2 or more, one equal to the needle | the exact match |
//! | 2 or more, none equal to the needle | `MatchError::Ambiguous` |

pub mod compare;
pub mod error;
pub mod resolver;
pub mod search;
pub mod types;

// Re-export commonly used items
pub use compare::{cmp, cmp_lower, cmp_prefix, Compare, CompareMode};
pub use error::{MatchError, MatchErrorKind, Result};
pub use search::{find_all, needle, needles, needles_map};
pub use types::{Match, Matches, Resolved};

// Re-export resolver types
pub use resolver::{best, best_func, DuplicatePolicy, Resolver, ResolverOptions};
