//! Fuzzy speed-search predicate over display strings

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

/// A compiled speed-search pattern.
///
/// Matching is forgiving: case-insensitive and gap-tolerant, so "ftlog"
/// matches "feature/login". Stateless beyond the pattern itself.
///
/// Callers are expected to treat empty and `"/"` patterns as "no filter"
/// before building a matcher; see [`crate::search::SearchController`].
pub struct RefMatcher {
    pattern: String,
    skim: SkimMatcherV2,
}

impl RefMatcher {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            skim: SkimMatcherV2::default().ignore_case(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether the candidate satisfies the pattern
    pub fn matches(&self, candidate: &str) -> bool {
        self.skim.fuzzy_match(candidate, &self.pattern).is_some()
    }
}

impl std::fmt::Debug for RefMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefMatcher")
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}
