use types::SqlValue;

use crate::errors::PatternError;
use crate::regex_backend::RegexLikeMatcher;
use crate::segment::SegmentMatcher;

/// Matching backend, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchBackend {
    /// Direct byte-segment evaluation (the default)
    Segment,
    /// Translated-regex fallback
    Regex,
}

/// Shared contract over every LIKE backend
///
/// LIKE has no defined meaning over non-string data, so `matches_value`
/// returns `false` for every non-string variant (including NULL) rather than
/// erroring. The provided methods keep that gate identical across backends.
pub trait Matcher {
    /// Match a candidate byte string; `_` consumes exactly one byte
    fn matches_bytes(&self, candidate: &[u8]) -> bool;

    fn matches_str(&self, candidate: &str) -> bool {
        self.matches_bytes(candidate.as_bytes())
    }

    /// Match a runtime value; non-string values never match
    fn matches_value(&self, value: &SqlValue) -> bool {
        match value.as_str() {
            Some(s) => self.matches_bytes(s.as_bytes()),
            None => false,
        }
    }
}

impl Matcher for SegmentMatcher {
    fn matches_bytes(&self, candidate: &[u8]) -> bool {
        SegmentMatcher::matches_bytes(self, candidate)
    }
}

impl Matcher for RegexLikeMatcher {
    fn matches_bytes(&self, candidate: &[u8]) -> bool {
        RegexLikeMatcher::matches_bytes(self, candidate)
    }
}

/// LIKE matcher with the backend selected once at construction
///
/// `new` always picks the segment engine: it covers every LIKE pattern and
/// the regex backend exists only for fallback and cross-validation. The
/// query compiler builds one matcher per distinct pattern and reuses it for
/// every row value.
#[derive(Debug, Clone)]
pub enum LikeMatcher {
    Segment(SegmentMatcher),
    Regex(RegexLikeMatcher),
}

impl LikeMatcher {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        Self::with_backend(pattern, MatchBackend::Segment)
    }

    pub fn with_backend(pattern: &str, backend: MatchBackend) -> Result<Self, PatternError> {
        match backend {
            MatchBackend::Segment => Ok(LikeMatcher::Segment(SegmentMatcher::new(pattern)?)),
            MatchBackend::Regex => Ok(LikeMatcher::Regex(RegexLikeMatcher::new(pattern)?)),
        }
    }

    pub fn backend(&self) -> MatchBackend {
        match self {
            LikeMatcher::Segment(_) => MatchBackend::Segment,
            LikeMatcher::Regex(_) => MatchBackend::Regex,
        }
    }
}

impl Matcher for LikeMatcher {
    fn matches_bytes(&self, candidate: &[u8]) -> bool {
        match self {
            LikeMatcher::Segment(m) => m.matches_bytes(candidate),
            LikeMatcher::Regex(m) => m.matches_bytes(candidate),
        }
    }
}

/// One-shot LIKE evaluation
///
/// Compiles the pattern and matches a single string. Callers evaluating many
/// rows should build a `LikeMatcher` once instead.
pub fn like_match(text: &str, pattern: &str) -> Result<bool, PatternError> {
    Ok(SegmentMatcher::new(pattern)?.matches_str(text))
}
