use regex::bytes::{Regex, RegexBuilder};

use crate::errors::PatternError;
use crate::translate::translate_like_to_regex;

/// Regex fallback for LIKE matching
///
/// Compiles the translated pattern with a linear-time regex engine and runs
/// it with full-match anchoring over raw bytes. Used as the fallback path
/// and as a correctness oracle for the segment matcher, never on the hot
/// path. Note the segment matcher accepts a strict superset: its single-byte
/// cursor advance lets adjacent segments overlap in the candidate, which the
/// translated regex cannot express.
#[derive(Debug, Clone)]
pub struct RegexLikeMatcher {
    regex: Regex,
}

impl RegexLikeMatcher {
    /// Translate and compile a LIKE pattern; fails only on a malformed
    /// trailing escape
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let translated = translate_like_to_regex(pattern)?;
        // Unicode mode off so `[\s\S]` spans one byte, matching the byte
        // granularity of `_` in the segment matcher
        let regex = RegexBuilder::new(&format!(r"\A(?:{})\z", translated))
            .unicode(false)
            .build()
            .map_err(|e| {
                PatternError::InvalidPattern(format!("translated regex failed to compile: {}", e))
            })?;
        Ok(RegexLikeMatcher { regex })
    }

    /// Full-match a candidate byte string
    pub fn matches_bytes(&self, candidate: &[u8]) -> bool {
        self.regex.is_match(candidate)
    }
}
