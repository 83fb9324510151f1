//! SQL LIKE pattern matching
//!
//! Compiles a LIKE pattern (`%`, `_`, backslash escapes) once and matches it
//! against many row values at byte granularity. The primary backend walks
//! the parsed pattern segments directly and never touches a regex engine; a
//! translated-regex backend provides the fallback path and a correctness
//! oracle.
//!
//! Modules:
//! - `parse` - raw pattern -> segment representation
//! - `segment` - the byte-segment matcher (hot path)
//! - `prefix` - fixed literal prefix extraction for scan pruning
//! - `translate` - LIKE -> regex translation
//! - `regex_backend` - regex engine adapter (fallback/oracle)
//! - `matcher` - backend selection and the string-only value gate

mod errors;
mod matcher;
mod parse;
mod prefix;
mod regex_backend;
mod segment;
mod translate;

pub use errors::PatternError;
pub use matcher::{like_match, LikeMatcher, MatchBackend, Matcher};
pub use prefix::extract_fixed_prefix;
pub use regex_backend::RegexLikeMatcher;
pub use segment::SegmentMatcher;
pub use translate::{is_special, translate_like_to_regex};

#[cfg(test)]
mod tests;
