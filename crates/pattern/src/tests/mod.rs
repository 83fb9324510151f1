//! Test modules for the pattern crate
//!
//! Tests are organized by feature area:
//! - `parse_errors`: trailing-backslash rejection across all entry points
//! - `segment_structure`: parsed segment layout, wildcard flags, lengths
//! - `like_matching`: byte-segment matcher semantics and edge cases
//! - `fixed_prefix`: fixed literal prefix extraction
//! - `regex_translation`: LIKE -> regex translation and metacharacter escaping
//! - `backend_equivalence`: segment matcher vs regex backend cross-validation
//! - `value_gate`: string-only dispatch over runtime values

mod regex_translation;
