use crate::errors::PatternError;
use crate::parse::{Pattern, Segment};

/// Byte-segment LIKE matcher
///
/// The primary backend: evaluates candidates directly against the parsed
/// segments, with no regex engine involved. The head and tail segments are
/// anchored when the pattern lacks a leading/trailing `%`; every other
/// segment is searched for at or after the current cursor, and the cursor
/// advances a single byte past each hit. The single-byte advance keeps
/// matching near-linear and lets adjacent segments overlap in the candidate,
/// since the `%` between them may match zero bytes.
#[derive(Debug, Clone)]
pub struct SegmentMatcher {
    pattern: Pattern,
}

impl SegmentMatcher {
    /// Compile a LIKE pattern; fails only on a malformed trailing escape
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        Ok(SegmentMatcher { pattern: Pattern::parse(pattern)? })
    }

    /// Match a candidate byte string; `_` consumes exactly one byte
    pub fn matches_bytes(&self, candidate: &[u8]) -> bool {
        let p = &self.pattern;

        // Early rejection: candidate too short to satisfy every segment
        if candidate.len() < p.min_match_len {
            return false;
        }

        // No `%` at all: exact length and exact positional match
        if p.segments.len() == 1 {
            let seg = &p.segments[0];
            return candidate.len() == seg.total_length
                && (seg.total_length == 0 || segment_matches_at(seg, candidate, 0));
        }

        let mut pos = 0;
        let last = p.segments.len() - 1;
        for (i, seg) in p.segments.iter().enumerate() {
            if seg.total_length == 0 {
                continue;
            }

            if i == 0 && !p.leading_wildcard {
                // Head segment anchored at offset 0
                if !segment_matches_at(seg, candidate, 0) {
                    return false;
                }
                pos = seg.total_length;
            } else if i == last && !p.trailing_wildcard {
                // Tail segment anchored at the end, at or after the cursor
                if candidate.len() < seg.total_length {
                    return false;
                }
                let end_pos = candidate.len() - seg.total_length;
                if end_pos < pos || !segment_matches_at(seg, candidate, end_pos) {
                    return false;
                }
            } else {
                match find_segment(seg, candidate, pos) {
                    // found + 1, not found + total_length: the `%` between
                    // segments may match zero bytes, so the next segment may
                    // start inside this one ("%aa%aa%" matches "aaa")
                    Some(found) => pos = found + 1,
                    None => return false,
                }
            }
        }
        true
    }
}

/// Check one segment at a fixed candidate offset, skipping `_` positions
fn segment_matches_at(seg: &Segment, candidate: &[u8], at: usize) -> bool {
    if at + seg.total_length > candidate.len() {
        return false;
    }
    let mut text_idx = 0;
    let mut underscores = seg.underscore_positions.iter().peekable();
    for i in 0..seg.total_length {
        if underscores.peek() == Some(&&i) {
            underscores.next();
            continue;
        }
        if candidate[at + i] != seg.text[text_idx] {
            return false;
        }
        text_idx += 1;
    }
    true
}

/// Find the first offset at or after `from` where the segment matches
///
/// Callers only pass non-empty segments. A segment without underscores is a
/// plain substring search; with underscores, every start offset is checked
/// positionally.
fn find_segment(seg: &Segment, candidate: &[u8], from: usize) -> Option<usize> {
    if seg.underscore_positions.is_empty() {
        return candidate[from..]
            .windows(seg.text.len())
            .position(|window| window == seg.text)
            .map(|i| from + i);
    }
    let mut pos = from;
    while pos + seg.total_length <= candidate.len() {
        if segment_matches_at(seg, candidate, pos) {
            return Some(pos);
        }
        pos += 1;
    }
    None
}
