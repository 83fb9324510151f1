use crate::errors::PatternError;

/// A run of pattern text between two `%` wildcards
///
/// `_` wildcards inside the run are recorded by offset and removed from the
/// literal text, so `total_length` is the literal byte count plus the
/// underscore count. Underscore offsets are 0-based within the segment and
/// strictly ascending.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Segment {
    pub(crate) text: Vec<u8>,
    pub(crate) underscore_positions: Vec<usize>,
    pub(crate) total_length: usize,
}

/// A compiled LIKE pattern
///
/// Built once per distinct pattern; immutable afterward and safe to read
/// from any number of matching calls.
#[derive(Debug, Clone)]
pub(crate) struct Pattern {
    pub(crate) segments: Vec<Segment>,
    pub(crate) leading_wildcard: bool,
    pub(crate) trailing_wildcard: bool,
    pub(crate) min_match_len: usize,
}

impl Pattern {
    /// Parse a raw LIKE pattern into its segment representation
    ///
    /// Single left-to-right pass. `\` escapes the next byte unconditionally
    /// (even `%`, `_` and `\`); an unescaped `%` closes the current segment;
    /// an unescaped `_` records its offset within the current segment. A
    /// pattern ending in a lone backslash is rejected.
    pub(crate) fn parse(pattern: &str) -> Result<Pattern, PatternError> {
        let mut segments = Vec::new();
        let mut current = Segment::default();
        let mut escape_mode = false;
        let mut leading_wildcard = false;
        let mut trailing_wildcard = false;
        let mut first_byte_seen = false;

        for &b in pattern.as_bytes() {
            if escape_mode {
                current.text.push(b);
                current.total_length += 1;
                escape_mode = false;
                trailing_wildcard = false;
            } else if b == b'\\' {
                escape_mode = true;
                trailing_wildcard = false;
            } else if b == b'%' {
                segments.push(std::mem::take(&mut current));
                if !first_byte_seen {
                    leading_wildcard = true;
                }
                // Speculative: reset again if more pattern bytes follow
                trailing_wildcard = true;
            } else if b == b'_' {
                current.underscore_positions.push(current.total_length);
                current.total_length += 1;
                trailing_wildcard = false;
            } else {
                current.text.push(b);
                current.total_length += 1;
                trailing_wildcard = false;
            }
            first_byte_seen = true;
        }
        if escape_mode {
            return Err(PatternError::InvalidPattern(
                "trailing backslash with nothing to escape".to_string(),
            ));
        }
        segments.push(current);

        let min_match_len = min_match_len(&segments, leading_wildcard, trailing_wildcard);
        Ok(Pattern { segments, leading_wildcard, trailing_wildcard, min_match_len })
    }
}

/// Lower bound on the length of any candidate the matcher can accept
///
/// Searched segments advance the match cursor by a single byte, so adjacent
/// segments may overlap in the candidate (`%aa%aa%` accepts "aaa"); summing
/// full segment lengths would over-reject. Anchored head and tail segments
/// cannot overlap anything and count in full; each searched segment is only
/// guaranteed to consume one byte beyond the point where it must still fit.
fn min_match_len(segments: &[Segment], leading: bool, trailing: bool) -> usize {
    if segments.len() == 1 {
        // No `%` in the pattern: the whole length is required
        return segments[0].total_length;
    }

    let head = if leading { 0 } else { segments[0].total_length };
    let tail = if trailing { 0 } else { segments[segments.len() - 1].total_length };

    // Searched segments: everything except an anchored head or tail. When a
    // wildcard flag is set the boundary segment is empty and contributes
    // nothing either way.
    let start = if leading { 0 } else { 1 };
    let end = if trailing { segments.len() } else { segments.len() - 1 };

    let mut searched_before = 0;
    let mut searched_need = 0;
    for seg in &segments[start..end] {
        if seg.total_length == 0 {
            continue;
        }
        searched_need = searched_need.max(searched_before + seg.total_length);
        searched_before += 1;
    }

    head + searched_need.max(tail + searched_before)
}
