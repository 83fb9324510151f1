use crate::errors::PatternError;

/// Regex class matching any single byte, newline included
///
/// The backend compiles with Unicode mode disabled, where `\s`/`\S` are byte
/// classes, so this spans exactly one byte and never refuses a newline.
const ANY_BYTE: &str = r"[\s\S]";

/// Whether a byte is a regex metacharacter that must be escaped to match
/// literally
pub fn is_special(b: u8) -> bool {
    matches!(
        b,
        b'\\' | b'.' | b'+' | b'*' | b'?' | b'(' | b')' | b'|' | b'[' | b']' | b'{' | b'}'
            | b'^' | b'$'
    )
}

/// Translate a LIKE pattern into equivalent regex text
///
/// `%` becomes `[\s\S]*`, `_` becomes `[\s\S]`, regex metacharacters are
/// escaped so they match literally, and LIKE escapes decode to their literal
/// character (re-escaped only when that character is itself regex-special,
/// so `\%` yields `%` but `\\` yields `\\`). A lone trailing backslash is
/// rejected exactly like the parser rejects it.
///
/// The output is unanchored; the regex backend applies full-match anchoring
/// when it compiles.
pub fn translate_like_to_regex(pattern: &str) -> Result<String, PatternError> {
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut escape_mode = false;
    for c in pattern.chars() {
        if escape_mode {
            push_literal(&mut out, c);
            escape_mode = false;
        } else {
            match c {
                '\\' => escape_mode = true,
                '%' => {
                    out.push_str(ANY_BYTE);
                    out.push('*');
                }
                '_' => out.push_str(ANY_BYTE),
                _ => push_literal(&mut out, c),
            }
        }
    }
    if escape_mode {
        return Err(PatternError::InvalidPattern(
            "trailing backslash with nothing to escape".to_string(),
        ));
    }
    Ok(out)
}

fn push_literal(out: &mut String, c: char) {
    if c.is_ascii() {
        if is_special(c as u8) {
            out.push('\\');
        }
        out.push(c);
    } else {
        // Non-ASCII literals become explicit byte escapes so the backend can
        // compile them with Unicode mode disabled and match byte-wise
        let mut buf = [0u8; 4];
        for b in c.encode_utf8(&mut buf).bytes() {
            out.push_str(&format!("\\x{:02X}", b));
        }
    }
}
