use crate::errors::PatternError;

/// Extract the literal prefix preceding the first unescaped wildcard
///
/// Escaped `%`, `_` and `\` contribute their literal character and do not
/// stop the scan. The scan ends immediately at the first unescaped wildcard,
/// so anything after it (including a trailing backslash) is never examined;
/// a lone trailing backslash reached before any wildcard is rejected exactly
/// like the parser rejects it.
///
/// The result is a pruning hint for scan-range narrowing: callers must still
/// run the full matcher on every surviving row.
pub fn extract_fixed_prefix(pattern: &str) -> Result<String, PatternError> {
    let mut prefix = String::with_capacity(pattern.len());
    let mut escape_mode = false;
    for c in pattern.chars() {
        if escape_mode {
            prefix.push(c);
            escape_mode = false;
        } else {
            match c {
                '\\' => escape_mode = true,
                '%' | '_' => return Ok(prefix),
                _ => prefix.push(c),
            }
        }
    }
    if escape_mode {
        return Err(PatternError::InvalidPattern(
            "trailing backslash with nothing to escape".to_string(),
        ));
    }
    Ok(prefix)
}
