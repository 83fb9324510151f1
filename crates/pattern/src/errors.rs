/// Errors raised while compiling a LIKE pattern
///
/// Every variant is produced at pattern-compile time, before any row is
/// evaluated. Matching itself never fails.
#[derive(Debug, Clone, PartialEq)]
pub enum PatternError {
    InvalidPattern(String),
}

impl std::fmt::Display for PatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternError::InvalidPattern(msg) => write!(f, "Invalid LIKE pattern: {}", msg),
        }
    }
}

impl std::error::Error for PatternError {}
