use std::fmt;

/// SQL Values - runtime representation of data
///
/// Represents actual values in SQL, including NULL. Predicates that are
/// defined only over strings (LIKE) dispatch on the variant: `Varchar` and
/// `Character` are string-like, everything else is not.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Integer(i64),
    Bigint(i64),
    Double(f64),

    Character(String),
    Varchar(String),

    Boolean(bool),

    // Date/Time (using strings for now)
    Date(String),
    Timestamp(String),

    Null,
}

impl SqlValue {
    /// Check if this value is NULL
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// Borrow the text of a string-like value
    ///
    /// Returns `None` for every non-string variant, including NULL. Date and
    /// timestamp values are stored as strings but are not string-like for
    /// predicate dispatch.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SqlValue::Varchar(s) | SqlValue::Character(s) => Some(s),
            _ => None,
        }
    }
}

/// Display implementation for SqlValue (how values are shown to users)
impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Integer(i) => write!(f, "{}", i),
            SqlValue::Bigint(i) => write!(f, "{}", i),
            SqlValue::Double(n) => write!(f, "{}", n),
            SqlValue::Character(s) => write!(f, "{}", s),
            SqlValue::Varchar(s) => write!(f, "{}", s),
            SqlValue::Boolean(true) => write!(f, "TRUE"),
            SqlValue::Boolean(false) => write!(f, "FALSE"),
            SqlValue::Date(s) => write!(f, "{}", s),
            SqlValue::Timestamp(s) => write!(f, "{}", s),
            SqlValue::Null => write!(f, "NULL"),
        }
    }
}
