//! SQL runtime values
//!
//! This crate provides the runtime value representation shared by the
//! expression-evaluation crates:
//! - `SqlValue` - the tagged runtime value enum, including NULL
//! - String accessors used by string-only predicates (LIKE)

mod value;

pub use value::SqlValue;
