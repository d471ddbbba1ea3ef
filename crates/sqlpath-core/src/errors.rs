//! Cross-cutting error types for sqlpath.
//!
//! Manifest loading errors live in `sqlpath-mapping`, configuration errors in
//! `sqlpath-config`. This module only covers failures that can come from the
//! core types themselves.

use thiserror::Error;

/// Errors that can be raised by the core types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A string did not name a known enum variant.
    #[error("invalid {field} '{value}' (expected one of: {expected})")]
    InvalidValue {
        field: &'static str,
        value: String,
        expected: String,
    },
}
