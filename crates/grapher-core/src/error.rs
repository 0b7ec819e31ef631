// File: crates/grapher-core/src/error.rs
// Summary: Error type shared by the engine, style configuration and surfaces.

use thiserror::Error;

use crate::style::ValueKind;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GrapherError {
    /// Progress must lie in `[0, 1]`.
    #[error("progress value {0} out of range [0, 1]")]
    Range(f64),

    #[error("unknown style attribute `{0}`")]
    UnknownStyleKey(String),

    #[error("style attribute `{key}` expects a {expected} value, got {found}")]
    StyleTypeMismatch {
        key: &'static str,
        expected: ValueKind,
        found: ValueKind,
    },

    #[error("invalid color `{0}`")]
    InvalidColor(String),

    #[error("invalid number `{0}`")]
    InvalidNumber(String),

    #[error("surface error: {0}")]
    Surface(String),
}
