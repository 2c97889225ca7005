//! Core error type.
//!
//! Higher crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The error type for `qs-core`: everything that can go wrong before the
/// simulation state is constructed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid rate for {what}: {value}")]
    InvalidRate { what: &'static str, value: f64 },
}

/// Shorthand result type for `qs-core`.
pub type CoreResult<T> = Result<T, CoreError>;
