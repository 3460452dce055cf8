//! Core error type.
//!
//! Sub-crates define their own error enums; loaders turn a `DrError` into
//! their `Parse` variant so the failing line number is kept.

use thiserror::Error;

/// Errors produced by `dr-core` value constructors.
#[derive(Debug, Error)]
pub enum DrError {
    #[error("invalid coordinate component {text:?}: {reason}")]
    InvalidCoordinate { text: String, reason: String },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `dr-core`.
pub type DrResult<T> = Result<T, DrError>;
