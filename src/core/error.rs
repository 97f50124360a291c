// src/core/error.rs

use thiserror::Error;

/// Crate-wide error type.
///
/// `InvalidArgument` covers precondition violations on explicit parameters
/// and is never retried. `LogicInvariant` covers internal contract breaks
/// (an inexact ring division, an odd exponent where inertness requires an
/// even one); a computation that hits one must be abandoned, never patched
/// into a partial result.
#[derive(Debug, Error)]
pub enum QuadringError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("logic invariant violated: {0}")]
    LogicInvariant(String),

    #[error("prime cache format error: {0}")]
    CacheFormat(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, QuadringError>;

impl QuadringError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        QuadringError::InvalidArgument(msg.into())
    }

    pub fn logic_invariant(msg: impl Into<String>) -> Self {
        QuadringError::LogicInvariant(msg.into())
    }
}
