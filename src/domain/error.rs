//! Error types for word-count-filter.

use thiserror::Error;

/// Errors raised by filter construction and decision parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// Word count threshold below zero
    #[error("Invalid threshold {value}: a non-negative integer must be provided for WordCountFilter")]
    InvalidThreshold { value: i64 },

    /// Decision name not one of ACCEPT, DENY, NEUTRAL
    #[error("Unknown decision '{0}': expected ACCEPT, DENY or NEUTRAL")]
    UnknownDecision(String),
}

/// Failure to produce the formatted text of a message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct RenderError(pub String);

impl RenderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
