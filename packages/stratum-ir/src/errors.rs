//! Error types for stratum-ir
//!
//! Provides unified error handling across the crate. Every failure is
//! scoped to the smallest unit that can safely be abandoned: a constant
//! kills one method's translation, an operator kills one statement, a
//! missing thread class only degrades the escape root set.

use thiserror::Error;

/// Main error type for stratum-ir operations
#[derive(Debug, Error)]
pub enum StratumError {
    /// Constant kind outside the supported closed set.
    /// Fatal to the enclosing method's translation only.
    #[error("unsupported constant kind: {0}")]
    UnsupportedConstant(String),

    /// Binary operator outside the supported closed set.
    /// Fatal to the enclosing statement only.
    #[error("unresolved binary operator: {0}")]
    UnresolvedOperator(String),

    /// Statement shape the translator does not model.
    /// Recorded and skipped, never raised out of a build.
    #[error("unhandled statement kind `{kind}` at index {index}")]
    UnhandledStatement { kind: &'static str, index: usize },

    /// A class could not be resolved in the current class universe
    #[error("class not found: {0}")]
    ClassNotFound(String),

    /// Internal IR consistency violation
    #[error("invalid IR: {0}")]
    InvalidIr(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl StratumError {
    /// Create an internal consistency error
    pub fn invalid_ir(msg: impl Into<String>) -> Self {
        StratumError::InvalidIr(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        StratumError::Config(msg.into())
    }
}

/// Result type alias for stratum operations
pub type Result<T> = std::result::Result<T, StratumError>;
