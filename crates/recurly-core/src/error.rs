//! Error types for recurly-core.

/// Errors raised while converting element text to a scalar value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScalarError {
    /// Text was not a decimal integer.
    #[error("invalid integer: {0:?}")]
    InvalidInt(String),

    /// Text was not `true` or `false`.
    #[error("invalid boolean: {0:?}")]
    InvalidBool(String),

    /// Text was not an RFC 3339 timestamp.
    #[error("invalid datetime: {0:?}")]
    InvalidTime(String),
}
