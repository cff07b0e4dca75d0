use thiserror::Error;

/// Returned by `pop` and `peek` when the stack holds no elements.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("empty stack")]
pub struct EmptyStackError;
