//! Core error types and definitions

use thiserror::Error;

use crate::stack::Stack;

/// An error message paired with an application defined status code.
///
/// The code is `0` ("no status") unless set at construction or through
/// [`StatusError::set_status`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusError {
    /// Status code, meaning defined by the embedding application
    pub(super) code: i32,
    /// Human readable message, possibly prefixed with context
    pub(super) message: String,
}

/// A [`StatusError`] together with the stack captured where it was built.
#[derive(Debug, Clone)]
pub struct StackError {
    /// The annotated error
    pub(super) inner: StatusError,
    /// Snapshot taken by the constructor, never mutated afterwards
    pub(super) stack: Stack,
}

/// Failures decoding the structured `{ "error", "code" }` form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The `code` field is not a base-10 integer
    #[error("invalid status code {0:?}")]
    InvalidCode(String),
}

/// Result type alias using [`StatusError`]
pub type Result<T> = std::result::Result<T, StatusError>;
