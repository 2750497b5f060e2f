//! Display and trait implementations for the error types

use super::types::{StackError, StatusError};
use std::fmt;

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Status {} : {}", self.code, self.message)
    }
}

impl std::error::Error for StatusError {}

impl fmt::Display for StackError {
    /// The inner error followed by the long form of every captured frame.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:#}", self.inner, self.stack)
    }
}

impl std::error::Error for StackError {}

impl From<StackError> for StatusError {
    fn from(err: StackError) -> Self {
        err.inner
    }
}
