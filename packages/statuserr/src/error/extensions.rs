//! Annotate `Result` errors without unwrapping them first

use std::error::Error as StdError;

use super::types::{StackError, StatusError};
use crate::logging::logger;
use crate::stack::default_capturer;

/// Status annotation for any `Result` whose error implements `std::error::Error`.
///
/// `Ok` values pass through untouched and nothing is logged.
///
/// ```
/// use statuserr::ResultExt;
///
/// let parsed = "x1".parse::<u8>().status(400);
/// assert_eq!(parsed.unwrap_err().code(), 400);
/// ```
pub trait ResultExt<T> {
    /// Same as [`StatusError::with_status`] on the error.
    fn status(self, code: i32) -> Result<T, StatusError>;

    /// Same as [`StatusError::with_message`] on the error.
    fn message(self, message: &str, code: i32) -> Result<T, StatusError>;

    /// Same as [`StackError::with_stack`] on the error; the first frame is
    /// the caller of this method.
    fn stack(self, message: &str, code: i32) -> Result<T, StackError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: StdError,
{
    #[track_caller]
    fn status(self, code: i32) -> Result<T, StatusError> {
        match self {
            Ok(value) => Ok(value),
            Err(e) => Err(logger().with_code(code, e.to_string())),
        }
    }

    #[track_caller]
    fn message(self, message: &str, code: i32) -> Result<T, StatusError> {
        match self {
            Ok(value) => Ok(value),
            Err(e) => Err(logger().with_code(code, format!("{message}: {e}"))),
        }
    }

    #[inline(never)]
    fn stack(self, message: &str, code: i32) -> Result<T, StackError> {
        match self {
            Ok(value) => Ok(value),
            Err(e) => {
                let stack = default_capturer().capture(1);
                Err(StackError::assemble(message, code, &e, stack))
            }
        }
    }
}
