//! Error constructors and methods
//!
//! Constructors that take a cause return `None` when the cause is `None`:
//! no error in, no error out.

use std::error::Error as StdError;

use super::types::{StackError, StatusError};
use crate::logging::{logger, CallSite, DiagnosticLogger};
use crate::stack::{default_capturer, Stack, StackCapturer};

impl StatusError {
    /// Bare value, nothing logged.
    pub(crate) fn from_parts(code: i32, message: String) -> Self {
        Self { code, message }
    }

    /// Create an error with status `0`, logged to the process-wide logger.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        logger().new_error(message)
    }

    /// Create an error with both message and status, logged once.
    #[track_caller]
    pub fn with_code(code: i32, message: impl Into<String>) -> Self {
        logger().with_code(code, message)
    }

    /// Tag `err` with a status code, keeping its message unchanged.
    ///
    /// ```
    /// use statuserr::StatusError;
    ///
    /// let missing = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    /// let err = StatusError::with_status(404, Some(&missing)).unwrap();
    /// assert_eq!(err.to_string(), "Status 404 : missing");
    /// assert!(StatusError::with_status(404, None).is_none());
    /// ```
    #[track_caller]
    pub fn with_status(code: i32, err: Option<&dyn StdError>) -> Option<Self> {
        logger().with_status(code, err)
    }

    /// Tag `err` with a status code and prefix its message with `message: `.
    #[track_caller]
    pub fn with_message(message: &str, code: i32, err: Option<&dyn StdError>) -> Option<Self> {
        logger().with_message(message, code, err)
    }

    /// Overwrite the status code in place; returns `self` for chaining.
    pub fn set_status(&mut self, code: i32) -> &mut Self {
        self.code = code;
        self
    }

    /// The status code.
    #[must_use]
    pub fn code(&self) -> i32 {
        self.code
    }

    /// The message, without the `Status <code> : ` prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl DiagnosticLogger {
    /// Create an error with status `0` and record it here.
    #[track_caller]
    pub fn new_error(&self, message: impl Into<String>) -> StatusError {
        self.with_code(0, message)
    }

    /// Create an error with message and status and record it here.
    #[track_caller]
    pub fn with_code(&self, code: i32, message: impl Into<String>) -> StatusError {
        self.logged(StatusError::from_parts(code, message.into()))
    }

    /// Tag `err` with a status code and record it here.
    #[track_caller]
    pub fn with_status(&self, code: i32, err: Option<&dyn StdError>) -> Option<StatusError> {
        let err = err?;
        Some(self.logged(StatusError::from_parts(code, err.to_string())))
    }

    /// Tag `err` with a status code and message prefix and record it here.
    #[track_caller]
    pub fn with_message(
        &self,
        message: &str,
        code: i32,
        err: Option<&dyn StdError>,
    ) -> Option<StatusError> {
        let err = err?;
        Some(self.logged(StatusError::from_parts(code, format!("{message}: {err}"))))
    }

    #[track_caller]
    fn logged(&self, error: StatusError) -> StatusError {
        self.record(&CallSite::caller(), &error);
        error
    }
}

impl StackError {
    /// Annotate `err` with a message prefix and status, capturing the stack
    /// of the calling thread. Nothing is logged; the stack is the diagnostic.
    ///
    /// The first captured frame is the caller of this function.
    #[inline(never)]
    #[must_use]
    pub fn with_stack(message: &str, status: i32, err: Option<&dyn StdError>) -> Option<Self> {
        let err = err?;
        let stack = default_capturer().capture(1);
        Some(Self::assemble(message, status, err, stack))
    }

    /// Same as [`StackError::with_stack`] with an explicit capturer.
    #[inline(never)]
    #[must_use]
    pub fn with_stack_using(
        capturer: &dyn StackCapturer,
        message: &str,
        status: i32,
        err: Option<&dyn StdError>,
    ) -> Option<Self> {
        let err = err?;
        let stack = capturer.capture(1);
        Some(Self::assemble(message, status, err, stack))
    }

    pub(crate) fn assemble(message: &str, status: i32, err: &dyn StdError, stack: Stack) -> Self {
        Self {
            inner: StatusError::from_parts(status, format!("{message}: {err}")),
            stack,
        }
    }

    /// Overwrite the inner error's status code. Does not chain.
    pub fn set_status(&mut self, status: i32) {
        self.inner.code = status;
    }

    /// The inner error's status code.
    #[must_use]
    pub fn code(&self) -> i32 {
        self.inner.code
    }

    /// The annotated error without its stack.
    #[must_use]
    pub fn inner(&self) -> &StatusError {
        &self.inner
    }

    /// The stack captured at construction.
    #[must_use]
    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Drop the stack and keep the annotated error.
    #[must_use]
    pub fn into_inner(self) -> StatusError {
        self.inner
    }
}
