//! # statuserr
//!
//! Errors that carry a numeric status code, analogous to protocol or HTTP
//! status codes, with optional call stack capture for diagnostics.
//!
//! ```
//! use statuserr::{StackError, StatusError};
//!
//! let db = std::io::Error::new(std::io::ErrorKind::Other, "db down");
//!
//! let err = StatusError::with_message("fetch user", 500, Some(&db)).unwrap();
//! assert_eq!(err.to_string(), "Status 500 : fetch user: db down");
//! assert_eq!(err.encode()["code"], "500");
//!
//! let traced = StackError::with_stack("fetch user", 500, Some(&db)).unwrap();
//! assert!(traced.to_string().starts_with("Status 500 : fetch user: db down"));
//! ```
//!
//! Every [`StatusError`] constructor writes one line to the process-wide
//! [`DiagnosticLogger`], which discards everything until [`set_logger`] is
//! called. [`StackError`] construction is not logged.
//!
//! ## Feature Flags
//!
//! | Flag             | Effect |
//! |------------------|--------|
//! | `full-backtrace` | Default. Capture real stacks; without it stacks are empty |

pub mod error;
pub mod logging;
pub mod stack;

pub use error::*;
pub use logging::{logger, reset_logger, set_logger, CallSite, DiagnosticLogger};
pub use stack::{BacktraceCapturer, Frame, NoopCapturer, Stack, StackCapturer};
