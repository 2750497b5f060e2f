//! Status-coded errors
//!
//! - [`StatusError`]: message plus status code
//! - [`StackError`]: a `StatusError` plus the stack captured where it was built
//! - Structured `{ "error", "code" }` encoding via serde
//! - [`ResultExt`] for annotating `Result` errors in place

pub mod constructors;
pub mod display;
pub mod encoding;
pub mod extensions;
pub mod macros;
pub mod types;

pub use encoding::{CODE_KEY, ERROR_KEY};
pub use extensions::ResultExt;
pub use types::{DecodeError, Result, StackError, StatusError};
