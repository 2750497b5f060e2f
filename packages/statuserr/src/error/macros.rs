//! Macros for error creation and handling

/// Create a logged [`StatusError`](crate::StatusError) from a status code
/// and a format string. The diagnostic record points at the macro call.
///
/// ```
/// let err = statuserr::err!(409, "user {} already exists", "ada");
/// assert_eq!(err.to_string(), "Status 409 : user ada already exists");
/// ```
#[macro_export]
macro_rules! err {
    ($code:expr, $msg:literal $(,)?) => {
        $crate::StatusError::with_code($code, ::std::format!($msg))
    };
    ($code:expr, $fmt:literal, $($arg:tt)*) => {
        $crate::StatusError::with_code($code, ::std::format!($fmt, $($arg)*))
    };
}

/// Return early with an error built by [`err!`].
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return ::std::result::Result::Err($crate::err!($($arg)*).into())
    };
}

/// Return early with an error built by [`err!`] unless a condition holds.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {
        if !$cond {
            $crate::bail!($($arg)*);
        }
    };
}
