//! Diagnostic sink for constructed errors
//!
//! Every [`StatusError`] built through a logging constructor writes one line
//! to a [`DiagnosticLogger`]:
//!
//! ```text
//! <file> <line> <rendered error> <local timestamp>
//! ```
//!
//! `<file>:<line>` is the application code that called the constructor. The
//! line format is meant for humans and carries no stability guarantee.
//!
//! A logger starts out discarding everything. Applications either inject
//! their own logger (see [`DiagnosticLogger::new`]) or replace the writer of
//! the process-wide one with [`set_logger`] during startup.

use std::fmt;
use std::io::Write;
use std::panic::Location;
use std::sync::{Mutex, PoisonError};

use chrono::Local;
use once_cell::sync::Lazy;

use crate::error::StatusError;
use crate::stack::base_name;

/// `chrono` format of the trailing timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f %z";

type Sink = Box<dyn Write + Send>;

static LOGGER: Lazy<DiagnosticLogger> = Lazy::new(DiagnosticLogger::discard);

/// The process-wide logger used by the `StatusError` constructors.
#[must_use]
pub fn logger() -> &'static DiagnosticLogger {
    &LOGGER
}

/// Route the process-wide logger to `writer`.
///
/// Meant to be called once during startup. Replacing the writer while other
/// threads emit is safe; lines already written stay with the old writer.
pub fn set_logger<W>(writer: W)
where
    W: Write + Send + 'static,
{
    LOGGER.set_writer(writer);
}

/// Return the process-wide logger to discarding everything.
pub fn reset_logger() {
    LOGGER.reset();
}

/// Source position of the code that constructed an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    file: String,
    line: u32,
}

impl CallSite {
    /// Location of whoever called the current `#[track_caller]` chain.
    #[track_caller]
    #[must_use]
    pub fn caller() -> Self {
        Self::from_location(Location::caller())
    }

    /// Site for a `std::panic::Location`.
    #[must_use]
    pub fn from_location(location: &Location<'_>) -> Self {
        Self::new(location.file(), location.line())
    }

    /// Site for `path` and `line`, keeping only the file's base name.
    ///
    /// A path without a usable file name yields [`CallSite::unresolved`].
    #[must_use]
    pub fn new(path: &str, line: u32) -> Self {
        let file = base_name(path);
        if file.is_empty() {
            return Self::unresolved();
        }
        Self {
            file: file.to_string(),
            line,
        }
    }

    /// Placeholder site, rendered as `??? 1`.
    #[must_use]
    pub fn unresolved() -> Self {
        Self {
            file: "???".to_string(),
            line: 1,
        }
    }

    /// Source file base name.
    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Source line.
    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.file, self.line)
    }
}

/// Writable destination for the one-line error records.
///
/// The writer is owned by the logger but opened and configured by the
/// caller; the logger never flushes or closes it beyond dropping it when
/// replaced.
pub struct DiagnosticLogger {
    sink: Mutex<Option<Sink>>,
}

impl DiagnosticLogger {
    /// A logger that drops every record.
    #[must_use]
    pub fn discard() -> Self {
        Self {
            sink: Mutex::new(None),
        }
    }

    /// A logger writing to `writer`.
    pub fn new<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            sink: Mutex::new(Some(Box::new(writer))),
        }
    }

    /// Replace the current writer.
    pub fn set_writer<W>(&self, writer: W)
    where
        W: Write + Send + 'static,
    {
        *self.lock() = Some(Box::new(writer));
        log::debug!("diagnostic sink replaced");
    }

    /// Go back to discarding records.
    pub fn reset(&self) {
        *self.lock() = None;
    }

    /// True while records are being dropped.
    #[must_use]
    pub fn is_discard(&self) -> bool {
        self.lock().is_none()
    }

    /// Write the record for `error` constructed at `site`.
    ///
    /// Write failures are reported through `log` and otherwise ignored.
    pub fn record(&self, site: &CallSite, error: &StatusError) {
        let mut sink = self.lock();
        let Some(writer) = sink.as_mut() else {
            return;
        };

        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        if let Err(e) = writeln!(writer, "{site} {error} {timestamp}") {
            log::warn!("failed to write diagnostic record: {e}");
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Sink>> {
        self.sink.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for DiagnosticLogger {
    fn default() -> Self {
        Self::discard()
    }
}

impl fmt::Debug for DiagnosticLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticLogger")
            .field("discard", &self.is_discard())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_site_keeps_base_name() {
        let site = CallSite::new("/home/app/src/handlers/user.rs", 42);
        assert_eq!(site.file(), "user.rs");
        assert_eq!(site.line(), 42);
        assert_eq!(site.to_string(), "user.rs 42");
    }

    #[test]
    fn call_site_without_file_name_is_unresolved() {
        assert_eq!(CallSite::new("", 10), CallSite::unresolved());
        assert_eq!(CallSite::new("src/", 10).to_string(), "??? 1");
    }

    #[test]
    fn caller_points_at_this_file() {
        let site = CallSite::caller();
        assert_eq!(site.file(), "logging.rs");
        assert!(site.line() > 0);
    }
}
