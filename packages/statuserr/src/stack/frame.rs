//! A single captured return address and its lazily resolved symbol data

use std::ffi::c_void;
use std::fmt;
use std::path::PathBuf;

/// Rendered in place of a file or function that could not be resolved.
pub const UNKNOWN: &str = "unknown";

/// One return address captured from the call stack.
///
/// Only the instruction pointer is stored. File, line and function name are
/// looked up every time they are requested, so capturing stays cheap and the
/// symbolization cost is paid only when an error is actually rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frame {
    ip: usize,
}

/// Symbol data resolved for a [`Frame`].
#[derive(Debug, Clone, Default)]
struct Symbol {
    name: Option<String>,
    file: Option<PathBuf>,
    line: Option<u32>,
}

impl Frame {
    /// Wrap a raw instruction pointer.
    #[must_use]
    pub const fn from_ip(ip: usize) -> Self {
        Self { ip }
    }

    /// The raw instruction pointer recorded at capture time.
    #[must_use]
    pub const fn ip(&self) -> usize {
        self.ip
    }

    /// Full path of the source file, or `"unknown"`.
    #[must_use]
    pub fn file(&self) -> String {
        self.resolve()
            .and_then(|sym| sym.file)
            .map_or_else(|| UNKNOWN.to_string(), |path| path.display().to_string())
    }

    /// Base name of the source file, or `"unknown"`.
    #[must_use]
    pub fn file_name(&self) -> String {
        base_name(&self.file()).to_string()
    }

    /// Source line, or `0` when the frame cannot be resolved.
    #[must_use]
    pub fn line(&self) -> u32 {
        self.resolve().and_then(|sym| sym.line).unwrap_or(0)
    }

    /// Fully qualified function name without the trailing symbol hash.
    #[must_use]
    pub fn name(&self) -> String {
        self.resolve()
            .and_then(|sym| sym.name)
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    /// `file_name:line`, e.g. `main.rs:12` or `unknown:0`.
    #[must_use]
    pub fn location(&self) -> String {
        format!("{}:{}", self.file_name(), self.line())
    }

    /// Function name with its module path and owning type stripped.
    #[must_use]
    pub fn function(&self) -> String {
        function_name(&self.name()).to_string()
    }

    fn resolve(&self) -> Option<Symbol> {
        let mut resolved: Option<Symbol> = None;
        backtrace::resolve(self.ip as *mut c_void, |symbol| {
            // Inlined frames report several symbols; the first is the innermost.
            if resolved.is_some() {
                return;
            }
            resolved = Some(Symbol {
                name: symbol.name().map(|name| format!("{name:#}")),
                file: symbol.filename().map(PathBuf::from),
                line: symbol.lineno(),
            });
        });
        resolved
    }
}

impl fmt::Display for Frame {
    /// `{}` renders the file base name, `{:#}` renders the qualified
    /// function name followed by an indented `file:line` line, or
    /// `unknown:0` when the frame cannot be resolved.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return f.write_str(&self.file_name());
        }

        match self.resolve() {
            Some(Symbol {
                name: Some(name),
                file,
                line,
            }) => {
                let file = file.map_or_else(|| UNKNOWN.to_string(), |p| p.display().to_string());
                write!(f, "{name}\n\t{file}:{}", line.unwrap_or(0))
            }
            _ => write!(f, "{UNKNOWN}:0"),
        }
    }
}

/// Everything after the last `/` or `\`.
pub(crate) fn base_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Last `::` segment of a qualified name, ignoring `::` inside `<...>`.
///
/// `statuserr::stack::Frame::line` becomes `line` and
/// `<app::Store as app::Repo>::load` becomes `load`. Two methods with the
/// same name on different types render identically.
pub(crate) fn function_name(qualified: &str) -> &str {
    let mut depth = 0usize;
    let mut start = 0usize;
    let bytes = qualified.as_bytes();
    let mut i = 0usize;
    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                start = i + 2;
                i += 1;
            }
            _ => {}
        }
        i += 1;
    }
    &qualified[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_name_strips_directories() {
        assert_eq!(base_name("/src/app/main.rs"), "main.rs");
        assert_eq!(base_name("C:\\src\\app\\main.rs"), "main.rs");
        assert_eq!(base_name("main.rs"), "main.rs");
        assert_eq!(base_name("src/"), "");
    }

    #[test]
    fn function_name_keeps_last_segment() {
        assert_eq!(function_name("statuserr::stack::Frame::line"), "line");
        assert_eq!(function_name("main"), "main");
        assert_eq!(function_name("<app::Store as app::Repo>::load"), "load");
        assert_eq!(function_name("app::run::{{closure}}"), "{{closure}}");
        assert_eq!(function_name("<T as core::fmt::Display>::fmt"), "fmt");
    }

    #[test]
    fn unresolvable_frame_degrades() {
        let frame = Frame::from_ip(0);
        assert_eq!(frame.file_name(), UNKNOWN);
        assert_eq!(frame.line(), 0);
        assert_eq!(frame.to_string(), UNKNOWN);
        assert_eq!(frame.location(), "unknown:0");
        assert_eq!(format!("{frame:#}"), "unknown:0");
    }
}
