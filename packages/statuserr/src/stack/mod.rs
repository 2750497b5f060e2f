//! Call stack capture and rendering
//!
//! A [`Stack`] is a fixed snapshot of return addresses, innermost frame
//! first. Capture goes through the [`StackCapturer`] seam so that targets
//! without stack walking can plug in [`NoopCapturer`].

mod capture;
mod frame;

use std::fmt;
use std::slice;

pub use capture::{BacktraceCapturer, NoopCapturer, DEFAULT_DEPTH};
pub use frame::{Frame, UNKNOWN};

pub(crate) use frame::base_name;

/// Source of stack snapshots.
pub trait StackCapturer: Send + Sync {
    /// Snapshot the calling thread's stack.
    ///
    /// `skip` is the number of frames between the capturer and the code the
    /// snapshot should start at, e.g. `1` when called from an error
    /// constructor so the first frame is the constructor's caller.
    fn capture(&self, skip: usize) -> Stack;
}

/// The capturer used by constructors that do not take one explicitly.
#[must_use]
pub fn default_capturer() -> &'static dyn StackCapturer {
    #[cfg(feature = "full-backtrace")]
    {
        static CAPTURER: BacktraceCapturer = BacktraceCapturer::with_depth(DEFAULT_DEPTH);
        &CAPTURER
    }
    #[cfg(not(feature = "full-backtrace"))]
    {
        &NoopCapturer
    }
}

/// Ordered frames from innermost (most recent call) to outermost.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack {
    frames: Vec<Frame>,
}

impl Stack {
    /// Build a stack from frames already in innermost-first order.
    #[must_use]
    pub fn from_frames(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    /// The captured frames.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Number of captured frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True when nothing was captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame locations as `[a.rs:12 b.rs:40]`, between the compact `{}` and
    /// the long `{:#}` forms.
    #[must_use]
    pub fn locations(&self) -> String {
        let locations: Vec<String> = self.frames.iter().map(Frame::location).collect();
        format!("[{}]", locations.join(" "))
    }

    /// Iterate frames, innermost first.
    pub fn iter(&self) -> slice::Iter<'_, Frame> {
        self.frames.iter()
    }
}

impl<'a> IntoIterator for &'a Stack {
    type Item = &'a Frame;
    type IntoIter = slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

impl fmt::Display for Stack {
    /// `{}` lists file names as `[a.rs b.rs]`; `{:#}` writes every frame in
    /// long form, each preceded by a newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            for frame in &self.frames {
                write!(f, "\n{frame:#}")?;
            }
            return Ok(());
        }

        f.write_str("[")?;
        for (i, frame) in self.frames.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{frame}")?;
        }
        f.write_str("]")
    }
}
